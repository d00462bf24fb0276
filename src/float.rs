//! Scalar abstraction: the simulation runs on either `f32` or `f64`.

use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Neg, Sub};

/// Scalar type used for positions, stiffness and angles.
///
/// Transcendental functions go through `libm` so the crate stays `no_std`.
pub trait Float:
    Copy
    + PartialEq
    + PartialOrd
    + Default
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// 0.0
    fn zero() -> Self;
    /// 1.0
    fn one() -> Self;
    /// Half turn, `π`.
    fn pi() -> Self;
    /// Full turn, `2π`.
    fn tau() -> Self;

    /// Nearest representable value; used for tuning constants.
    fn from_f64(v: f64) -> Self;
    /// Counts (sub-steps, segments) as a scalar.
    fn from_usize(v: usize) -> Self;

    /// Square root.
    fn sqrt(self) -> Self;
    /// Sine of an angle in radians.
    fn sin(self) -> Self;
    /// Cosine of an angle in radians.
    fn cos(self) -> Self;
    /// Absolute value.
    fn abs(self) -> Self;
    /// Four-quadrant arctangent of `y / x`, in `[-π, π]` (the sign of a zero `y` picks the end).
    fn atan2(y: Self, x: Self) -> Self;

    /// Smaller of two values.
    fn min(self, other: Self) -> Self {
        if other < self { other } else { self }
    }

    /// Larger of two values.
    fn max(self, other: Self) -> Self {
        if other > self { other } else { self }
    }

    /// Truncate into `[lo, hi]`.
    fn clamp(self, lo: Self, hi: Self) -> Self {
        self.max(lo).min(hi)
    }
}

macro_rules! impl_float {
    ($t:ident, $sqrt:ident, $sin:ident, $cos:ident, $abs:ident, $atan2:ident) => {
        impl Float for $t {
            #[inline]
            fn zero() -> Self { 0.0 }
            #[inline]
            fn one() -> Self { 1.0 }
            #[inline]
            fn pi() -> Self { core::$t::consts::PI }
            #[inline]
            fn tau() -> Self { core::$t::consts::TAU }
            #[inline]
            fn from_f64(v: f64) -> Self { v as $t }
            #[inline]
            fn from_usize(v: usize) -> Self { v as $t }
            #[inline]
            fn sqrt(self) -> Self { libm::$sqrt(self) }
            #[inline]
            fn sin(self) -> Self { libm::$sin(self) }
            #[inline]
            fn cos(self) -> Self { libm::$cos(self) }
            #[inline]
            fn abs(self) -> Self { libm::$abs(self) }
            #[inline]
            fn atan2(y: Self, x: Self) -> Self { libm::$atan2(y, x) }
        }
    };
}

impl_float!(f32, sqrtf, sinf, cosf, fabsf, atan2f);
impl_float!(f64, sqrt, sin, cos, fabs, atan2);
