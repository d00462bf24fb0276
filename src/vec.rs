//! Planar vector type used for every position in the simulation.

use crate::float::Float;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// 2D vector of a [`Float`] scalar.
///
/// A plain value type: operators return new vectors, compound operators
/// update in place.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Create a new 2D vector.
    pub fn new(x: F, y: F) -> Self { Vec2 { x, y } }

    /// The zero vector.
    pub fn zero() -> Self { Vec2 { x: F::zero(), y: F::zero() } }

    /// Dot product.
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    /// 2D cross product (z component of the 3D cross product).
    pub fn cross(self, other: Self) -> F {
        self.x * other.y - self.y * other.x
    }

    /// Squared length (avoids sqrt).
    pub fn length_sq(self) -> F {
        self.dot(self)
    }

    /// Euclidean length.
    pub fn length(self) -> F {
        self.length_sq().sqrt()
    }

    /// Unit vector in the same direction.
    ///
    /// Not guarded: a zero-length vector yields NaN components.
    pub fn normal(self) -> Self {
        self / self.length()
    }

    /// Perpendicular vector, `(y, -x)` (clockwise in a y-up frame).
    pub fn perpendicular(self) -> Self {
        Vec2 { x: self.y, y: -self.x }
    }

    /// Direction of this vector measured from the positive x axis.
    pub fn heading(self) -> F {
        F::atan2(self.y, self.x)
    }

    /// Signed angle swept from `self` to `end`, in `(-π, π]`: `atan2(cross, dot)`.
    pub fn angle_to(self, end: Self) -> F {
        let angle = F::atan2(self.cross(end), self.dot(end));
        // Opposite rays give a signed-zero cross product; -π folds to π.
        if angle <= -F::pi() { angle + F::tau() } else { angle }
    }

    /// Signed angle at `center` swept from ray `center→left` to ray `center→right`.
    pub fn angle(left: Self, center: Self, right: Self) -> F {
        (left - center).angle_to(right - center)
    }

    /// Rotate about the origin, counter-clockwise for positive `radians`.
    pub fn rotate(self, radians: F) -> Self {
        let (sin, cos) = (radians.sin(), radians.cos());
        Vec2 {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        }
    }

    /// Rotate about `origin` by `radians`.
    pub fn rotate_about(self, origin: Self, radians: F) -> Self {
        (self - origin).rotate(radians) + origin
    }

    /// Distance between two points.
    pub fn distance(self, other: Self) -> F {
        (self - other).length()
    }

    /// Squared distance between two points.
    pub fn distance_sq(self, other: Self) -> F {
        (self - other).length_sq()
    }

    /// Component-wise comparison within `epsilon`.
    pub fn epsilon_eq(self, other: Self, epsilon: F) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Vec2 { x: self.x + rhs.x, y: self.y + rhs.y } }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Vec2 { x: self.x - rhs.x, y: self.y - rhs.y } }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec2 { x: -self.x, y: -self.y } }
}

impl<F: Float> Mul<F> for Vec2<F> {
    type Output = Self;
    fn mul(self, s: F) -> Self { Vec2 { x: self.x * s, y: self.y * s } }
}

impl<F: Float> Div<F> for Vec2<F> {
    type Output = Self;
    fn div(self, s: F) -> Self { Vec2 { x: self.x / s, y: self.y / s } }
}

impl<F: Float> AddAssign for Vec2<F> {
    fn add_assign(&mut self, rhs: Self) { *self = *self + rhs; }
}

impl<F: Float> SubAssign for Vec2<F> {
    fn sub_assign(&mut self, rhs: Self) { *self = *self - rhs; }
}

impl<F: Float> MulAssign<F> for Vec2<F> {
    fn mul_assign(&mut self, s: F) { *self = *self * s; }
}

impl<F: Float> DivAssign<F> for Vec2<F> {
    fn div_assign(&mut self, s: F) { *self = *self / s; }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn vec2_length() {
        let v = Vec2::new(3.0f32, 4.0);
        assert!((v.length() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn cross_of_axes() {
        let i = Vec2::new(1.0f32, 0.0);
        let j = Vec2::new(0.0f32, 1.0);
        assert_eq!(i.cross(j), 1.0);
        assert_eq!(j.cross(i), -1.0);
    }

    #[test]
    fn normal_has_unit_length() {
        let n = Vec2::new(-6.0f64, 8.0).normal();
        assert!((n.length() - 1.0).abs() < 1e-12);
        assert!(n.epsilon_eq(Vec2::new(-0.6, 0.8), 1e-12));
    }

    #[test]
    fn perpendicular_is_orthogonal() {
        let v = Vec2::new(2.0f32, 5.0);
        assert_eq!(v.perpendicular(), Vec2::new(5.0, -2.0));
        assert_eq!(v.dot(v.perpendicular()), 0.0);
    }

    #[test]
    fn angle_is_signed() {
        let center = Vec2::new(1.0f64, 1.0);
        let left = Vec2::new(2.0, 1.0);
        let right = Vec2::new(1.0, 2.0);
        assert!((Vec2::angle(left, center, right) - FRAC_PI_2).abs() < 1e-12);
        assert!((Vec2::angle(right, center, left) + FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn opposite_rays_measure_pi() {
        let a = Vec2::new(-1.0f64, 0.0);
        let b = Vec2::new(1.0f64, 0.0);
        assert_eq!(Vec2::angle(a, Vec2::zero(), b), PI);
        assert_eq!(Vec2::angle(b, Vec2::zero(), a), PI);
        assert_eq!(Vec2::new(-1.0f32, 0.0).angle_to(Vec2::new(1.0, 0.0)), core::f32::consts::PI);
    }

    #[test]
    fn rotate_about_quarter_turn() {
        let p = Vec2::new(3.0f64, 1.0);
        let origin = Vec2::new(1.0, 1.0);
        let r = p.rotate_about(origin, FRAC_PI_2);
        assert!(r.epsilon_eq(Vec2::new(1.0, 3.0), 1e-12));
    }

    #[test]
    fn rotate_by_zero_is_exact() {
        let p = Vec2::new(12.5f32, -3.25);
        assert_eq!(p.rotate_about(Vec2::new(4.0, 4.0), 0.0), p);
    }

    #[test]
    fn compound_operators() {
        let mut v = Vec2::new(1.0f32, 2.0);
        v += Vec2::new(1.0, 1.0);
        v *= 2.0;
        v -= Vec2::new(0.0, 2.0);
        v /= 2.0;
        assert_eq!(v, Vec2::new(2.0, 2.0));
    }

    #[test]
    fn distance_calculation() {
        let a = Vec2::new(0.0f32, 0.0);
        let b = Vec2::new(3.0f32, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-6);
        assert!((a.distance_sq(b) - 25.0).abs() < 1e-6);
    }
}
