//! Error types for arena allocation and body construction.

use core::fmt;

use crate::arena::ObjectKind;

/// Errors that can occur while allocating from the arena or building a body.
///
/// None of these leave the arena partially modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhysicsError {
    /// A block has less remaining room than was requested.
    CapacityExceeded { kind: ObjectKind, requested: usize, available: usize },
    /// Particle index is out of bounds.
    ParticleOutOfBounds { index: usize, count: usize },
    /// A body needs more segments than it was given.
    InsufficientSegments { required: usize, actual: usize },
    /// Cloth pin spacing must be at least 1.
    InvalidPinSpacing,
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::CapacityExceeded { kind, requested, available } => {
                write!(f, "{} capacity exceeded: requested {}, available {}", kind, requested, available)
            }
            PhysicsError::ParticleOutOfBounds { index, count } => {
                write!(f, "particle index {} out of bounds (count: {})", index, count)
            }
            PhysicsError::InsufficientSegments { required, actual } => {
                write!(f, "body needs at least {} segments, got {}", required, actual)
            }
            PhysicsError::InvalidPinSpacing => write!(f, "pin spacing must be at least 1"),
        }
    }
}

impl core::error::Error for PhysicsError {}
