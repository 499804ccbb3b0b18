//! Error types for simulation operations.

use core::fmt;

/// Errors that can occur during simulation operations.
///
/// Degenerate geometry (zero-length vectors, coincident points) is never an
/// error; those cases resolve to zero results.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// Two vectors of different dimension were combined.
    DimensionMismatch { expected: usize, found: usize },
    /// An argument was outside its allowed range.
    InvalidArgument(&'static str),
    /// Point index is out of bounds for the body.
    PointOutOfBounds { index: usize, count: usize },
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::DimensionMismatch { expected, found } => {
                write!(f, "vector dimensions must match (expected {}, found {})", expected, found)
            }
            PhysicsError::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            PhysicsError::PointOutOfBounds { index, count } => {
                write!(f, "point index {} out of bounds (count: {})", index, count)
            }
        }
    }
}

impl core::error::Error for PhysicsError {}
