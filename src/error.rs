//! Errors for checked geometry preconditions.

use std::fmt;

/// Rejected construction input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KernelError {
    /// Sphere radius that is negative, zero or not finite.
    InvalidRadius(f64),
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::InvalidRadius(r) => {
                write!(f, "sphere radius must be finite and positive, got {}", r)
            }
        }
    }
}

impl std::error::Error for KernelError {}
