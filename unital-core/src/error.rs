//! Structured error type for the crate's few fallible, non-NaN-payload
//! failure modes.

use core::fmt;

/// Failure modes that are neither rejectable at compile time nor
/// appropriate for the quiet-NaN-payload runtime-mismatch regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitError {
    /// A dimension's registration table would exceed [`crate::registry::REGISTRY_CAPACITY`].
    RegistryCapacityExceeded { dimension: crate::dimension::Dimension, attempted: usize },
    /// A `Ratio` was constructed, or would be constructed, with a zero denominator.
    InvalidRatio { numerator: i64, denominator: i64 },
}

impl fmt::Display for UnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitError::RegistryCapacityExceeded { dimension, attempted } => write!(
                f,
                "registry for dimension {} would hold {} entries, exceeding capacity {}",
                dimension,
                attempted,
                crate::registry::REGISTRY_CAPACITY
            ),
            UnitError::InvalidRatio { numerator, denominator } => {
                write!(f, "invalid ratio {}/{}: denominator must be nonzero", numerator, denominator)
            }
        }
    }
}

impl core::error::Error for UnitError {}
