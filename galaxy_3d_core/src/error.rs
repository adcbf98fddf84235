//! Error types for the Galaxy3D core primitives
//!
//! Recoverable misuse of the index pool (bad capacity, checked release of an
//! invalid index) is reported through these types. Invariant violations never
//! produce an error value: they go through the fatal check instead.

use std::fmt;

/// Result type for Galaxy3D core operations
pub type Galaxy3dResult<T> = Result<T, Galaxy3dError>;

/// Galaxy3D core errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Galaxy3dError {
    /// Pool capacity is zero or its indices would not fit in a `u32`
    InvalidCapacity(usize),

    /// Released index lies outside `[0, capacity)`
    IndexOutOfRange {
        index: u32,
        capacity: usize,
    },

    /// Release into a ring that already holds every vendable index
    PoolFull {
        capacity: usize,
    },
}

impl fmt::Display for Galaxy3dError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Galaxy3dError::InvalidCapacity(capacity) => {
                write!(f, "Invalid pool capacity: {} (must be at least 1 and index into u32)", capacity)
            }
            Galaxy3dError::IndexOutOfRange { index, capacity } => {
                write!(f, "Index out of range: {} (capacity {})", index, capacity)
            }
            Galaxy3dError::PoolFull { capacity } => {
                write!(f, "Pool full: release into a full ring (capacity {})", capacity)
            }
        }
    }
}

impl std::error::Error for Galaxy3dError {}

/// Log an error at ERROR severity, then return it from the current function
///
/// The error expression is evaluated once. The enclosing function must return
/// a `Result` whose error type accepts `Galaxy3dError` via `From`.
///
/// # Example
///
/// ```ignore
/// if capacity == 0 {
///     engine_bail!("galaxy3d::IndexPool", Galaxy3dError::InvalidCapacity(capacity));
/// }
/// ```
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $error:expr) => {{
        let error = $error;
        $crate::engine_error!($source, "{}", error);
        return Err(error.into());
    }};
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
