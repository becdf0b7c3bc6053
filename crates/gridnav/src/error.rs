use std::fmt;

/// Errors reported by [`GridNavigator`](crate::GridNavigator).
///
/// "No path" is not an error; queries report it as `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavError {
    /// The grid was given a negative width or height.
    NegativeDimension { width: i32, height: i32 },
    /// A path index past the end of the last reconstructed path.
    IndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavError::NegativeDimension { width, height } => {
                write!(f, "grid dimensions must be non-negative, got {}x{}", width, height)
            }
            NavError::IndexOutOfRange { index, len } => {
                write!(f, "path index {} out of range (path length {})", index, len)
            }
        }
    }
}

impl std::error::Error for NavError {}
