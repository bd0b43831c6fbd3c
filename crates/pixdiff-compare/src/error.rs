//! Error types for pixdiff-compare

use thiserror::Error;

/// Errors that can occur during grid comparison
#[derive(Debug, Error)]
pub enum CompareError {
    /// Input grids differ in width or height
    ///
    /// Comparing mismatched dimensions is a precondition violation; the
    /// engine refuses to run rather than truncating or padding.
    #[error("dimension mismatch: {}x{} vs {}x{}", .first.0, .first.1, .second.0, .second.1)]
    DimensionMismatch {
        first: (u32, u32),
        second: (u32, u32),
    },
}

/// Result type for comparison operations
pub type CompareResult<T> = Result<T, CompareError>;
