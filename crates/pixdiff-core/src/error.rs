//! Error types for pixdiff-core
//!
//! Provides a unified error type for grid construction and pixel access.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// pixdiff core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Pixel coordinates outside the grid
    #[error("pixel ({x}, {y}) out of bounds for {width}x{height} grid")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Raw pixel buffer does not match the stated dimensions
    #[error("data length {actual} does not match {width}x{height} grid ({expected} pixels)")]
    DataSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// Result type alias for core grid operations
pub type Result<T> = std::result::Result<T, Error>;
