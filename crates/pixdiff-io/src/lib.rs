//! pixdiff I/O - Image loading and saving
//!
//! Decodes image files into [`Grid`]s and encodes grids back to files.
//! PNG is the supported interchange format; paths with any other
//! extension are refused with [`IoError::UnsupportedFormat`] rather than
//! guessed at.

pub mod error;
pub mod png;

pub use error::{IoError, IoResult};
// `crate::` keeps the module path from colliding with the `png` crate name
pub use crate::png::{read_png, write_png};

use pixdiff_core::Grid;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Check whether a path carries a PNG extension (case-insensitive).
fn is_png_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("png"))
}

/// Read an image file into a grid.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] for non-PNG paths, and decode
/// or I/O errors from the underlying file and format handling.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Grid> {
    let path = path.as_ref();
    if !is_png_path(path) {
        return Err(IoError::UnsupportedFormat(path.display().to_string()));
    }
    let file = File::open(path)?;
    read_png(BufReader::new(file))
}

/// Write a grid to an image file.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] for non-PNG paths, and encode
/// or I/O errors from the underlying file and format handling.
pub fn write_image<P: AsRef<Path>>(grid: &Grid, path: P) -> IoResult<()> {
    let path = path.as_ref();
    if !is_png_path(path) {
        return Err(IoError::UnsupportedFormat(path.display().to_string()));
    }
    let file = File::create(path)?;
    write_png(grid, BufWriter::new(file))
}
