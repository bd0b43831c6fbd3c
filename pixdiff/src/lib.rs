//! pixdiff - Pixel-by-pixel image comparison for visual regression testing
//!
//! Given a baseline and a candidate image of identical dimensions, pixdiff
//! produces a diff image in which changed pixels are highlighted pure red
//! and unchanged pixels are rendered as a dim, desaturated version of the
//! baseline, along with min/max/average perceptual-difference (Delta E)
//! statistics over all pixels.
//!
//! # Example
//!
//! ```
//! use pixdiff::{Grid, compare_grids};
//!
//! let baseline = Grid::new(64, 64);
//! let candidate = Grid::new(64, 64);
//! let report = compare_grids(&baseline, &candidate, 0.0).unwrap();
//! assert_eq!(report.n_diff, 0);
//! assert_eq!(report.avg_delta, 0.0);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use pixdiff_core::*;

// Re-export the engine's entry point and result at the top level
pub use pixdiff_compare::{CompareError, CompareResult, DiffReport, compare_grids};

// Re-export domain crates as modules to avoid name conflicts
pub use pixdiff_color as color_math;
pub use pixdiff_compare as compare;
pub use pixdiff_io as io;
