//! pixdiff Compare - The comparison engine
//!
//! This crate implements the core of the visual regression check:
//!
//! - **Pixel comparator** ([`pixel`]): match/mismatch classification of a
//!   single pixel pair under a Delta E tolerance, and the output-color
//!   policy (red highlight / dimmed baseline rendering)
//! - **Engine** ([`engine`]): the single-pass walk over two equal-size
//!   grids producing a [`DiffReport`]
//!
//! The engine's one entry point is [`compare_grids`]. Image decoding,
//! encoding and reporting live in `pixdiff-io` and the CLI; this crate
//! only ever sees decoded grids.

pub mod engine;
pub mod error;
pub mod pixel;

pub use engine::{DiffReport, compare_grids};
pub use error::{CompareError, CompareResult};
pub use pixel::{MISMATCH_COLOR, PixelDiff, compare_pixel, dim_color};
