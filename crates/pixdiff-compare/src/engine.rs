//! Grid comparison engine
//!
//! Walks every coordinate of two equal-size grids, classifies each pixel
//! pair through [`compare_pixel`], writes the selected output color into a
//! freshly allocated diff grid, and folds the per-pixel Delta E values
//! into min/max/sum accumulators in a single pass.
//!
//! Per-pixel results are independent; only the final reduction needs an
//! associative, commutative fold, so traversal order does not affect
//! min/max and affects the average only through floating-point summation
//! order. The engine stays single-threaded and synchronous.

use crate::error::{CompareError, CompareResult};
use crate::pixel::compare_pixel;
use pixdiff_core::{Grid, GridMut};

/// Result of a full-grid comparison
///
/// Created once per comparison run and immutable afterwards; the caller
/// owns it outright. The diff grid holds per-pixel classification baked
/// in as color: pure red for mismatches, the dimmed baseline color for
/// matches.
#[derive(Debug, Clone)]
pub struct DiffReport {
    /// The rendered diff image
    pub diff: Grid,
    /// Smallest per-pixel Delta E seen (0 for an empty grid)
    pub min_delta: f64,
    /// Largest per-pixel Delta E seen (0 for an empty grid)
    pub max_delta: f64,
    /// Mean per-pixel Delta E (0 for an empty grid, never NaN)
    pub avg_delta: f64,
    /// Number of mismatched pixels
    pub n_diff: u64,
    /// Fraction of pixels that mismatched (0.0 to 1.0)
    pub fract_diff: f64,
}

/// Compare two grids pixel-by-pixel under `tolerance`.
///
/// # Errors
///
/// Returns [`CompareError::DimensionMismatch`] before any pixel work if
/// the grids differ in width or height. Empty grids (zero width or
/// height) are not an error: the result is an empty diff grid with all
/// statistics zero.
///
/// # Examples
///
/// ```
/// use pixdiff_core::Grid;
/// use pixdiff_compare::compare_grids;
///
/// let a = Grid::new(16, 16);
/// let b = Grid::new(16, 16);
/// let report = compare_grids(&a, &b, 0.0).unwrap();
/// assert_eq!(report.max_delta, 0.0);
/// assert_eq!(report.n_diff, 0);
/// ```
pub fn compare_grids(a: &Grid, b: &Grid, tolerance: f32) -> CompareResult<DiffReport> {
    if !a.sizes_equal(b) {
        return Err(CompareError::DimensionMismatch {
            first: (a.width(), a.height()),
            second: (b.width(), b.height()),
        });
    }

    let width = a.width();
    let height = a.height();
    let total = a.pixel_count();

    let mut out = GridMut::new(width, height);
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0f64;
    let mut n_diff = 0u64;

    for y in 0..height {
        for x in 0..width {
            let p1 = a.get_pixel_unchecked(x, y);
            let p2 = b.get_pixel_unchecked(x, y);
            let result = compare_pixel(p1, p2, tolerance);
            out.set_pixel_unchecked(x, y, result.output);

            let delta = result.delta as f64;
            min = min.min(delta);
            max = max.max(delta);
            sum += delta;
            if !result.is_match {
                n_diff += 1;
            }
        }
    }

    // Degenerate empty grid: defined all-zero statistics, never NaN
    let (min_delta, max_delta, avg_delta, fract_diff) = if total == 0 {
        (0.0, 0.0, 0.0, 0.0)
    } else {
        (min, max, sum / total as f64, n_diff as f64 / total as f64)
    };

    Ok(DiffReport {
        diff: out.into(),
        min_delta,
        max_delta,
        avg_delta,
        n_diff,
        fract_diff,
    })
}
