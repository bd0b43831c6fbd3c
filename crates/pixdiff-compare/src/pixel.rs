//! Per-pixel comparison policy
//!
//! Classifies one pixel pair as match or mismatch against a tolerance and
//! selects the output color for the diff image:
//!
//! - Mismatch: pure red, a fixed saturated highlight regardless of how
//!   large the delta actually is
//! - Match: a dimmed rendering of the first grid's pixel, so unchanged
//!   regions stay legible but never compete with the highlights
//!
//! This is total over all pixel pairs; there are no error states.

use pixdiff_color::{Hsv, color_distance, hsv_to_rgb, rgb_to_hsv};
use pixdiff_core::color;

/// Highlight color written for every mismatched pixel.
pub const MISMATCH_COLOR: u32 = color::compose_rgb(255, 0, 0);

/// Outcome of comparing a single pixel pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelDiff {
    /// Perceptual distance (Delta E) between the two pixels
    pub delta: f32,
    /// Whether the pair counts as a match under the given tolerance
    pub is_match: bool,
    /// Color to write into the diff grid at this coordinate
    pub output: u32,
}

/// Dim a pixel for the matched-pixel rendering.
///
/// Matched pixels are recolored as `hsv(h, s/10, 1 - v/10)`: saturation is
/// flattened toward gray and brightness is inverted and compressed toward
/// dark. The inversion (bright input becomes dark output) is kept exactly
/// as-is; downstream fixtures depend on the transform byte-for-byte.
pub fn dim_color(pixel: u32) -> u32 {
    let (r, g, b) = color::extract_rgb(pixel);
    let hsv = rgb_to_hsv(r, g, b);
    let (dr, dg, db) = hsv_to_rgb(Hsv::new(hsv.h, hsv.s / 10.0, 1.0 - hsv.v / 10.0));
    color::compose_rgb(dr, dg, db)
}

/// Compare one pixel pair under `tolerance`.
///
/// A pair matches when its Delta E is at or below the tolerance. Tolerance
/// 0 therefore means exact color equality; a negative tolerance is valid
/// and matches nothing, since Delta E is never negative.
pub fn compare_pixel(p1: u32, p2: u32, tolerance: f32) -> PixelDiff {
    let delta = color_distance(p1, p2);
    let is_match = delta <= tolerance;
    let output = if is_match {
        dim_color(p1)
    } else {
        MISMATCH_COLOR
    };
    PixelDiff {
        delta,
        is_match,
        output,
    }
}
