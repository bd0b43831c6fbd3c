//! pixdiff Color - Color mathematics for image comparison
//!
//! This crate provides the numeric color work behind the diff rendering
//! and the match classification:
//!
//! - **Color space conversion** ([`colorspace`]): RGB <-> HSV, used to
//!   desaturate and darken matched pixels in the output image
//! - **Perceptual distance** ([`distance`]): RGB -> XYZ -> L\*a\*b\* and
//!   the CIE76 Delta E metric the tolerance is measured against
//!
//! Every function here is pure and total over its input domain; the crate
//! defines no error type.

pub mod colorspace;
pub mod distance;

pub use colorspace::{Hsv, hsv_to_rgb, rgb_to_hsv};
pub use distance::{Lab, Xyz, color_distance, delta_e, rgb_to_lab, rgb_to_xyz, xyz_to_lab};
