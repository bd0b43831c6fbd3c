//! Perceptual color distance
//!
//! Computes the CIE76 Delta E between two RGB colors: sRGB is expanded to
//! linear RGB, mapped to CIE XYZ (D65), then to CIE L\*a\*b\*, and the
//! distance is the Euclidean norm in Lab space.
//!
//! All functions are pure and total; the metric is symmetric, zero for
//! identical colors, and grows with perceptual difference.

use pixdiff_core::color;

/// CIE XYZ color representation (D65 illuminant)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Xyz {
    /// Create a new XYZ color
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// CIE L\*a\*b\* color representation
///
/// - `l`: Lightness in range [0.0, 100.0]
/// - `a`: Green-Red component, typically [-128, 127]
/// - `b`: Blue-Yellow component, typically [-128, 127]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    pub l: f32,
    pub a: f32,
    pub b: f32,
}

impl Lab {
    /// Create a new LAB color
    pub fn new(l: f32, a: f32, b: f32) -> Self {
        Self { l, a, b }
    }
}

// D65 reference white
const REF_X: f32 = 0.95047;
const REF_Y: f32 = 1.00000;
const REF_Z: f32 = 1.08883;

/// sRGB gamma expansion to linear light.
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Lab forward transfer function with the 6/29 linear toe.
fn lab_f(t: f32) -> f32 {
    const DELTA: f32 = 6.0 / 29.0;
    const DELTA_CUBED: f32 = DELTA * DELTA * DELTA;
    if t > DELTA_CUBED {
        t.cbrt()
    } else {
        t / (3.0 * DELTA * DELTA) + 4.0 / 29.0
    }
}

/// Convert RGB to CIE XYZ (D65 illuminant, sRGB color space)
pub fn rgb_to_xyz(r: u8, g: u8, b: u8) -> Xyz {
    let rl = srgb_to_linear(r as f32 / 255.0);
    let gl = srgb_to_linear(g as f32 / 255.0);
    let bl = srgb_to_linear(b as f32 / 255.0);

    Xyz {
        x: rl * 0.4124564 + gl * 0.3575761 + bl * 0.1804375,
        y: rl * 0.2126729 + gl * 0.7151522 + bl * 0.0721750,
        z: rl * 0.0193339 + gl * 0.1191920 + bl * 0.9503041,
    }
}

/// Convert CIE XYZ to CIE L\*a\*b\* (D65 reference white)
pub fn xyz_to_lab(xyz: Xyz) -> Lab {
    let fx = lab_f(xyz.x / REF_X);
    let fy = lab_f(xyz.y / REF_Y);
    let fz = lab_f(xyz.z / REF_Z);

    Lab {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

/// Convert RGB to CIE L\*a\*b\*
pub fn rgb_to_lab(r: u8, g: u8, b: u8) -> Lab {
    xyz_to_lab(rgb_to_xyz(r, g, b))
}

/// CIE76 Delta E: Euclidean distance in Lab space.
pub fn delta_e(a: Lab, b: Lab) -> f32 {
    let dl = a.l - b.l;
    let da = a.a - b.a;
    let db = a.b - b.b;
    (dl * dl + da * da + db * db).sqrt()
}

/// Perceptual distance between the RGB parts of two packed pixels.
///
/// Alpha is ignored. Identical colors short-circuit to exactly 0.0 so the
/// metric's identity contract does not depend on floating-point noise.
pub fn color_distance(p1: u32, p2: u32) -> f32 {
    if color::rgb_equal(p1, p2) {
        return 0.0;
    }
    let (r1, g1, b1) = color::extract_rgb(p1);
    let (r2, g2, b2) = color::extract_rgb(p2);
    delta_e(rgb_to_lab(r1, g1, b1), rgb_to_lab(r2, g2, b2))
}
