//! Color space conversion
//!
//! Provides the RGB <-> HSV conversion used to recolor matched pixels in
//! the diff rendering. Hue is kept in degrees so the 60-degree sector
//! decomposition of the inverse mapping reads the way it is usually written.

/// HSV color representation
///
/// - `h`: Hue in degrees, [0.0, 360.0) (360.0 wraps to 0.0)
/// - `s`: Saturation in range [0.0, 1.0]
/// - `v`: Value in range [0.0, 1.0]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl Hsv {
    /// Create a new HSV color
    pub fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }
}

/// Convert RGB values to HSV.
///
/// Hue uses the standard hexagonal projection in degrees and degenerates
/// to 0 when max == min. Saturation is 0 when the max channel is 0, else
/// `1 - min/max`. Value is `max/255`.
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv {
    let rf = r as f32;
    let gf = g as f32;
    let bf = b as f32;

    let max = rf.max(gf).max(bf);
    let min = rf.min(gf).min(bf);
    let delta = max - min;

    let h = if delta == 0.0 {
        0.0
    } else if max == rf {
        60.0 * ((gf - bf) / delta).rem_euclid(6.0)
    } else if max == gf {
        60.0 * ((bf - rf) / delta + 2.0)
    } else {
        60.0 * ((rf - gf) / delta + 4.0)
    };

    let s = if max == 0.0 { 0.0 } else { 1.0 - min / max };
    let v = max / 255.0;

    Hsv { h, s, v }
}

/// Convert HSV values to RGB.
///
/// The inverse 60-degree sector mapping. Hue is normalized into [0, 360)
/// with `rem_euclid` before the sector index is taken, so negative or
/// wrapped hues never produce a bad sector (integer `%` on a negative
/// operand would). Channels are produced by truncation after scaling by
/// 255 and are in [0, 255] by construction for s, v in [0, 1].
pub fn hsv_to_rgb(hsv: Hsv) -> (u8, u8, u8) {
    let h = hsv.h.rem_euclid(360.0);
    let sector = (h / 60.0).floor();
    let hi = sector as u32 % 6;
    let f = h / 60.0 - sector;

    let v = hsv.v * 255.0;
    let p = v * (1.0 - hsv.s);
    let q = v * (1.0 - f * hsv.s);
    let t = v * (1.0 - (1.0 - f) * hsv.s);

    // `as u8` truncates and saturates, clamping out-of-range inputs
    let (r, g, b) = match hi {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    (r as u8, g as u8, b as u8)
}
