//! pixdiff-test - Shared helpers for the workspace's tests
//!
//! Synthetic grid constructors and scratch-file paths used by the
//! integration tests of the other crates. Nothing here is part of the
//! public tool surface.

use pixdiff_core::{Grid, GridMut, color};
use std::path::PathBuf;

/// Create a grid filled with a single RGB color.
pub fn make_uniform_grid(r: u8, g: u8, b: u8, w: u32, h: u32) -> Grid {
    let mut gm = GridMut::new(w, h);
    gm.fill(color::compose_rgb(r, g, b));
    gm.into()
}

/// Create a grid with a horizontal red ramp and vertical green ramp.
///
/// Every pixel differs from its neighbors, which makes off-by-one
/// coordinate bugs visible in comparisons.
pub fn make_gradient_grid(w: u32, h: u32) -> Grid {
    let mut gm = GridMut::new(w, h);
    for y in 0..h {
        for x in 0..w {
            let r = if w > 1 { (x * 255 / (w - 1)) as u8 } else { 0 };
            let g = if h > 1 { (y * 255 / (h - 1)) as u8 } else { 0 };
            gm.set_pixel_unchecked(x, y, color::compose_rgb(r, g, 128));
        }
    }
    gm.into()
}

/// Create a grid of reproducible pseudo-random colors.
pub fn make_noise_grid(w: u32, h: u32, seed: u32) -> Grid {
    let mut rng = SimpleRng::new(seed);
    let mut gm = GridMut::new(w, h);
    for y in 0..h {
        for x in 0..w {
            let word = rng.next();
            gm.set_pixel_unchecked(
                x,
                y,
                color::compose_rgb(
                    (word >> 16) as u8,
                    (word >> 8) as u8,
                    word as u8,
                ),
            );
        }
    }
    gm.into()
}

/// Get a scratch file path unique to the calling test.
///
/// Files land in the system temp directory, namespaced by process id so
/// parallel test runs do not collide.
pub fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("pixdiff-{}-{}", std::process::id(), name))
}

/// Simple linear congruential generator for reproducible randomness
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u32) -> Self {
        Self { state: seed as u64 }
    }

    fn next(&mut self) -> u64 {
        // LCG parameters from Numerical Recipes
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.state
    }
}
