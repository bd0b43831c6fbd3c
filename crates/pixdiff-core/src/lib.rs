//! pixdiff Core - Basic data structures for image comparison
//!
//! This crate provides the fundamental data structures used throughout
//! the pixdiff visual regression tool:
//!
//! - [`Grid`] / [`GridMut`] - The pixel grid container (immutable / mutable)
//! - [`color`] - Channel helpers for 32-bit packed RGBA pixels
//! - [`Error`] / [`Result`] - Core error type

pub mod error;
pub mod grid;

pub use error::{Error, Result};
pub use grid::{Grid, GridMut};

/// Color channel indices and helper functions for 32-bit RGBA pixels.
///
/// # Pixel format
///
/// 32-bit pixels are stored as `0xRRGGBBAA` (red in MSB, alpha in LSB).
/// Comparison semantics ignore the alpha byte; it is carried through so
/// decoded RGBA images survive a load/compare/save round trip.
pub mod color {
    /// Shift amounts for extracting color channels
    pub const RED_SHIFT: u32 = 24;
    pub const GREEN_SHIFT: u32 = 16;
    pub const BLUE_SHIFT: u32 = 8;
    pub const ALPHA_SHIFT: u32 = 0;

    /// Extract red component from a 32-bit pixel.
    #[inline]
    pub fn red(pixel: u32) -> u8 {
        ((pixel >> RED_SHIFT) & 0xff) as u8
    }

    /// Extract green component from a 32-bit pixel.
    #[inline]
    pub fn green(pixel: u32) -> u8 {
        ((pixel >> GREEN_SHIFT) & 0xff) as u8
    }

    /// Extract blue component from a 32-bit pixel.
    #[inline]
    pub fn blue(pixel: u32) -> u8 {
        ((pixel >> BLUE_SHIFT) & 0xff) as u8
    }

    /// Extract alpha component from a 32-bit pixel.
    #[inline]
    pub fn alpha(pixel: u32) -> u8 {
        ((pixel >> ALPHA_SHIFT) & 0xff) as u8
    }

    /// Compose a 32-bit RGB pixel (alpha = 255).
    #[inline]
    pub const fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        ((r as u32) << RED_SHIFT)
            | ((g as u32) << GREEN_SHIFT)
            | ((b as u32) << BLUE_SHIFT)
            | (255 << ALPHA_SHIFT)
    }

    /// Compose a 32-bit RGBA pixel.
    #[inline]
    pub const fn compose_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
        ((r as u32) << RED_SHIFT)
            | ((g as u32) << GREEN_SHIFT)
            | ((b as u32) << BLUE_SHIFT)
            | ((a as u32) << ALPHA_SHIFT)
    }

    /// Extract RGB values from a 32-bit pixel.
    #[inline]
    pub fn extract_rgb(pixel: u32) -> (u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel))
    }

    /// Extract RGBA values from a 32-bit pixel.
    #[inline]
    pub fn extract_rgba(pixel: u32) -> (u8, u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel), alpha(pixel))
    }

    /// Check whether two pixels have identical RGB parts, ignoring alpha.
    #[inline]
    pub fn rgb_equal(a: u32, b: u32) -> bool {
        (a >> 8) == (b >> 8)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_compose_extract_rgb() {
            let pixel = compose_rgb(10, 20, 30);
            assert_eq!(pixel, 0x0A141EFF);
            assert_eq!(extract_rgb(pixel), (10, 20, 30));
            assert_eq!(alpha(pixel), 255);
        }

        #[test]
        fn test_compose_extract_rgba() {
            let pixel = compose_rgba(1, 2, 3, 4);
            assert_eq!(extract_rgba(pixel), (1, 2, 3, 4));
        }

        #[test]
        fn test_rgb_equal_ignores_alpha() {
            let a = compose_rgba(10, 20, 30, 0);
            let b = compose_rgba(10, 20, 30, 255);
            assert!(rgb_equal(a, b));
            assert!(!rgb_equal(a, compose_rgba(10, 20, 31, 0)));
        }
    }
}
