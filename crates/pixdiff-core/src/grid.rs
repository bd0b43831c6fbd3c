//! Grid - the pixel container
//!
//! A `Grid` is a fixed-size 2-D array of 32-bit packed RGBA pixels stored
//! row-major. It is the unit of work for the comparison engine: two decoded
//! grids go in, one freshly allocated diff grid comes out.
//!
//! # Pixel layout
//!
//! Each pixel is a 32-bit word `0xRRGGBBAA` (red in MSB, alpha in LSB).
//! Channel helpers live in [`crate::color`].
//!
//! # Ownership model
//!
//! `Grid` uses `Arc` for efficient cloning (shared ownership). To modify
//! pixel data, convert to [`GridMut`] via [`Grid::try_into_mut`] or
//! [`Grid::to_mut`], then convert back with `Into<Grid>`. This keeps a
//! finished grid immutable without copying it on every handoff.

use crate::color;
use crate::error::{Error, Result};
use std::sync::Arc;

/// Internal grid data
#[derive(Debug)]
struct GridData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Row-major packed RGBA pixels
    data: Vec<u32>,
}

/// Immutable pixel grid with shared ownership.
///
/// Zero width or height is permitted and yields an empty grid; degenerate
/// inputs are defined behavior for the comparison engine, not an error.
///
/// # Examples
///
/// ```
/// use pixdiff_core::Grid;
///
/// let grid = Grid::new(640, 480);
/// assert_eq!(grid.width(), 640);
/// assert_eq!(grid.pixel_count(), 640 * 480);
/// ```
#[derive(Debug, Clone)]
pub struct Grid {
    inner: Arc<GridData>,
}

impl Grid {
    /// Create a new grid with all pixels zeroed.
    pub fn new(width: u32, height: u32) -> Self {
        let data = vec![0u32; width as usize * height as usize];
        Grid {
            inner: Arc::new(GridData {
                width,
                height,
                data,
            }),
        }
    }

    /// Create a grid from a raw row-major pixel buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataSize`] if `data.len() != width * height`.
    pub fn from_vec(width: u32, height: u32, data: Vec<u32>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(Error::DataSize {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Grid {
            inner: Arc::new(GridData {
                width,
                height,
                data,
            }),
        })
    }

    /// Get the grid width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the grid height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Total number of pixels (`width * height`).
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.inner.data.len()
    }

    /// Check whether the grid has no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.data.is_empty()
    }

    /// Get raw access to the pixel data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get one row of pixels.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u32] {
        let start = y as usize * self.inner.width as usize;
        &self.inner.data[start..start + self.inner.width as usize]
    }

    /// Get a pixel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.inner.width || y >= self.inner.height {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.inner.data[y as usize * self.inner.width as usize + x as usize]
    }

    /// Get RGB values at (x, y), ignoring alpha.
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        self.get_pixel(x, y).map(color::extract_rgb)
    }

    /// Check if two grids have the same width and height.
    pub fn sizes_equal(&self, other: &Grid) -> bool {
        self.inner.width == other.inner.width && self.inner.height == other.inner.height
    }

    /// Get the number of strong references to this grid.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Try to get mutable access to the pixel data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<GridMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(GridMut { inner: data }),
            Err(arc) => Err(Grid { inner: arc }),
        }
    }

    /// Create a mutable copy of this grid.
    ///
    /// Always allocates an independent copy that can be modified.
    pub fn to_mut(&self) -> GridMut {
        GridMut {
            inner: GridData {
                width: self.inner.width,
                height: self.inner.height,
                data: self.inner.data.clone(),
            },
        }
    }
}

/// Mutable pixel grid with exclusive ownership.
///
/// Convert back to an immutable [`Grid`] using `Into<Grid>`. The split
/// enforces at compile time that a grid handed to a caller can no longer
/// be written through an aliased handle.
#[derive(Debug)]
pub struct GridMut {
    inner: GridData,
}

impl GridMut {
    /// Create a new mutable grid with all pixels zeroed.
    pub fn new(width: u32, height: u32) -> Self {
        let data = vec![0u32; width as usize * height as usize];
        GridMut {
            inner: GridData {
                width,
                height,
                data,
            },
        }
    }

    /// Get the grid width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the grid height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get raw access to the pixel data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get mutable access to the pixel data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.inner.data
    }

    /// Get mutable access to one row of pixels.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [u32] {
        let start = y as usize * self.inner.width as usize;
        &mut self.inner.data[start..start + self.inner.width as usize]
    }

    /// Get a pixel value at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.inner.width || y >= self.inner.height {
            return None;
        }
        Some(self.inner.data[y as usize * self.inner.width as usize + x as usize])
    }

    /// Set a pixel value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u32) -> Result<()> {
        if x >= self.inner.width || y >= self.inner.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.inner.width,
                height: self.inner.height,
            });
        }
        self.set_pixel_unchecked(x, y, val);
        Ok(())
    }

    /// Set a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u32) {
        self.inner.data[y as usize * self.inner.width as usize + x as usize] = val;
    }

    /// Set an RGB pixel at (x, y) with alpha 255.
    pub fn set_rgb(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) -> Result<()> {
        self.set_pixel(x, y, color::compose_rgb(r, g, b))
    }

    /// Fill the whole grid with one pixel value.
    pub fn fill(&mut self, val: u32) {
        self.inner.data.fill(val);
    }
}

impl From<GridMut> for Grid {
    fn from(grid_mut: GridMut) -> Self {
        Grid {
            inner: Arc::new(grid_mut.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = Grid::new(100, 200);
        assert_eq!(grid.width(), 100);
        assert_eq!(grid.height(), 200);
        assert_eq!(grid.pixel_count(), 20000);
        assert!(!grid.is_empty());
        assert!(grid.data().iter().all(|&p| p == 0));
    }

    #[test]
    fn test_empty_grid_allowed() {
        // Degenerate sizes are valid inputs, not errors
        let grid = Grid::new(0, 100);
        assert!(grid.is_empty());
        assert_eq!(grid.pixel_count(), 0);
        assert_eq!(grid.get_pixel(0, 0), None);

        let grid = Grid::new(100, 0);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_from_vec() {
        let grid = Grid::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(grid.get_pixel(0, 0), Some(1));
        assert_eq!(grid.get_pixel(1, 1), Some(4));

        let err = Grid::from_vec(2, 2, vec![1, 2, 3]).unwrap_err();
        assert!(matches!(err, Error::DataSize { expected: 4, .. }));
    }

    #[test]
    fn test_grid_clone_shares_data() {
        let grid1 = Grid::new(10, 10);
        let grid2 = grid1.clone();
        assert_eq!(grid1.ref_count(), 2);
        assert_eq!(grid1.data().as_ptr(), grid2.data().as_ptr());
    }

    #[test]
    fn test_get_set_pixel() {
        let mut gm = GridMut::new(10, 10);
        gm.set_pixel(5, 5, 0xDEADBEEF).unwrap();
        assert_eq!(gm.get_pixel(5, 5), Some(0xDEADBEEF));

        assert!(matches!(
            gm.set_pixel(10, 0, 0),
            Err(Error::OutOfBounds { x: 10, .. })
        ));

        let grid: Grid = gm.into();
        assert_eq!(grid.get_pixel(5, 5), Some(0xDEADBEEF));
        assert_eq!(grid.get_pixel(10, 10), None);
    }

    #[test]
    fn test_set_get_rgb() {
        let mut gm = GridMut::new(4, 4);
        gm.set_rgb(1, 2, 10, 20, 30).unwrap();
        let grid: Grid = gm.into();
        assert_eq!(grid.get_rgb(1, 2), Some((10, 20, 30)));
    }

    #[test]
    fn test_row_access() {
        let mut gm = GridMut::new(3, 2);
        gm.row_mut(1).copy_from_slice(&[7, 8, 9]);
        let grid: Grid = gm.into();
        assert_eq!(grid.row(0), &[0, 0, 0]);
        assert_eq!(grid.row(1), &[7, 8, 9]);
    }

    #[test]
    fn test_try_into_mut() {
        let grid = Grid::new(10, 10);
        let clone = grid.clone();
        // Two owners: conversion must fail and hand the grid back
        let grid = grid.try_into_mut().unwrap_err();
        drop(clone);
        assert!(grid.try_into_mut().is_ok());
    }

    #[test]
    fn test_to_mut_copies() {
        let grid = Grid::new(10, 10);
        let mut gm = grid.to_mut();
        gm.set_pixel_unchecked(0, 0, 42);
        assert_eq!(grid.get_pixel(0, 0), Some(0));
    }

    #[test]
    fn test_sizes_equal() {
        let a = Grid::new(100, 200);
        let b = Grid::new(100, 200);
        let c = Grid::new(50, 200);
        assert!(a.sizes_equal(&b));
        assert!(!a.sizes_equal(&c));
    }

    #[test]
    fn test_fill() {
        let mut gm = GridMut::new(4, 4);
        gm.fill(0xFF0000FF);
        assert!(gm.data().iter().all(|&p| p == 0xFF0000FF));
    }
}
