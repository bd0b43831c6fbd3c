//! PNG image format support
//!
//! Decodes 8-bit grayscale, gray+alpha, RGB and RGBA PNGs into a [`Grid`]
//! (everything is normalized to packed RGBA words) and encodes a grid
//! back out as 8-bit RGB. Exotic inputs (16-bit, indexed, sub-byte gray)
//! are rejected rather than approximated; comparison semantics are
//! defined over straight 8-bit RGB only.

use crate::{IoError, IoResult};
use pixdiff_core::{Grid, GridMut, color};
use png::{BitDepth, ColorType, Decoder, Encoder};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image into a grid.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Grid> {
    let decoder = Decoder::new(reader);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    let color_type = info.color_type;
    let bit_depth = info.bit_depth;

    if bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG bit depth: {:?}",
            bit_depth
        )));
    }
    let samples = match color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNG color type: {:?}",
                other
            )));
        }
    };

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];

    let mut gm = GridMut::new(width, height);
    for y in 0..height {
        let row_start = y as usize * bytes_per_row;
        for x in 0..width {
            let idx = row_start + x as usize * samples;
            let pixel = match samples {
                1 => {
                    let g = data[idx];
                    color::compose_rgb(g, g, g)
                }
                2 => {
                    let g = data[idx];
                    color::compose_rgba(g, g, g, data[idx + 1])
                }
                3 => color::compose_rgb(data[idx], data[idx + 1], data[idx + 2]),
                _ => color::compose_rgba(data[idx], data[idx + 1], data[idx + 2], data[idx + 3]),
            };
            gm.set_pixel_unchecked(x, y, pixel);
        }
    }

    Ok(gm.into())
}

/// Write a grid as an 8-bit RGB PNG.
///
/// Alpha is dropped on output; the diff image is always opaque.
pub fn write_png<W: Write>(grid: &Grid, writer: W) -> IoResult<()> {
    let width = grid.width();
    let height = grid.height();

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    let mut data = vec![0u8; width as usize * height as usize * 3];
    for y in 0..height {
        let row = grid.row(y);
        let out_start = y as usize * width as usize * 3;
        for (x, &pixel) in row.iter().enumerate() {
            let (r, g, b) = color::extract_rgb(pixel);
            let idx = out_start + x * 3;
            data[idx] = r;
            data[idx + 1] = g;
            data[idx + 2] = b;
        }
    }

    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn encode(grid: &Grid) -> Vec<u8> {
        let mut buf = Vec::new();
        write_png(grid, &mut buf).unwrap();
        buf
    }

    #[test]
    fn test_rgb_roundtrip() {
        let mut gm = GridMut::new(3, 2);
        gm.set_rgb(0, 0, 255, 0, 0).unwrap();
        gm.set_rgb(1, 0, 0, 255, 0).unwrap();
        gm.set_rgb(2, 1, 12, 34, 56).unwrap();
        let grid: Grid = gm.into();

        let bytes = encode(&grid);
        let decoded = read_png(Cursor::new(bytes)).unwrap();

        assert!(grid.sizes_equal(&decoded));
        assert_eq!(decoded.get_rgb(0, 0), Some((255, 0, 0)));
        assert_eq!(decoded.get_rgb(1, 0), Some((0, 255, 0)));
        assert_eq!(decoded.get_rgb(2, 1), Some((12, 34, 56)));
    }

    #[test]
    fn test_write_drops_alpha() {
        let mut gm = GridMut::new(1, 1);
        gm.set_pixel_unchecked(0, 0, color::compose_rgba(10, 20, 30, 0));
        let grid: Grid = gm.into();

        let decoded = read_png(Cursor::new(encode(&grid))).unwrap();
        assert_eq!(decoded.get_rgb(0, 0), Some((10, 20, 30)));
        assert_eq!(color::alpha(decoded.get_pixel_unchecked(0, 0)), 255);
    }

    #[test]
    fn test_garbage_input_rejected() {
        let err = read_png(Cursor::new(b"not a png".to_vec())).unwrap_err();
        assert!(matches!(err, IoError::DecodeError(_)));
    }
}
