//! Decoded RGB pixel buffer.

use image::{Rgba, RgbaImage};

use crate::color::Rgb;
use crate::frame::FrameError;

/// Packed `0xAARRGGBB` pixels of one decoded frame, row-major.
///
/// The length always equals `width * height`; the constructor enforces it so
/// index math elsewhere can rely on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl RgbBuffer {
    /// Wrap already-packed pixels.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::DimensionMismatch`] when `pixels.len()` is not
    /// `width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<u32>) -> Result<Self, FrameError> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(FrameError::DimensionMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build a buffer where every pixel has the same color.
    pub fn filled(width: u32, height: u32, color: Rgb) -> Self {
        Self {
            width,
            height,
            pixels: vec![color.to_argb(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Raw packed pixels.
    pub fn as_slice(&self) -> &[u32] {
        &self.pixels
    }

    /// Packed pixel at a flat index.
    #[inline]
    pub fn argb(&self, index: usize) -> Option<u32> {
        self.pixels.get(index).copied()
    }

    /// Color at a flat index, or `None` when the index is out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.argb(index).map(Rgb::from_argb)
    }

    /// Convert to an 8-bit RGBA image for export or inspection.
    pub fn to_rgba_image(&self) -> RgbaImage {
        let width = self.width as usize;
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            let argb = self.pixels[y as usize * width + x as usize];
            Rgba([
                (argb >> 16) as u8,
                (argb >> 8) as u8,
                argb as u8,
                (argb >> 24) as u8,
            ])
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pixels_checks_length() {
        let result = RgbBuffer::from_pixels(2, 2, vec![0; 3]);
        assert_eq!(
            result.unwrap_err(),
            FrameError::DimensionMismatch {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn test_get_out_of_range_is_none() {
        let buffer = RgbBuffer::filled(2, 2, Rgb::new(1, 2, 3));
        assert_eq!(buffer.get(3), Some(Rgb::new(1, 2, 3)));
        assert_eq!(buffer.get(4), None);
    }

    #[test]
    fn test_to_rgba_image_layout() {
        let pixels = vec![0xff10_2030, 0xff40_5060, 0xff70_8090, 0x80a0_b0c0];
        let buffer = RgbBuffer::from_pixels(2, 2, pixels).unwrap();
        let image = buffer.to_rgba_image();

        assert_eq!(image.dimensions(), (2, 2));
        assert_eq!(image.get_pixel(1, 0), &Rgba([0x40, 0x50, 0x60, 0xff]));
        assert_eq!(image.get_pixel(0, 1), &Rgba([0x70, 0x80, 0x90, 0xff]));
        assert_eq!(image.get_pixel(1, 1), &Rgba([0xa0, 0xb0, 0xc0, 0x80]));
    }
}
