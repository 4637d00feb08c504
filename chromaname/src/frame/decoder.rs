//! NV21 to packed RGB conversion.
//!
//! Uses the fixed-point YUV→RGB transform common to Android camera preview
//! code: coefficients scaled by 1024, intermediates clamped to 18 bits, and
//! the 8-bit channels taken from the high bits. Output must stay bit-exact,
//! so the constants and shifts below are not to be "simplified".

use rayon::prelude::*;
use tracing::trace;

use crate::frame::{FrameError, RgbBuffer};

/// Largest intermediate channel value (18 bits).
const CHANNEL_MAX: i32 = 262_143;

/// Validate dimensions and return the NV21 byte length they imply.
pub fn expected_len(width: u32, height: u32) -> Result<usize, FrameError> {
    if width == 0 || height == 0 {
        return Err(FrameError::InvalidDimensions {
            width,
            height,
            reason: "dimensions must be non-zero".to_string(),
        });
    }
    if width % 2 != 0 || height % 2 != 0 {
        return Err(FrameError::InvalidDimensions {
            width,
            height,
            reason: "dimensions must be even for 2×2 chroma subsampling".to_string(),
        });
    }

    let frame_size = (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| FrameError::InvalidDimensions {
            width,
            height,
            reason: "frame too large".to_string(),
        })?;
    Ok(frame_size + frame_size / 2)
}

/// Decode an NV21 frame into packed `0xAARRGGBB` pixels.
///
/// The first `width * height` bytes are luma; they are followed by one
/// interleaved V/U pair per 2×2 block.
///
/// # Errors
///
/// - [`FrameError::InvalidDimensions`] for zero or odd dimensions
/// - [`FrameError::DimensionMismatch`] when `bytes.len()` is not
///   `width * height * 3 / 2`
pub fn decode(bytes: &[u8], width: u32, height: u32) -> Result<RgbBuffer, FrameError> {
    let expected = expected_len(width, height)?;
    if bytes.len() != expected {
        return Err(FrameError::DimensionMismatch {
            expected,
            actual: bytes.len(),
        });
    }

    let row_len = width as usize;
    let frame_size = row_len * height as usize;
    let (luma, chroma) = bytes.split_at(frame_size);

    let mut pixels = vec![0u32; frame_size];
    pixels
        .par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(row, out)| {
            let luma_row = &luma[row * row_len..(row + 1) * row_len];
            let chroma_start = (row >> 1) * row_len;
            let chroma_row = &chroma[chroma_start..chroma_start + row_len];
            decode_row(out, luma_row, chroma_row);
        });

    trace!(width, height, "Decoded NV21 frame");
    RgbBuffer::from_pixels(width, height, pixels)
}

/// Decode one row. `chroma` holds the V/U pairs shared with the neighboring row.
fn decode_row(out: &mut [u32], luma: &[u8], chroma: &[u8]) {
    let mut u = 0;
    let mut v = 0;
    for (column, (pixel, &y)) in out.iter_mut().zip(luma).enumerate() {
        // Odd columns reuse the pair read for the even column before them
        if column & 1 == 0 {
            v = chroma[column] as i32 - 128;
            u = chroma[column + 1] as i32 - 128;
        }
        *pixel = yuv_to_argb(y, u, v);
    }
}

/// Convert one luma sample and its (bias-corrected) chroma pair.
#[inline]
pub(crate) fn yuv_to_argb(luma: u8, u: i32, v: i32) -> u32 {
    let y1192 = 1192 * (luma as i32 - 16).max(0);
    let r = (y1192 + 1634 * v).clamp(0, CHANNEL_MAX);
    let g = (y1192 - 833 * v - 400 * u).clamp(0, CHANNEL_MAX);
    let b = (y1192 + 2066 * u).clamp(0, CHANNEL_MAX);

    0xff00_0000
        | ((r << 6) as u32 & 0xff_0000)
        | ((g >> 2) as u32 & 0xff00)
        | ((b >> 10) as u32 & 0xff)
}
