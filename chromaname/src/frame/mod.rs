//! Camera frame decoding.
//!
//! Camera previews deliver NV21 frames: a full-resolution luma plane followed
//! by interleaved V/U chroma pairs at half resolution in both axes. This
//! module converts them into an [`RgbBuffer`] of packed pixels.
//!
//! ```text
//! ┌──────────────────────────┐
//! │ Y plane  (width × height)│
//! ├──────────────────────────┤
//! │ VU pairs (width × h/2)   │  one pair per 2×2 luma block
//! └──────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use chromaname::frame::{decode, FrameError};
//!
//! let frame = [126, 126, 126, 126, 128, 128];
//! let buffer = decode(&frame, 2, 2)?;
//! assert_eq!(buffer.len(), 4);
//!
//! // Undersized input is rejected rather than read out of bounds
//! assert!(matches!(decode(&frame[..5], 2, 2), Err(FrameError::DimensionMismatch { .. })));
//! # Ok::<(), FrameError>(())
//! ```

mod buffer;
mod decoder;
mod error;

pub use buffer::RgbBuffer;
pub use decoder::{decode, expected_len};
pub use error::FrameError;

/// One captured NV21 frame.
///
/// Construction validates the byte count, so [`Frame::decode`] can only fail
/// if the invariants are broken elsewhere.
#[derive(Debug, Clone)]
pub struct Frame {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Frame {
    /// Wrap raw NV21 bytes.
    ///
    /// # Errors
    ///
    /// Same preconditions as [`decode`].
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Result<Self, FrameError> {
        let expected = expected_len(width, height)?;
        if data.len() != expected {
            return Err(FrameError::DimensionMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw NV21 bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Convert to packed RGB.
    pub fn decode(&self) -> Result<RgbBuffer, FrameError> {
        decode(&self.data, self.width, self.height)
    }
}
