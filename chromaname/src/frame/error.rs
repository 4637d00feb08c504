//! Error types for frame decoding.

use thiserror::Error;

/// Errors that can occur while decoding a camera frame.
///
/// A failed decode drops the frame; callers keep whatever buffer they
/// decoded previously.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameError {
    /// Frame dimensions cannot describe an NV21 image.
    #[error("Invalid dimensions {width}×{height}: {reason}")]
    InvalidDimensions {
        width: u32,
        height: u32,
        reason: String,
    },

    /// Byte count does not match `width * height * 3 / 2`.
    #[error("Frame size mismatch: expected {expected} bytes, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_error_display_invalid_dimensions() {
        let err = FrameError::InvalidDimensions {
            width: 3,
            height: 2,
            reason: "width must be even".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid dimensions 3×2: width must be even");
    }

    #[test]
    fn test_frame_error_display_dimension_mismatch() {
        let err = FrameError::DimensionMismatch {
            expected: 6,
            actual: 4,
        };
        assert_eq!(
            err.to_string(),
            "Frame size mismatch: expected 6 bytes, got 4"
        );
    }
}
