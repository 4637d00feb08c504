use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors from parsing an orientation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrientationError {
    /// Rotation angle is not one of 0, 90, 180, 270.
    #[error("Invalid display rotation: {0}° (expected 0, 90, 180 or 270)")]
    InvalidRotation(u32),

    /// Unrecognized orientation name.
    #[error("Invalid orientation: '{0}'")]
    InvalidName(String),
}

/// Display rotation relative to the device's natural orientation.
///
/// The camera sensor is mounted rotated against the display, so each variant
/// selects a fixed coordinate remapping (see [`super::map_index`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Rotation0,
    Rotation90,
    Rotation180,
    Rotation270,
}

impl Orientation {
    /// All variants, in rotation order.
    pub const ALL: [Orientation; 4] = [
        Orientation::Rotation0,
        Orientation::Rotation90,
        Orientation::Rotation180,
        Orientation::Rotation270,
    ];

    /// Orientation for a display rotation in degrees.
    ///
    /// Returns an error for any angle other than 0, 90, 180 or 270.
    pub fn try_from_degrees(degrees: u32) -> Result<Self, OrientationError> {
        match degrees {
            0 => Ok(Orientation::Rotation0),
            90 => Ok(Orientation::Rotation90),
            180 => Ok(Orientation::Rotation180),
            270 => Ok(Orientation::Rotation270),
            other => Err(OrientationError::InvalidRotation(other)),
        }
    }

    /// Orientation for a display rotation reported by the host.
    ///
    /// Unknown angles fall back to [`Orientation::Rotation0`], the device's
    /// natural orientation.
    pub fn from_display_rotation(degrees: u32) -> Self {
        Self::try_from_degrees(degrees).unwrap_or(Orientation::Rotation0)
    }

    /// Display rotation in degrees.
    pub fn degrees(self) -> u32 {
        match self {
            Orientation::Rotation0 => 0,
            Orientation::Rotation90 => 90,
            Orientation::Rotation180 => 180,
            Orientation::Rotation270 => 270,
        }
    }

    /// Clockwise rotation the host must apply to the camera preview so it
    /// appears upright for this display rotation.
    pub fn camera_display_angle(self) -> u32 {
        match self {
            Orientation::Rotation0 => 90,
            Orientation::Rotation90 => 0,
            Orientation::Rotation180 => 270,
            Orientation::Rotation270 => 180,
        }
    }

    /// Whether display x runs along the frame's rows (portrait) rather than
    /// its columns.
    pub fn is_portrait(self) -> bool {
        matches!(self, Orientation::Rotation0 | Orientation::Rotation180)
    }

    /// Display-space bounds `(max_x, max_y)` (exclusive) for a frame.
    pub fn display_bounds(self, frame_width: u32, frame_height: u32) -> (u32, u32) {
        if self.is_portrait() {
            (frame_height, frame_width)
        } else {
            (frame_width, frame_height)
        }
    }

    /// Compact encoding for atomic storage.
    pub(crate) fn to_u8(self) -> u8 {
        match self {
            Orientation::Rotation0 => 0,
            Orientation::Rotation90 => 1,
            Orientation::Rotation180 => 2,
            Orientation::Rotation270 => 3,
        }
    }

    pub(crate) fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Orientation::Rotation0),
            1 => Some(Orientation::Rotation90),
            2 => Some(Orientation::Rotation180),
            3 => Some(Orientation::Rotation270),
            _ => None,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ROTATION_{}", self.degrees())
    }
}

impl FromStr for Orientation {
    type Err = OrientationError;

    /// Accepts `90`, `rotation90`, `rotation_90` (any case).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let digits = lower
            .strip_prefix("rotation")
            .map(|rest| rest.trim_start_matches('_'))
            .unwrap_or(lower.as_str());
        let degrees: u32 = digits
            .parse()
            .map_err(|_| OrientationError::InvalidName(s.to_string()))?;
        Self::try_from_degrees(degrees)
    }
}
