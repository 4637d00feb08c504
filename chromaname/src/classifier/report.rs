//! Detailed result of classifying one touch point.

use std::fmt;

use serde::Serialize;

use crate::color::Rgb;
use crate::sampler::ScanRegion;

/// Everything the classifier learned about a touch point.
///
/// `name` is the answer [`super::ColorClassifier::classify_point`] returns;
/// the remaining fields are diagnostics and overlay data for a host UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PointReport {
    pub x: u32,
    pub y: u32,

    /// Orientation in degrees, `None` when unset.
    pub rotation: Option<u32>,

    /// Sequence number of the frame that was inspected.
    pub frame: u64,

    /// The single pixel under the touch point.
    pub touched: Option<Rgb>,
    pub touched_name: Option<String>,

    /// Dominant color of the neighborhood.
    pub dominant: Option<Rgb>,
    pub name: Option<String>,
    /// Distance from `dominant` to the named palette color.
    pub distance: Option<u32>,

    pub region: ScanRegion,
    pub sampled: usize,
}

fn or_dash<T: fmt::Display>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map_or_else(|| "-".to_string(), ToString::to_string)
}

impl fmt::Display for PointReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Point:        ({}, {})", self.x, self.y)?;
        writeln!(
            f,
            "Rotation:     {}",
            self.rotation
                .map_or_else(|| "unset".to_string(), |d| format!("{}°", d))
        )?;
        writeln!(f, "Frame:        #{}", self.frame)?;
        writeln!(
            f,
            "Touched:      {} ({})",
            or_dash(&self.touched),
            or_dash(&self.touched_name)
        )?;
        writeln!(
            f,
            "Dominant:     {} ({}, distance {})",
            or_dash(&self.dominant),
            or_dash(&self.name),
            or_dash(&self.distance)
        )?;
        write!(
            f,
            "Scan region:  x [{}, {}) y [{}, {}), radius {}, {} pixels",
            self.region.min_x,
            self.region.max_x,
            self.region.min_y,
            self.region.max_y,
            self.region.radius,
            self.sampled
        )
    }
}
