//! Point-in-time copy of classifier metrics.

use std::fmt;

use serde::Serialize;

/// Counter values captured by [`super::ClassifierMetrics::snapshot`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TelemetrySnapshot {
    pub frames_decoded: u64,
    pub frames_dropped: u64,
    pub classifications: u64,
    /// Classifications that produced no name.
    pub misses: u64,
    pub pixels_sampled: u64,
    /// Scan points that mapped outside the frame.
    pub pixels_outside: u64,
}

impl TelemetrySnapshot {
    /// Share of classifications that produced a name, in `[0, 1]`.
    pub fn hit_rate(&self) -> f64 {
        if self.classifications == 0 {
            return 0.0;
        }
        (self.classifications - self.misses) as f64 / self.classifications as f64
    }
}

impl fmt::Display for TelemetrySnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "frames: {} decoded, {} dropped | classifications: {} ({:.0}% named) | pixels: {} sampled, {} outside",
            self.frames_decoded,
            self.frames_dropped,
            self.classifications,
            self.hit_rate() * 100.0,
            self.pixels_sampled,
            self.pixels_outside
        )
    }
}
