//! Sampler tuning parameters.

/// Default scan radius in display pixels.
pub const DEFAULT_RADIUS: u32 = 20;

/// Default maximum channel spread for a color to count as gray.
pub const DEFAULT_TOLERANCE: u8 = 50;

/// Default amount added to every channel before gray classification.
pub const DEFAULT_BRIGHTNESS: u8 = 60;

/// Configuration for neighborhood sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplerConfig {
    /// Radius of the sampled disk. The scanned box spans `radius / 2` on
    /// each side of the center.
    pub radius: u32,

    /// Gray threshold for `|R - G|` and `|R - B|`.
    pub tolerance: u8,

    /// Brightening applied before classification.
    pub brightness: u8,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            tolerance: DEFAULT_TOLERANCE,
            brightness: DEFAULT_BRIGHTNESS,
        }
    }
}

impl SamplerConfig {
    /// Set the scan radius.
    pub fn with_radius(mut self, radius: u32) -> Self {
        self.radius = radius;
        self
    }

    /// Set the gray tolerance.
    pub fn with_tolerance(mut self, tolerance: u8) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the brightening amount.
    pub fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = brightness;
        self
    }
}
