//! Neighborhood color aggregation.
//!
//! A single pixel is a noisy estimate of "the color under the finger", so the
//! sampler looks at a small disk around the touch point and reports the most
//! frequent color in it.
//!
//! Every pixel in the disk is brightened and then classified:
//!
//! - **gray** when `|R - G| <= tolerance` and `|R - B| <= tolerance`,
//!   counted under its *original* color;
//! - **chromatic** otherwise, counted under its *brightened* color.
//!
//! The most frequent chromatic color wins; if the disk is entirely gray, the
//! most frequent gray is reported instead.
//!
//! # Example
//!
//! ```
//! use chromaname::color::Rgb;
//! use chromaname::frame::RgbBuffer;
//! use chromaname::orientation::Orientation;
//! use chromaname::sampler::dominant_color;
//!
//! let buffer = RgbBuffer::filled(64, 48, Rgb::new(30, 120, 30));
//! let color = dominant_color(32, 24, Some(Orientation::Rotation90), &buffer);
//!
//! // Chromatic results are reported brightened
//! assert_eq!(color, Some(Rgb::new(90, 180, 90)));
//! ```

mod config;
mod sample;

pub use config::{SamplerConfig, DEFAULT_BRIGHTNESS, DEFAULT_RADIUS, DEFAULT_TOLERANCE};
pub use sample::{ColorSample, FrequencyTable};

use serde::Serialize;
use tracing::debug;

use crate::color::Rgb;
use crate::frame::RgbBuffer;
use crate::orientation::{map_index, Orientation};

/// Whether `color` has no perceivable dominant hue.
#[inline]
pub fn is_gray(color: Rgb, tolerance: u8) -> bool {
    color.r.abs_diff(color.g) <= tolerance && color.r.abs_diff(color.b) <= tolerance
}

/// Display-space area covered by one scan.
///
/// The box spans `[center - radius/2, center + radius/2)` on each axis,
/// clamped to the frame; points inside it are kept only when they also lie
/// within `radius` of the center. A presentation layer can use `center` and
/// `radius` to draw the sampling marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScanRegion {
    pub center_x: u32,
    pub center_y: u32,
    pub radius: u32,
    pub min_x: u32,
    pub max_x: u32,
    pub min_y: u32,
    pub max_y: u32,
}

impl ScanRegion {
    /// Bounding box for a scan around `(center_x, center_y)`.
    ///
    /// Upper bounds clamp against the display-space extent of the frame,
    /// which swaps width and height between portrait and landscape.
    pub fn new(
        center_x: u32,
        center_y: u32,
        radius: u32,
        orientation: Option<Orientation>,
        frame_width: u32,
        frame_height: u32,
    ) -> Self {
        let half = radius / 2;
        let (bound_x, bound_y) = orientation
            .unwrap_or(Orientation::Rotation90)
            .display_bounds(frame_width, frame_height);

        Self {
            center_x,
            center_y,
            radius,
            min_x: center_x.saturating_sub(half),
            max_x: center_x.saturating_add(half).min(bound_x),
            min_y: center_y.saturating_sub(half),
            max_y: center_y.saturating_add(half).min(bound_y),
        }
    }

    /// A region that contains no points.
    pub fn empty(center_x: u32, center_y: u32, radius: u32) -> Self {
        Self {
            center_x,
            center_y,
            radius,
            min_x: 0,
            max_x: 0,
            min_y: 0,
            max_y: 0,
        }
    }

    /// Whether `(x, y)` lies within the disk (squared-distance test).
    #[inline]
    pub fn in_disk(&self, x: u32, y: u32) -> bool {
        let dx = self.center_x as i64 - x as i64;
        let dy = self.center_y as i64 - y as i64;
        let r = self.radius as i64;
        dx * dx + dy * dy <= r * r
    }

    /// Points in the box that also fall inside the disk.
    pub fn points(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (self.min_x..self.max_x)
            .flat_map(move |x| (self.min_y..self.max_y).map(move |y| (x, y)))
            .filter(move |&(x, y)| self.in_disk(x, y))
    }
}

/// Scans neighborhoods of decoded frames.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sampler {
    config: SamplerConfig,
}

impl Sampler {
    pub fn new(config: SamplerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Classify every pixel around `(center_x, center_y)`.
    ///
    /// Points that map outside `buffer` are counted in
    /// [`ColorSample::misses`] and otherwise skipped.
    pub fn sample(
        &self,
        center_x: u32,
        center_y: u32,
        orientation: Option<Orientation>,
        buffer: &RgbBuffer,
    ) -> ColorSample {
        let region = ScanRegion::new(
            center_x,
            center_y,
            self.config.radius,
            orientation,
            buffer.width(),
            buffer.height(),
        );
        debug!(
            min_x = region.min_x,
            min_y = region.min_y,
            max_x = region.max_x,
            max_y = region.max_y,
            "Scan region"
        );

        let mut sample = ColorSample::new(region);
        for (x, y) in region.points() {
            let color = map_index(x, y, orientation, buffer.width(), buffer.height())
                .and_then(|index| buffer.get(index));
            let Some(color) = color else {
                sample.misses += 1;
                continue;
            };

            let brighter = color.brighten(self.config.brightness);
            if is_gray(brighter, self.config.tolerance) {
                sample.gray.record(color);
            } else {
                sample.chromatic.record(brighter);
            }
        }
        sample
    }

    /// The representative color around `(center_x, center_y)`, or `None` if
    /// no pixel could be read.
    pub fn dominant_color(
        &self,
        center_x: u32,
        center_y: u32,
        orientation: Option<Orientation>,
        buffer: &RgbBuffer,
    ) -> Option<Rgb> {
        self.sample(center_x, center_y, orientation, buffer).dominant()
    }
}

/// [`Sampler::sample`] with the default configuration.
pub fn sample_neighborhood(
    center_x: u32,
    center_y: u32,
    orientation: Option<Orientation>,
    buffer: &RgbBuffer,
) -> ColorSample {
    Sampler::default().sample(center_x, center_y, orientation, buffer)
}

/// [`Sampler::dominant_color`] with the default configuration.
pub fn dominant_color(
    center_x: u32,
    center_y: u32,
    orientation: Option<Orientation>,
    buffer: &RgbBuffer,
) -> Option<Rgb> {
    Sampler::default().dominant_color(center_x, center_y, orientation, buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::decode;

    fn landscape() -> Option<Orientation> {
        Some(Orientation::Rotation90)
    }

    /// Landscape buffer with a vertical split: `left` for x < split, `right` after.
    fn split_buffer(width: u32, height: u32, split: u32, left: Rgb, right: Rgb) -> RgbBuffer {
        let pixels = (0..height)
            .flat_map(|_| (0..width).map(move |x| if x < split { left } else { right }))
            .map(Rgb::to_argb)
            .collect();
        RgbBuffer::from_pixels(width, height, pixels).unwrap()
    }

    #[test]
    fn test_is_gray_equal_channels() {
        for value in [0u8, 1, 127, 200, 255] {
            assert!(is_gray(Rgb::new(value, value, value), DEFAULT_TOLERANCE));
        }
    }

    #[test]
    fn test_is_gray_beyond_tolerance_is_chromatic() {
        assert!(!is_gray(Rgb::new(150, 50, 150), DEFAULT_TOLERANCE));
        assert!(!is_gray(Rgb::new(100, 200, 100), DEFAULT_TOLERANCE));
        assert!(!is_gray(Rgb::new(150, 150, 40), DEFAULT_TOLERANCE));
    }

    #[test]
    fn test_is_gray_at_tolerance_boundary() {
        assert!(is_gray(Rgb::new(150, 100, 200), 50));
        assert!(!is_gray(Rgb::new(150, 99, 150), 50));
    }

    #[test]
    fn test_scan_region_clamps_to_frame() {
        let region = ScanRegion::new(3, 2, 20, landscape(), 8, 6);
        assert_eq!((region.min_x, region.max_x), (0, 8));
        assert_eq!((region.min_y, region.max_y), (0, 6));

        let region = ScanRegion::new(50, 40, 20, landscape(), 100, 100);
        assert_eq!((region.min_x, region.max_x), (40, 60));
        assert_eq!((region.min_y, region.max_y), (30, 50));
    }

    #[test]
    fn test_scan_region_portrait_swaps_bounds() {
        // Portrait: x is clamped by frame height, y by frame width
        let region = ScanRegion::new(5, 5, 20, Some(Orientation::Rotation0), 12, 8);
        assert_eq!(region.max_x, 8);
        assert_eq!(region.max_y, 12);

        let region = ScanRegion::new(5, 5, 20, Some(Orientation::Rotation270), 12, 8);
        assert_eq!(region.max_x, 12);
        assert_eq!(region.max_y, 8);
    }

    #[test]
    fn test_scan_region_disk_filter() {
        let region = ScanRegion::new(10, 10, 4, landscape(), 100, 100);
        // Box is [8, 12) on both axes; every point is within radius 4
        assert_eq!(region.points().count(), 16);

        let region = ScanRegion {
            center_x: 0,
            center_y: 0,
            radius: 2,
            min_x: 0,
            max_x: 3,
            min_y: 0,
            max_y: 3,
        };
        // (2,1), (1,2) and (2,2) are farther than 2 from the origin
        assert_eq!(region.points().count(), 6);
    }

    #[test]
    fn test_center_outside_frame_samples_nothing() {
        let buffer = RgbBuffer::filled(4, 4, Rgb::new(255, 0, 0));
        let sample = Sampler::default().sample(100, 100, landscape(), &buffer);

        assert_eq!(sample.sampled(), 0);
        assert_eq!(sample.dominant(), None);
    }

    #[test]
    fn test_uniform_gray_frame_from_nv21() {
        // 2×2 frame decoding to (128, 128, 128) everywhere
        let buffer = decode(&[126, 126, 126, 126, 128, 128], 2, 2).unwrap();
        let sample = sample_neighborhood(1, 1, landscape(), &buffer);

        assert!(sample.chromatic.is_empty());
        assert_eq!(sample.gray.len(), 1);
        assert_eq!(sample.gray.count(Rgb::new(128, 128, 128)), 4);
        assert_eq!(sample.dominant(), Some(Rgb::new(128, 128, 128)));
    }

    #[test]
    fn test_gray_reported_unbrightened_chromatic_brightened() {
        let dark_gray = Rgb::new(20, 20, 20);
        let buffer = RgbBuffer::filled(40, 40, dark_gray);
        assert_eq!(dominant_color(20, 20, landscape(), &buffer), Some(dark_gray));

        let red = Rgb::new(200, 10, 10);
        let buffer = RgbBuffer::filled(40, 40, red);
        assert_eq!(
            dominant_color(20, 20, landscape(), &buffer),
            Some(Rgb::new(255, 70, 70))
        );
    }

    #[test]
    fn test_chromatic_minority_beats_gray_majority() {
        // Only the last 2 columns of the 20-wide box are chromatic
        let gray = Rgb::new(90, 90, 90);
        let blue = Rgb::new(0, 0, 180);
        let buffer = split_buffer(40, 40, 28, gray, blue);
        let sample = Sampler::default().sample(20, 20, landscape(), &buffer);

        assert!(sample.gray.total() > sample.chromatic.total());
        assert_eq!(sample.dominant(), Some(Rgb::new(60, 60, 240)));
    }

    #[test]
    fn test_majority_chromatic_wins() {
        let green = Rgb::new(0, 160, 0);
        let orange = Rgb::new(220, 120, 0);
        let buffer = split_buffer(40, 40, 14, green, orange);
        let sample = Sampler::default().sample(20, 20, landscape(), &buffer);

        // Box x range [10, 30): 4 green columns, 16 orange
        assert_eq!(sample.chromatic.count(green.brighten(60)), 80);
        assert_eq!(sample.chromatic.count(orange.brighten(60)), 320);
        assert_eq!(sample.dominant(), Some(orange.brighten(60)));
    }

    #[test]
    fn test_custom_config_disables_brightening() {
        let red = Rgb::new(200, 10, 10);
        let buffer = RgbBuffer::filled(40, 40, red);
        let sampler = Sampler::new(SamplerConfig::default().with_brightness(0));
        assert_eq!(sampler.dominant_color(20, 20, landscape(), &buffer), Some(red));
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;
        use std::collections::HashSet;

        fn buffer_strategy() -> impl Strategy<Value = RgbBuffer> {
            (1u32..24, 1u32..24).prop_flat_map(|(w, h)| {
                proptest::collection::vec(0u32..0x0100_0000, (w * h) as usize).prop_map(move |px| {
                    let px = px.into_iter().map(|p| p | 0xff00_0000).collect();
                    RgbBuffer::from_pixels(w, h, px).unwrap()
                })
            })
        }

        proptest! {
            #[test]
            fn test_dominant_comes_from_neighborhood(
                buffer in buffer_strategy(),
                cx in 0u32..30,
                cy in 0u32..30,
                which in 0usize..4
            ) {
                let orientation = Some(Orientation::ALL[which]);
                let sampler = Sampler::default();
                let sample = sampler.sample(cx, cy, orientation, &buffer);

                // Colors the scan is allowed to report
                let mut candidates = HashSet::new();
                for (x, y) in sample.region.points() {
                    let index = map_index(x, y, orientation, buffer.width(), buffer.height());
                    if let Some(index) = index {
                        let color = buffer.get(index).unwrap();
                        candidates.insert(color);
                        candidates.insert(color.brighten(DEFAULT_BRIGHTNESS));
                    }
                }

                match sample.dominant() {
                    Some(color) => prop_assert!(candidates.contains(&color)),
                    None => prop_assert!(candidates.is_empty()),
                }
                prop_assert_eq!(sample.misses, 0);
            }
        }
    }
}
