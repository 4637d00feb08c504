//! Shared classification state for a live camera preview.
//!
//! [`ColorClassifier`] holds the most recently decoded frame and the current
//! display orientation. A camera callback publishes frames with
//! [`ColorClassifier::decode_frame`] while touch handlers on other threads
//! call [`ColorClassifier::classify_point`].
//!
//! ```text
//!  camera thread                      UI / touch threads
//!  ─────────────                      ──────────────────
//!  decode_frame(bytes)                classify_point(x, y)
//!     │ decode                           │ snapshot() ── load the current Arc
//!     ▼                                  ▼
//!  ArcSwapOption<DecodedFrame> ──────► sampler + palette on the snapshot
//!     (atomic pointer swap)
//! ```
//!
//! Neither side takes a lock. Readers always see one complete frame: a
//! classification started before a new frame is published keeps working on
//! the frame it took.

mod report;

pub use report::PointReport;

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use arc_swap::ArcSwapOption;
use tracing::{debug, info, trace, warn};

use crate::frame::{self, FrameError, RgbBuffer};
use crate::orientation::{map_index, Orientation};
use crate::palette::Palette;
use crate::sampler::{Sampler, SamplerConfig};
use crate::telemetry::ClassifierMetrics;

/// Stored in the orientation slot until the host reports a rotation.
const ORIENTATION_UNSET: u8 = u8::MAX;

/// A decoded frame published to readers.
#[derive(Debug)]
pub struct DecodedFrame {
    sequence: u64,
    buffer: Arc<RgbBuffer>,
}

impl DecodedFrame {
    /// Publication order, starting at 1.
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn buffer(&self) -> &RgbBuffer {
        &self.buffer
    }
}

/// Names the color under touch points of the latest camera frame.
pub struct ColorClassifier {
    palette: Palette,
    sampler: Sampler,
    frame: ArcSwapOption<DecodedFrame>,
    orientation: AtomicU8,
    metrics: Arc<ClassifierMetrics>,
}

impl ColorClassifier {
    /// Create a classifier with the default sampler settings.
    pub fn new(palette: Palette) -> Self {
        Self::with_config(palette, SamplerConfig::default())
    }

    pub fn with_config(palette: Palette, config: SamplerConfig) -> Self {
        Self {
            palette,
            sampler: Sampler::new(config),
            frame: ArcSwapOption::empty(),
            orientation: AtomicU8::new(ORIENTATION_UNSET),
            metrics: Arc::new(ClassifierMetrics::new()),
        }
    }

    /// Decode an NV21 frame and make it the current frame.
    ///
    /// # Errors
    ///
    /// Returns the decoder's error for invalid dimensions or a length
    /// mismatch. The previously published frame stays current in that case.
    pub fn decode_frame(&self, bytes: &[u8], width: u32, height: u32) -> Result<(), FrameError> {
        let buffer = match frame::decode(bytes, width, height) {
            Ok(buffer) => buffer,
            Err(e) => {
                self.metrics.frame_dropped();
                warn!(error = %e, width, height, "Dropping camera frame");
                return Err(e);
            }
        };
        self.publish(buffer);
        Ok(())
    }

    /// Make an already decoded buffer the current frame.
    ///
    /// The sequence number is derived from the frame being replaced inside
    /// the swap, so with several publishers the current frame always carries
    /// the highest sequence.
    pub fn publish(&self, buffer: RgbBuffer) {
        let (width, height) = (buffer.width(), buffer.height());
        let buffer = Arc::new(buffer);
        let mut sequence = 0;

        self.frame.rcu(|current| {
            sequence = current.as_ref().map_or(0, |frame| frame.sequence) + 1;
            Some(Arc::new(DecodedFrame {
                sequence,
                buffer: Arc::clone(&buffer),
            }))
        });
        self.metrics.frame_decoded();
        trace!(sequence, width, height, "Published frame");
    }

    /// The current frame, if any. The returned handle stays valid after
    /// newer frames are published.
    pub fn snapshot(&self) -> Option<Arc<DecodedFrame>> {
        self.frame.load_full()
    }

    pub fn set_orientation(&self, orientation: Orientation) {
        self.orientation
            .store(orientation.to_u8(), Ordering::Relaxed);
        debug!(%orientation, "Orientation changed");
    }

    /// Set the orientation from a display rotation angle in degrees.
    pub fn set_display_rotation(&self, degrees: u32) -> Orientation {
        let orientation = Orientation::from_display_rotation(degrees);
        self.set_orientation(orientation);
        orientation
    }

    /// The current orientation, `None` until one has been set.
    pub fn orientation(&self) -> Option<Orientation> {
        Orientation::from_u8(self.orientation.load(Ordering::Relaxed))
    }

    /// Name of the dominant color around display point `(x, y)`.
    ///
    /// Returns `None` when no frame has been decoded, no pixel around the
    /// point could be read, or the palette is empty.
    pub fn classify_point(&self, x: u32, y: u32) -> Option<String> {
        self.inspect_point(x, y).and_then(|report| report.name)
    }

    /// Classify `(x, y)` and return the full diagnostic report.
    ///
    /// Returns `None` only when no frame has been decoded yet.
    pub fn inspect_point(&self, x: u32, y: u32) -> Option<PointReport> {
        let Some(frame) = self.snapshot() else {
            self.metrics.classified(false);
            debug!(x, y, "No frame decoded yet");
            return None;
        };
        let orientation = self.orientation();
        let buffer = frame.buffer();
        info!(x, y, "Touch coordinates");

        let touched = map_index(x, y, orientation, buffer.width(), buffer.height())
            .and_then(|index| buffer.get(index));
        let touched_name = touched
            .and_then(|color| self.palette.closest_name(color))
            .map(str::to_string);
        if let Some(color) = touched {
            debug!(
                color = %color,
                name = touched_name.as_deref().unwrap_or("-"),
                "Touched pixel"
            );
        }

        let sample = self.sampler.sample(x, y, orientation, buffer);
        self.metrics.pixels_sampled(sample.sampled(), sample.misses);

        let dominant = sample.dominant();
        let found = dominant.and_then(|color| self.palette.closest_match(color));
        self.metrics.classified(found.is_some());

        match (dominant, found) {
            (Some(color), Some(m)) => info!(
                color = %color,
                name = m.name,
                distance = m.distance,
                "Classified touch point"
            ),
            (Some(color), None) => debug!(color = %color, "Palette is empty"),
            (None, _) => debug!(x, y, "No pixels around touch point"),
        }

        Some(PointReport {
            x,
            y,
            rotation: orientation.map(Orientation::degrees),
            frame: frame.sequence(),
            touched,
            touched_name,
            dominant,
            name: found.map(|m| m.name.to_string()),
            distance: found.map(|m| m.distance),
            region: sample.region,
            sampled: sample.sampled(),
        })
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn sampler_config(&self) -> &SamplerConfig {
        self.sampler.config()
    }

    /// Shared handle to the classifier's counters.
    pub fn metrics(&self) -> Arc<ClassifierMetrics> {
        Arc::clone(&self.metrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    /// 2×2 frame decoding to (128, 128, 128).
    const GRAY_FRAME: [u8; 6] = [126, 126, 126, 126, 128, 128];

    fn classifier() -> ColorClassifier {
        let palette =
            Palette::from_json_str(r#"{"Gray":"808080","Red":"FF0000","Blue":"0000FF"}"#)
                .unwrap();
        ColorClassifier::new(palette)
    }

    #[test]
    fn test_classifier_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ColorClassifier>();
        assert_send_sync::<Arc<DecodedFrame>>();
    }

    #[test]
    fn test_no_frame_yields_none() {
        let classifier = classifier();
        assert_eq!(classifier.classify_point(0, 0), None);
        assert!(classifier.inspect_point(0, 0).is_none());
        assert_eq!(classifier.metrics().snapshot().misses, 2);
    }

    #[test]
    fn test_orientation_unset_by_default() {
        let classifier = classifier();
        assert_eq!(classifier.orientation(), None);

        classifier.set_orientation(Orientation::Rotation180);
        assert_eq!(classifier.orientation(), Some(Orientation::Rotation180));

        assert_eq!(classifier.set_display_rotation(270), Orientation::Rotation270);
        assert_eq!(classifier.orientation(), Some(Orientation::Rotation270));
        assert_eq!(classifier.set_display_rotation(45), Orientation::Rotation0);
    }

    #[test]
    fn test_gray_frame_classifies_gray() {
        let classifier = classifier();
        classifier.set_orientation(Orientation::Rotation90);
        classifier.decode_frame(&GRAY_FRAME, 2, 2).unwrap();

        let report = classifier.inspect_point(1, 1).unwrap();
        assert_eq!(report.touched, Some(Rgb::new(128, 128, 128)));
        assert_eq!(report.touched_name.as_deref(), Some("Gray"));
        assert_eq!(report.dominant, Some(Rgb::new(128, 128, 128)));
        assert_eq!(report.name.as_deref(), Some("Gray"));
        assert_eq!(report.distance, Some(0));
        assert_eq!(report.sampled, 4);
        assert_eq!(report.frame, 1);
    }

    #[test]
    fn test_unset_orientation_uses_landscape_mapping() {
        let classifier = classifier();
        classifier.decode_frame(&GRAY_FRAME, 2, 2).unwrap();
        assert_eq!(classifier.classify_point(0, 1).as_deref(), Some("Gray"));
        assert_eq!(classifier.inspect_point(0, 1).unwrap().rotation, None);
    }

    #[test]
    fn test_point_outside_frame() {
        let classifier = classifier();
        classifier.decode_frame(&GRAY_FRAME, 2, 2).unwrap();

        let report = classifier.inspect_point(50, 50).unwrap();
        assert_eq!(report.touched, None);
        assert_eq!(report.dominant, None);
        assert_eq!(report.name, None);
        assert_eq!(classifier.classify_point(50, 50), None);
    }

    #[test]
    fn test_empty_palette_never_names() {
        let classifier = ColorClassifier::new(Palette::empty());
        classifier.decode_frame(&GRAY_FRAME, 2, 2).unwrap();

        let report = classifier.inspect_point(1, 1).unwrap();
        assert_eq!(report.dominant, Some(Rgb::new(128, 128, 128)));
        assert_eq!(report.name, None);
    }

    #[test]
    fn test_failed_decode_keeps_previous_frame() {
        let classifier = classifier();
        classifier.decode_frame(&GRAY_FRAME, 2, 2).unwrap();

        let err = classifier.decode_frame(&GRAY_FRAME[..5], 2, 2).unwrap_err();
        assert!(matches!(err, FrameError::DimensionMismatch { .. }));
        assert!(classifier.decode_frame(&[], 0, 0).is_err());

        let frame = classifier.snapshot().unwrap();
        assert_eq!(frame.sequence(), 1);
        assert_eq!(classifier.classify_point(1, 1).as_deref(), Some("Gray"));

        let metrics = classifier.metrics().snapshot();
        assert_eq!(metrics.frames_decoded, 1);
        assert_eq!(metrics.frames_dropped, 2);
    }

    #[test]
    fn test_snapshot_survives_new_frame() {
        let classifier = classifier();
        classifier.publish(RgbBuffer::filled(4, 4, Rgb::new(255, 0, 0)));
        let old = classifier.snapshot().unwrap();

        classifier.publish(RgbBuffer::filled(4, 4, Rgb::new(0, 0, 255)));
        let new = classifier.snapshot().unwrap();

        assert_eq!(old.buffer().get(0), Some(Rgb::new(255, 0, 0)));
        assert_eq!(new.buffer().get(0), Some(Rgb::new(0, 0, 255)));
        assert!(new.sequence() > old.sequence());
    }

    #[test]
    fn test_publish_while_reader_holds_current_frame() {
        let classifier = classifier();
        classifier.publish(RgbBuffer::filled(4, 4, Rgb::new(255, 0, 0)));

        // A reader still looking at the current frame must not hold up the producer
        let held = classifier.frame.load();
        classifier.publish(RgbBuffer::filled(4, 4, Rgb::new(0, 0, 255)));

        assert_eq!(held.as_ref().map(|f| f.sequence()), Some(1));
        assert_eq!(classifier.snapshot().map(|f| f.sequence()), Some(2));
    }

    #[test]
    fn test_concurrent_publishers_keep_newest_sequence() {
        use std::thread;

        let classifier = Arc::new(classifier());
        let publishers: Vec<_> = (0..4u8)
            .map(|i| {
                let classifier = Arc::clone(&classifier);
                thread::spawn(move || {
                    for _ in 0..50 {
                        classifier.publish(RgbBuffer::filled(2, 2, Rgb::new(i, i, i)));
                    }
                })
            })
            .collect();

        let reader = {
            let classifier = Arc::clone(&classifier);
            thread::spawn(move || {
                let mut last = 0;
                for _ in 0..500 {
                    if let Some(frame) = classifier.snapshot() {
                        assert!(frame.sequence() >= last);
                        last = frame.sequence();
                    }
                }
            })
        };

        for publisher in publishers {
            publisher.join().unwrap();
        }
        reader.join().unwrap();

        assert_eq!(classifier.snapshot().unwrap().sequence(), 200);
        assert_eq!(classifier.metrics().snapshot().frames_decoded, 200);
    }

    #[test]
    fn test_custom_sampler_config() {
        let palette = Palette::from_entries([("Dark Red", Rgb::new(200, 10, 10))]);
        let config = SamplerConfig::default().with_brightness(0);
        let classifier = ColorClassifier::with_config(palette, config);
        classifier.publish(RgbBuffer::filled(8, 8, Rgb::new(200, 10, 10)));

        let report = classifier.inspect_point(4, 4).unwrap();
        assert_eq!(report.distance, Some(0));
        assert_eq!(classifier.sampler_config().brightness, 0);
    }
}
