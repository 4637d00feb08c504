//! Atomic counters shared by the classifier's producer and readers.

use std::sync::atomic::{AtomicU64, Ordering};

use super::TelemetrySnapshot;

/// Counters for frame decoding and classification.
///
/// All updates use relaxed ordering; counters are independent and only read
/// as a group through [`ClassifierMetrics::snapshot`].
#[derive(Debug, Default)]
pub struct ClassifierMetrics {
    frames_decoded: AtomicU64,
    frames_dropped: AtomicU64,
    classifications: AtomicU64,
    misses: AtomicU64,
    pixels_sampled: AtomicU64,
    pixels_outside: AtomicU64,
}

impl ClassifierMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// A frame was decoded and published.
    pub fn frame_decoded(&self) {
        self.frames_decoded.fetch_add(1, Ordering::Relaxed);
    }

    /// A frame was rejected by the decoder.
    pub fn frame_dropped(&self) {
        self.frames_dropped.fetch_add(1, Ordering::Relaxed);
    }

    /// A classification request finished. `matched` is false when no name
    /// could be produced.
    pub fn classified(&self, matched: bool) {
        self.classifications.fetch_add(1, Ordering::Relaxed);
        if !matched {
            self.misses.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Pixels read by one neighborhood scan, and points that fell outside
    /// the frame.
    pub fn pixels_sampled(&self, sampled: usize, outside: usize) {
        self.pixels_sampled
            .fetch_add(sampled as u64, Ordering::Relaxed);
        self.pixels_outside
            .fetch_add(outside as u64, Ordering::Relaxed);
    }

    /// Copy the current counter values.
    pub fn snapshot(&self) -> TelemetrySnapshot {
        TelemetrySnapshot {
            frames_decoded: self.frames_decoded.load(Ordering::Relaxed),
            frames_dropped: self.frames_dropped.load(Ordering::Relaxed),
            classifications: self.classifications.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            pixels_sampled: self.pixels_sampled.load(Ordering::Relaxed),
            pixels_outside: self.pixels_outside.load(Ordering::Relaxed),
        }
    }
}
