//! Classifier telemetry.
//!
//! Lock-free counters updated from the frame producer and from touch
//! handlers, plus a point-in-time copy for display.
//!
//! ```text
//! decode_frame ──┐
//!                ├──► ClassifierMetrics ──► TelemetrySnapshot ──► CLI / logs
//! classify_point ┘    (atomic counters)     (plain copy)
//! ```
//!
//! # Example
//!
//! ```
//! use chromaname::telemetry::ClassifierMetrics;
//!
//! let metrics = ClassifierMetrics::new();
//! metrics.frame_decoded();
//! metrics.pixels_sampled(314, 0);
//! metrics.classified(true);
//!
//! let snapshot = metrics.snapshot();
//! assert_eq!(snapshot.frames_decoded, 1);
//! assert_eq!(snapshot.classifications, 1);
//! ```

mod metrics;
mod snapshot;

pub use metrics::ClassifierMetrics;
pub use snapshot::TelemetrySnapshot;
