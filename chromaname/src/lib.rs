//! chromaname - color naming for live camera frames
//!
//! This library decodes NV21 camera preview frames, samples the circular
//! neighborhood under a touch point, and names the dominant color against a
//! palette of reference colors.
//!
//! # Architecture
//!
//! ```text
//! NV21 bytes ──► frame::decode ──► RgbBuffer ──┐
//!                                              │  (snapshot)
//! touch (x, y) ──► orientation::map_index ◄────┤
//!                          │                   │
//!                          ▼                   │
//!                  sampler::Sampler::sample ◄──┘
//!                          │
//!                          ▼
//!                 palette::Palette::closest_match ──► color name
//! ```
//!
//! [`classifier::ColorClassifier`] owns the shared state (latest frame and
//! current orientation) and is the entry point for host applications.
//!
//! # Example
//!
//! ```
//! use chromaname::classifier::ColorClassifier;
//! use chromaname::orientation::Orientation;
//! use chromaname::palette::Palette;
//!
//! let palette = Palette::from_json_str(r#"{"Gray":"808080","Red":"FF0000"}"#).unwrap();
//! let classifier = ColorClassifier::new(palette);
//! classifier.set_orientation(Orientation::Rotation90);
//!
//! // 2x2 frame: luma 126, neutral chroma
//! let frame = [126, 126, 126, 126, 128, 128];
//! classifier.decode_frame(&frame, 2, 2).unwrap();
//!
//! assert_eq!(classifier.classify_point(1, 1).as_deref(), Some("Gray"));
//! ```

pub mod app;
pub mod classifier;
pub mod color;
pub mod config;
pub mod frame;
pub mod logging;
pub mod orientation;
pub mod palette;
pub mod sampler;
pub mod telemetry;

/// Library version, taken from the crate manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
