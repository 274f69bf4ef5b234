//! # CSI Presence Detection
//!
//! Streaming human-presence detection from Wi-Fi channel-state magnitude
//! samples. Each sampling interval, an upstream radio integration hands
//! over one 26-subcarrier magnitude vector; this crate turns that stream
//! into a binary presence decision with a bounded confidence score, using
//! only recent history — no training phase, no persisted model, and fixed
//! memory allocated once at construction.
//!
//! ## Pipeline
//!
//! ```text
//! raw magnitudes
//!     │
//!     ▼
//! outlier clamp ──── raw history ring (20 samples)
//!     │
//!     ▼
//! normalize (zero-mean, unit-scale across subcarriers)
//!     │
//!     ▼
//! detection window ring (window_size samples)
//!     │ (once full)
//!     ▼
//! features: temporal variance + adjacent-subcarrier correlation
//!     │
//!     ▼
//! weighted score → (presence, confidence)
//! ```
//!
//! Human motion perturbs the indoor multipath profile, which shows up as
//! temporal variance on each subcarrier and as correlated fading across
//! neighboring subcarriers; a static room produces neither.
//!
//! ## Example
//!
//! ```rust
//! use csi_presence::{DetectorConfig, PresenceDetector};
//!
//! let config = DetectorConfig {
//!     window_size: 50,
//!     threshold: 0.6,
//!     ..DetectorConfig::default()
//! };
//! let mut detector = PresenceDetector::new(config).unwrap();
//!
//! // One call per sampling interval (~100 ms).
//! let magnitudes = [12.0; 26];
//! let detection = detector.detect(&magnitudes);
//! assert!(!detection.present); // still warming up
//! ```

pub mod csi_frame;
pub mod detector;
pub mod features;
pub mod normalize;
pub mod outlier;
pub mod score;
pub mod stats;
pub mod types;
pub mod vector_ring;

pub use csi_frame::{subcarrier_magnitudes, CsiFormat, FrameError};
pub use detector::{Detection, DetectorConfig, DetectorState, PresenceDetector};
pub use features::Features;
pub use types::{DetectorError, MagnitudeVector, MAX_WINDOW_SIZE, NUM_SUBCARRIERS};
