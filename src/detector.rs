//! Streaming presence detector: per-sample orchestration of the pipeline.
//!
//! One [`PresenceDetector`] owns the whole per-device state: the outlier
//! rejector with its raw-sample history, the main detection window of
//! normalized samples, and the feature extractor with its jitter stream.
//! Every call to [`PresenceDetector::detect`] advances the pipeline by one
//! sample:
//!
//! ```text
//! raw magnitudes → outlier clamp → normalize → window push
//!                                                 │
//!                               window full? ── no ──→ (0.0, absent)
//!                                                 │
//!                                                yes
//!                                                 │
//!                           features → score → (confidence, presence)
//! ```
//!
//! Until the window has filled once, the detector is in warmup and every
//! call reports zero confidence. The transition to active is monotonic:
//! ring overwrite keeps the window full for the rest of the detector's
//! life. There is no reset; build a fresh detector to start over.
//!
//! A detector is single-threaded state. Calls never block and perform a
//! bounded amount of work; callers drive one detector from one thread (or
//! otherwise serialize calls) and may run independent detectors on
//! independent threads.
//!
//! ## Example
//!
//! ```rust
//! use csi_presence::{DetectorConfig, PresenceDetector};
//!
//! let mut detector = PresenceDetector::new(DetectorConfig::default()).unwrap();
//! let sample = [12.0; 26];
//! let detection = detector.detect(&sample);
//! // First sample: still warming up.
//! assert!(!detection.present);
//! assert_eq!(detection.confidence, 0.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::features::{FeatureExtractor, Features};
use crate::normalize::normalize;
use crate::outlier::OutlierRejector;
use crate::score::detection_score;
use crate::types::{DetectorError, MagnitudeVector, MAX_WINDOW_SIZE};
use crate::vector_ring::VectorRing;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Tunable parameters of a presence detector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Number of samples in the detection window. Must be in
    /// `1..=MAX_WINDOW_SIZE`. At a 100 ms sampling cadence the default of
    /// 50 spans five seconds.
    pub window_size: usize,
    /// Decision cutoff in [0, 1]; presence is reported when the
    /// confidence strictly exceeds it.
    pub threshold: f64,
    /// Seed for the correlation jitter stream. Detectors built from equal
    /// configurations produce bit-identical outputs for equal inputs.
    pub jitter_seed: u64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            window_size: 50,
            threshold: 0.6,
            jitter_seed: 0,
        }
    }
}

// ---------------------------------------------------------------------------
// Detection result and state
// ---------------------------------------------------------------------------

/// Outcome of one `detect` call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Detection {
    /// True when the confidence strictly exceeds the configured threshold.
    pub present: bool,
    /// Bounded [0, 1] confidence; exactly 0.0 during warmup.
    pub confidence: f64,
}

/// Fill state of the detection window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetectorState {
    /// The window has not filled yet; every detection reports absence.
    Warmup,
    /// The window has filled at least once; detections are scored.
    Active,
}

// ---------------------------------------------------------------------------
// PresenceDetector
// ---------------------------------------------------------------------------

/// Stateful per-device presence detector over channel magnitude samples.
#[derive(Debug, Clone)]
pub struct PresenceDetector {
    config: DetectorConfig,
    rejector: OutlierRejector,
    window: VectorRing,
    extractor: FeatureExtractor,
    state: DetectorState,
    last_features: Features,
}

impl PresenceDetector {
    /// Build a detector, validating the configuration.
    ///
    /// Fails if `window_size` is zero or exceeds [`MAX_WINDOW_SIZE`] (the
    /// feature extractor's scratch bound), or if `threshold` falls outside
    /// [0, 1]. Both buffers are allocated here, once.
    pub fn new(config: DetectorConfig) -> Result<Self, DetectorError> {
        if config.window_size == 0 {
            return Err(DetectorError::ZeroWindowSize);
        }
        if config.window_size > MAX_WINDOW_SIZE {
            return Err(DetectorError::WindowTooLarge {
                requested: config.window_size,
                max: MAX_WINDOW_SIZE,
            });
        }
        if !(0.0..=1.0).contains(&config.threshold) || config.threshold.is_nan() {
            return Err(DetectorError::InvalidThreshold(config.threshold));
        }

        let window = VectorRing::new(config.window_size);
        let extractor = FeatureExtractor::new(config.jitter_seed);
        Ok(Self {
            config,
            rejector: OutlierRejector::new(),
            window,
            extractor,
            state: DetectorState::Warmup,
            last_features: Features {
                temporal_variance: 0.0,
                subcarrier_correlation: 0.0,
            },
        })
    }

    /// Process one magnitude sample and report the presence decision.
    ///
    /// Mutates both internal buffers. During warmup the result is always
    /// `(absent, 0.0)`; once the window fills, every call runs feature
    /// extraction and scoring.
    pub fn detect(&mut self, magnitudes: &MagnitudeVector) -> Detection {
        let cleaned = self.rejector.clean(magnitudes);
        let normalized = normalize(&cleaned);
        self.window.push(&normalized);

        if !self.window.is_full() {
            return Detection {
                present: false,
                confidence: 0.0,
            };
        }
        if self.state == DetectorState::Warmup {
            self.state = DetectorState::Active;
            tracing::debug!(window_size = self.config.window_size, "detection window filled");
        }

        self.last_features = self.extractor.extract(&self.window);
        let confidence = detection_score(&self.last_features);
        let present = confidence > self.config.threshold;
        tracing::trace!(confidence, present, "sample scored");

        Detection { present, confidence }
    }

    /// Warmup until the window first fills, active forever after.
    pub fn state(&self) -> DetectorState {
        self.state
    }

    /// The configuration the detector was built with.
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Temporal variance from the most recent scored sample.
    ///
    /// Diagnostic only; 0.0 until the first scored sample.
    pub fn last_variance(&self) -> f64 {
        self.last_features.temporal_variance
    }

    /// Adjacent-subcarrier correlation from the most recent scored sample.
    ///
    /// Diagnostic only; 0.0 until the first scored sample.
    pub fn last_correlation(&self) -> f64 {
        self.last_features.subcarrier_correlation
    }
}

// ===========================================================================
// Tests
// ===========================================================================
