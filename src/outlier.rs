//! Short-horizon outlier rejection for incoming magnitude samples.
//!
//! Transient channel anomalies (interference bursts, AGC glitches) show up
//! as single-sample spikes on individual subcarriers. The rejector keeps a
//! short rolling history of *raw* samples and clamps any subcarrier that
//! deviates more than three standard deviations from its local mean,
//! replacing it with that mean. No trained noise model is involved; the
//! baseline is purely the recent past.
//!
//! The history deliberately stores raw values, never cleaned ones, so that
//! the baseline keeps tracking the ground-truth channel even while spikes
//! are being suppressed.

use crate::types::{MagnitudeVector, EPSILON, HISTORY_SIZE, NUM_SUBCARRIERS};
use crate::vector_ring::VectorRing;

/// Minimum history depth before rejection engages. Below this the sample
/// passes through unmodified.
const MIN_HISTORY: usize = 5;

/// Deviation gate in units of local standard deviation.
const SIGMA_GATE: f64 = 3.0;

/// Per-subcarrier spike clamp backed by a rolling raw-sample history.
#[derive(Debug, Clone)]
pub struct OutlierRejector {
    history: VectorRing,
    epsilon: f64,
}

impl OutlierRejector {
    pub fn new() -> Self {
        Self {
            history: VectorRing::new(HISTORY_SIZE),
            epsilon: EPSILON,
        }
    }

    /// Number of raw samples currently held as baseline.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Record `raw` into the history and return a cleaned copy.
    ///
    /// The raw sample is pushed first, so the local statistics below
    /// include it; a lone spike therefore inflates the local std and only
    /// gets clamped once enough consistent history backs the baseline.
    pub fn clean(&mut self, raw: &MagnitudeVector) -> MagnitudeVector {
        self.history.push(raw);

        let mut output = *raw;
        let n = self.history.len();
        if n < MIN_HISTORY {
            return output;
        }

        for i in 0..NUM_SUBCARRIERS {
            let mut sum = 0.0;
            let mut sum_sq = 0.0;
            for sample in self.history.iter() {
                let val = sample[i];
                sum += val;
                sum_sq += val * val;
            }
            let local_mean = sum / n as f64;
            let variance = (sum_sq / n as f64 - local_mean * local_mean).max(self.epsilon);
            let local_std = variance.sqrt();

            if (raw[i] - local_mean).abs() > SIGMA_GATE * local_std {
                output[i] = local_mean;
            }
        }

        output
    }
}

impl Default for OutlierRejector {
    fn default() -> Self {
        Self::new()
    }
}
