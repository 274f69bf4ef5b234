//! Windowed feature extraction over the detection window.
//!
//! Two scalar features summarize a full window of normalized samples:
//!
//! - **Temporal variance**: the per-subcarrier variance of each
//!   subcarrier's time series, averaged across subcarriers. Human motion
//!   perturbs the multipath profile, so the magnitudes fluctuate over time
//!   while a static environment holds them flat.
//! - **Adjacent-subcarrier correlation**: the Pearson correlation between
//!   each pair of neighboring subcarrier series, averaged (signed) across
//!   the 25 pairs. Motion-induced fading is broadband, sweeping groups of
//!   neighboring subcarriers together, whereas receiver noise decorrelates
//!   them.
//!
//! Each subcarrier series is gathered into a stack scratch array of
//! [`MAX_WINDOW_SIZE`] elements; the detector validates the configured
//! window against that bound at construction. A seeded sub-epsilon jitter
//! is folded into each correlation numerator so two constant series
//! produce a well-defined (near-zero) coefficient instead of 0/0.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::stats::{mean, population_variance};
use crate::types::{EPSILON, MAX_WINDOW_SIZE, NUM_SUBCARRIERS};
use crate::vector_ring::VectorRing;

/// The feature pair computed from one full window.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Features {
    /// Mean per-subcarrier temporal variance over the window.
    pub temporal_variance: f64,
    /// Mean signed Pearson correlation between adjacent subcarrier series.
    pub subcarrier_correlation: f64,
}

/// Stateless-per-call feature computation with a seeded jitter source.
///
/// The only state carried between calls is the jitter generator, so two
/// extractors seeded identically produce bit-identical features for
/// identical windows.
#[derive(Debug, Clone)]
pub struct FeatureExtractor {
    rng: StdRng,
    epsilon: f64,
}

impl FeatureExtractor {
    /// Create an extractor whose jitter stream is derived from `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            epsilon: EPSILON,
        }
    }

    /// Compute the feature pair over every sample retained in `window`.
    ///
    /// Callers must ensure `window.len() <= MAX_WINDOW_SIZE`; the detector
    /// guarantees this by rejecting larger window configurations at
    /// construction time.
    pub fn extract(&mut self, window: &VectorRing) -> Features {
        let n = window.len();
        debug_assert!(n > 0 && n <= MAX_WINDOW_SIZE);

        Features {
            temporal_variance: self.temporal_variance(window, n),
            subcarrier_correlation: self.adjacent_correlation(window, n),
        }
    }

    /// Per-subcarrier time-series variance, averaged across subcarriers.
    fn temporal_variance(&self, window: &VectorRing, n: usize) -> f64 {
        let mut series = [0.0; MAX_WINDOW_SIZE];
        let mut variance_sum = 0.0;

        for i in 0..NUM_SUBCARRIERS {
            for (t, sample) in window.iter().enumerate() {
                series[t] = sample[i];
            }
            let series = &series[..n];
            variance_sum += population_variance(series, mean(series));
        }

        variance_sum / NUM_SUBCARRIERS as f64
    }

    /// Mean signed Pearson correlation over the 25 adjacent subcarrier pairs.
    fn adjacent_correlation(&mut self, window: &VectorRing, n: usize) -> f64 {
        let mut series_a = [0.0; MAX_WINDOW_SIZE];
        let mut series_b = [0.0; MAX_WINDOW_SIZE];
        let mut correlation_sum = 0.0;

        for i in 0..NUM_SUBCARRIERS - 1 {
            for (t, sample) in window.iter().enumerate() {
                series_a[t] = sample[i];
                series_b[t] = sample[i + 1];
            }
            let a = &series_a[..n];
            let b = &series_b[..n];
            let mean_a = mean(a);
            let mean_b = mean(b);

            let mut numerator = 0.0;
            let mut denom_a = 0.0;
            let mut denom_b = 0.0;
            for t in 0..n {
                let da = a[t] - mean_a;
                let db = b[t] - mean_b;
                numerator += da * db;
                denom_a += da * da;
                denom_b += db * db;
            }

            // Sub-epsilon jitter keeps two constant series from hitting an
            // exact 0/0; the floored denominators bound the quotient.
            numerator += self.epsilon * (self.rng.gen::<f64>() - 0.5);
            denom_a = denom_a.max(self.epsilon);
            denom_b = denom_b.max(self.epsilon);

            correlation_sum += numerator / (denom_a * denom_b).sqrt();
        }

        correlation_sum / (NUM_SUBCARRIERS - 1) as f64
    }
}
