//! Shared constants, the magnitude-vector type, and the detector error type.

/// Number of subcarrier magnitudes per sample.
///
/// The radio reports complex channel estimates for the stable lower half
/// of the band: 52 interleaved components, i.e. 26 usable magnitudes per
/// sample. The unstable upper subcarriers are discarded before they reach
/// the detector.
pub const NUM_SUBCARRIERS: usize = 26;

/// Capacity of the outlier-rejection history buffer, in samples.
pub const HISTORY_SIZE: usize = 20;

/// Upper bound on the configurable detection window.
///
/// The feature extractor gathers each subcarrier's time series into a
/// stack array of this length, so `window_size` must never exceed it.
/// Construction enforces this.
pub const MAX_WINDOW_SIZE: usize = 128;

/// Numeric floor applied to variance estimates and correlation
/// denominators before division or square roots.
pub const EPSILON: f64 = 1e-10;

/// One sample of per-subcarrier channel magnitudes.
pub type MagnitudeVector = [f64; NUM_SUBCARRIERS];

/// Errors reported at detector construction time.
///
/// The per-sample `detect` path never fails: insufficient data is a
/// defined warmup state and numeric degeneracies are floored, so every
/// misconfiguration is caught here instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DetectorError {
    #[error("window size must be at least 1")]
    ZeroWindowSize,

    #[error("window size {requested} exceeds the maximum of {max}")]
    WindowTooLarge { requested: usize, max: usize },

    #[error("threshold {0} is outside [0, 1]")]
    InvalidThreshold(f64),
}
