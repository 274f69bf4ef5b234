//! Per-sample normalization of cleaned magnitude vectors.
//!
//! Centering and scaling happen *across subcarriers within one sample*,
//! not over time: the mean of the 26 magnitudes is removed and, when the
//! residual spread is meaningful, the sample is scaled to unit standard
//! deviation. Near-flat samples (spread at or below the numeric floor)
//! are left unscaled so that a quiet channel does not get blown up into
//! spurious structure by a divide-by-near-zero.

use crate::stats::{mean, std_dev};
use crate::types::{MagnitudeVector, EPSILON, NUM_SUBCARRIERS};

/// Zero-mean, unit-scale one cleaned sample across its subcarriers.
///
/// Samples extreme enough to overflow the centering sum or the spread
/// (magnitudes near `f64::MAX`) carry no usable shape and collapse to the
/// zero vector, so nothing non-finite ever enters the detection window.
pub fn normalize(cleaned: &MagnitudeVector) -> MagnitudeVector {
    let sample_mean = mean(cleaned);
    if !sample_mean.is_finite() {
        return [0.0; NUM_SUBCARRIERS];
    }

    let mut output = *cleaned;
    for val in output.iter_mut() {
        *val -= sample_mean;
    }

    // Mean is zero by construction at this point. A non-finite spread
    // means a centered element or its square overflowed.
    let spread = std_dev(&output, 0.0);
    if !spread.is_finite() {
        return [0.0; NUM_SUBCARRIERS];
    }
    if spread > EPSILON {
        for val in output.iter_mut() {
            *val /= spread;
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::population_variance;
    use crate::types::NUM_SUBCARRIERS;
    use approx::assert_relative_eq;

    #[test]
    fn test_output_is_zero_mean() {
        let mut sample = [0.0; NUM_SUBCARRIERS];
        for (i, v) in sample.iter_mut().enumerate() {
            *v = 3.0 + i as f64;
        }
        let normalized = normalize(&sample);
        assert_relative_eq!(mean(&normalized), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_output_is_unit_variance() {
        let mut sample = [0.0; NUM_SUBCARRIERS];
        for (i, v) in sample.iter_mut().enumerate() {
            *v = (i as f64) * (i as f64) * 0.5 + 1.0;
        }
        let normalized = normalize(&sample);
        let var = population_variance(&normalized, mean(&normalized));
        assert_relative_eq!(var, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_flat_sample_left_unscaled() {
        // A constant sample centers to all zeros; the epsilon guard must
        // leave it there rather than dividing by a vanishing spread.
        let sample = [5.0; NUM_SUBCARRIERS];
        let normalized = normalize(&sample);
        for (i, &val) in normalized.iter().enumerate() {
            assert_eq!(val, 0.0, "subcarrier {} expected exactly 0.0, got {}", i, val);
        }
    }

    #[test]
    fn test_overflowing_mean_collapses_to_zero() {
        // Summing 26 values near f64::MAX overflows the mean to infinity;
        // the sample must come out as the zero vector, not -inf residuals.
        let sample = [f64::MAX; NUM_SUBCARRIERS];
        let normalized = normalize(&sample);
        assert_eq!(normalized, [0.0; NUM_SUBCARRIERS]);

        // Opposite-sign extremes overflow the sum just the same.
        let mut mixed = [f64::MAX; NUM_SUBCARRIERS];
        mixed[0] = -f64::MAX;
        assert_eq!(normalize(&mixed), [0.0; NUM_SUBCARRIERS]);
    }

    #[test]
    fn test_overflowing_spread_collapses_to_zero() {
        // The mean stays finite here, but the squared deviations overflow
        // the spread; the sample must collapse rather than divide by inf.
        let mut sample = [0.0; NUM_SUBCARRIERS];
        sample[0] = f64::MAX;
        let normalized = normalize(&sample);
        assert_eq!(normalized, [0.0; NUM_SUBCARRIERS]);
    }

    #[test]
    fn test_scaling_is_shape_preserving() {
        let mut sample = [1.0; NUM_SUBCARRIERS];
        sample[0] = 11.0;
        sample[1] = 6.0;
        let normalized = normalize(&sample);
        // Ordering and relative spacing survive the affine transform.
        assert!(normalized[0] > normalized[1]);
        assert!(normalized[1] > normalized[2]);
        let ratio = (normalized[0] - normalized[2]) / (normalized[1] - normalized[2]);
        assert_relative_eq!(ratio, 2.0, epsilon = 1e-9);
    }
}
