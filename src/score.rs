//! Confidence scoring from the windowed feature pair.
//!
//! The two features are normalized to [0, 1] and blended into a single
//! bounded confidence. Temporal variance saturates at 0.1 (an empirically
//! chosen full-scale for normalized magnitudes); correlation enters by
//! absolute value, since strongly negative cross-subcarrier coupling is
//! just as indicative of motion as strongly positive coupling.

use crate::features::Features;

/// Temporal variance mapping to full scale: variance at or above this
/// value counts as maximal evidence.
const VARIANCE_FULL_SCALE: f64 = 0.1;

/// Blend weight of the normalized temporal variance.
const VARIANCE_WEIGHT: f64 = 0.4;

/// Blend weight of the normalized correlation magnitude.
const CORRELATION_WEIGHT: f64 = 0.6;

/// Map a feature pair to a confidence in [0, 1].
///
/// The result is always finite and clamped. Clamping alone does not stop
/// NaN (`NaN.clamp` stays NaN), so a non-finite blend maps to 0.0 —
/// a feature pair that degenerate carries no evidence of presence.
pub fn detection_score(features: &Features) -> f64 {
    let normalized_variance = (features.temporal_variance / VARIANCE_FULL_SCALE).clamp(0.0, 1.0);
    let normalized_correlation = features.subcarrier_correlation.abs().clamp(0.0, 1.0);

    let score = VARIANCE_WEIGHT * normalized_variance + CORRELATION_WEIGHT * normalized_correlation;
    if score.is_finite() {
        score.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn features(variance: f64, correlation: f64) -> Features {
        Features {
            temporal_variance: variance,
            subcarrier_correlation: correlation,
        }
    }

    #[test]
    fn test_quiet_features_score_zero() {
        assert_eq!(detection_score(&features(0.0, 0.0)), 0.0);
    }

    #[test]
    fn test_saturated_features_score_one() {
        assert_relative_eq!(detection_score(&features(10.0, 1.0)), 1.0);
    }

    #[test]
    fn test_weighted_blend() {
        // Variance at half scale, correlation at 0.5: 0.4*0.5 + 0.6*0.5.
        assert_relative_eq!(detection_score(&features(0.05, 0.5)), 0.5);
        // Variance-only evidence tops out at its 0.4 weight.
        assert_relative_eq!(detection_score(&features(5.0, 0.0)), 0.4);
        // Correlation-only evidence tops out at its 0.6 weight.
        assert_relative_eq!(detection_score(&features(0.0, 1.0)), 0.6);
    }

    #[test]
    fn test_negative_correlation_counts_by_magnitude() {
        assert_relative_eq!(
            detection_score(&features(0.0, -0.8)),
            detection_score(&features(0.0, 0.8))
        );
    }

    #[test]
    fn test_non_finite_features_score_zero() {
        assert_eq!(detection_score(&features(f64::NAN, 0.5)), 0.0);
        assert_eq!(detection_score(&features(0.05, f64::NAN)), 0.0);
        assert_eq!(detection_score(&features(f64::NAN, f64::NAN)), 0.0);
        // Infinite variance saturates its clamp instead of leaking out.
        assert_relative_eq!(detection_score(&features(f64::INFINITY, 0.0)), 0.4);
    }

    #[test]
    fn test_score_is_bounded_for_extreme_inputs() {
        for &(v, c) in &[
            (f64::MAX, 1.0),
            (1e300, -1e300),
            (0.0, 5.0),
            (-1.0, 0.0),
            (1e-300, 1e-300),
        ] {
            let score = detection_score(&features(v, c));
            assert!(
                (0.0..=1.0).contains(&score) && score.is_finite(),
                "score {} out of bounds for features ({}, {})",
                score,
                v,
                c
            );
        }
    }
}
