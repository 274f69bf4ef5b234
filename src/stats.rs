//! Scalar statistics shared by the pipeline stages.
//!
//! All variances are population variances (divide by the count, no Bessel
//! correction), matching what the outlier rejector and feature extractor
//! expect when comparing short windows of equal length.

/// Arithmetic mean of a slice. Returns 0.0 for an empty slice.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Population variance of a slice about a precomputed mean.
pub fn population_variance(data: &[f64], mean_val: f64) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().map(|&x| (x - mean_val) * (x - mean_val)).sum::<f64>() / data.len() as f64
}

/// Standard deviation of a slice about a precomputed mean.
pub fn std_dev(data: &[f64], mean_val: f64) -> f64 {
    population_variance(data, mean_val).sqrt()
}
