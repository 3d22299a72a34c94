//! Affinity weight computation from local luminance statistics
//!
//! Weights follow the colorization-by-optimization kernel: a neighbor whose
//! luma is close to the center's gets a large weight, scaled by the local
//! variance so busy regions discriminate more sharply than flat ones.

use crate::io::configuration::{SIGMA_FLOOR, SIGMA_SCALE};

/// Normalized affinity weights between a center pixel and its neighbors
///
/// `window_luma` holds the luma of every pixel in the window in row-major
/// order, center included; `center_offset` is the center's position within
/// that slice. Returns one weight per non-center entry, in window order,
/// non-negative and summing to 1. A window holding only the center yields an
/// empty vector, which callers must treat as a degenerate neighborhood.
pub fn affinity_weights(window_luma: &[f64], center_offset: usize) -> Vec<f64> {
    if window_luma.len() < 2 {
        return Vec::new();
    }

    let center_value = window_luma.get(center_offset).copied().unwrap_or(0.0);

    let count = window_luma.len() as f64;
    let mean = window_luma.iter().sum::<f64>() / count;
    let variance = window_luma
        .iter()
        .map(|luma| (luma - mean).powi(2))
        .sum::<f64>()
        / count;

    // The floor bounds the exponent in flat regions where the variance
    // vanishes; without it the kernel degenerates to 0/0
    let sigma = (SIGMA_SCALE * variance).max(SIGMA_FLOOR);

    let mut weights: Vec<f64> = window_luma
        .iter()
        .enumerate()
        .filter(|&(offset, _)| offset != center_offset)
        .map(|(_, luma)| (-(luma - center_value).powi(2) / sigma).exp())
        .collect();

    let total: f64 = weights.iter().sum();
    for weight in &mut weights {
        *weight /= total;
    }

    weights
}
