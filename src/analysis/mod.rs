//! Luminance statistics feeding the smoothness constraints

/// Affinity weight computation from local luminance statistics
pub mod weights;
