//! RGB to YIQ conversion and back with fixed clamping ranges
//!
//! Matrix coefficients follow the published NTSC YIQ definition. Both
//! directions are elementwise-linear transforms followed by independent
//! per-channel clamping, so downstream stages always see bounded values.

use ndarray::Array3;

/// RGB to YIQ coefficients; output channel k is `sum_c rgb[c] * FORWARD[c][k]`
const FORWARD: [[f64; 3]; 3] = [
    [0.299, 0.595_716, 0.211_456],
    [0.587, -0.274_453, -0.522_591],
    [0.114, -0.321_263, 0.311_135],
];

/// YIQ to RGB coefficients, same orientation as `FORWARD`
const INVERSE: [[f64; 3]; 3] = [
    [1.0, 1.0, 1.0],
    [0.9563, -0.2721, -1.107],
    [0.621, -0.6474, 1.7046],
];

/// Clamp bounds for the Y, I, and Q channels
const YIQ_RANGES: [(f64, f64); 3] = [(0.0, 1.0), (-0.5957, 0.5957), (-0.5226, 0.5226)];

/// Clamp bounds for the R, G, and B channels
const RGB_RANGES: [(f64, f64); 3] = [(0.0, 1.0), (0.0, 1.0), (0.0, 1.0)];

/// Convert an RGB image to YIQ
///
/// Output ranges are Y in [0, 1], I in [-0.5957, 0.5957], and Q in
/// [-0.5226, 0.5226]; values outside are clamped, not reported.
pub fn rgb_to_yiq(image: &Array3<f64>) -> Array3<f64> {
    transform(image, &FORWARD, &YIQ_RANGES)
}

/// Convert a YIQ image back to RGB, clamping every channel to [0, 1]
pub fn yiq_to_rgb(image: &Array3<f64>) -> Array3<f64> {
    transform(image, &INVERSE, &RGB_RANGES)
}

fn transform(
    image: &Array3<f64>,
    matrix: &[[f64; 3]; 3],
    ranges: &[(f64, f64); 3],
) -> Array3<f64> {
    let (height, width, _) = image.dim();
    let mut converted = Array3::zeros((height, width, 3));

    for i in 0..height {
        for j in 0..width {
            for (channel, &(low, high)) in ranges.iter().enumerate() {
                let mut value = 0.0;
                for (input, row) in matrix.iter().enumerate() {
                    let sample = image.get((i, j, input)).copied().unwrap_or(0.0);
                    let coefficient = row.get(channel).copied().unwrap_or(0.0);
                    value = sample.mul_add(coefficient, value);
                }
                if let Some(slot) = converted.get_mut((i, j, channel)) {
                    *slot = value.clamp(low, high);
                }
            }
        }
    }

    converted
}
