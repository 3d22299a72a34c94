//! Tests for YIQ conversion and its clamping ranges

use chromafill::color::yiq::{rgb_to_yiq, yiq_to_rgb};
use ndarray::Array3;

fn single_pixel(values: [f64; 3]) -> Array3<f64> {
    let mut image = Array3::zeros((1, 1, 3));
    for (channel, &value) in values.iter().enumerate() {
        image[[0, 0, channel]] = value;
    }
    image
}

#[test]
fn test_white_maps_to_pure_luma() {
    let yiq = rgb_to_yiq(&single_pixel([1.0, 1.0, 1.0]));

    assert!((yiq[[0, 0, 0]] - 1.0).abs() < 1e-12);
    assert!(yiq[[0, 0, 1]].abs() < 1e-12);
    assert!(yiq[[0, 0, 2]].abs() < 1e-12);
}

#[test]
fn test_black_maps_to_zero() {
    let yiq = rgb_to_yiq(&single_pixel([0.0, 0.0, 0.0]));

    for channel in 0..3 {
        assert_eq!(yiq[[0, 0, channel]], 0.0);
    }
}

#[test]
fn test_pure_red_chroma_is_clamped_to_range() {
    let yiq = rgb_to_yiq(&single_pixel([1.0, 0.0, 0.0]));

    assert!((yiq[[0, 0, 0]] - 0.299).abs() < 1e-12);
    // The raw I coefficient for red is 0.595716, just past the fixed bound
    assert!((yiq[[0, 0, 1]] - 0.5957).abs() < 1e-12);
    assert!((yiq[[0, 0, 2]] - 0.211_456).abs() < 1e-12);
}

#[test]
fn test_round_trip_preserves_in_gamut_colors() {
    // The published matrices invert each other to about four decimal places
    let original = single_pixel([0.55, 0.4, 0.3]);
    let restored = yiq_to_rgb(&rgb_to_yiq(&original));

    for channel in 0..3 {
        assert!((restored[[0, 0, channel]] - original[[0, 0, channel]]).abs() < 1e-4);
    }
}

#[test]
fn test_inverse_clamps_rgb_to_unit_range() {
    // Strong positive I at high luma pushes red past 1 before clamping
    let bright = yiq_to_rgb(&single_pixel([0.9, 0.5, 0.0]));
    assert_eq!(bright[[0, 0, 0]], 1.0);

    // Strong negative I at low luma pushes red below 0
    let dark = yiq_to_rgb(&single_pixel([0.1, -0.5, 0.0]));
    assert_eq!(dark[[0, 0, 0]], 0.0);
}

#[test]
fn test_neutral_grey_has_no_chroma() {
    let yiq = rgb_to_yiq(&single_pixel([0.42, 0.42, 0.42]));

    assert!((yiq[[0, 0, 0]] - 0.42).abs() < 1e-12);
    assert!(yiq[[0, 0, 1]].abs() < 1e-12);
    assert!(yiq[[0, 0, 2]].abs() < 1e-12);
}
