//! Tests for affinity weight computation

use chromafill::analysis::weights::affinity_weights;

// A zero-variance window exercises the sigma floor; weights must come out
// uniform rather than NaN
#[test]
fn test_uniform_window_gives_equal_weights() {
    let window = [0.5; 9];
    let weights = affinity_weights(&window, 4);

    assert_eq!(weights.len(), 8);
    for &weight in &weights {
        assert!((weight - 0.125).abs() < 1e-12);
    }
}

#[test]
fn test_weights_are_normalized_and_non_negative() {
    let window = [0.1, 0.4, 0.35, 0.6, 0.5, 0.45, 0.9, 0.2, 0.55];
    let weights = affinity_weights(&window, 4);

    assert_eq!(weights.len(), 8);
    let total: f64 = weights.iter().sum();
    assert!((total - 1.0).abs() < 1e-12);
    assert!(weights.iter().all(|&weight| weight >= 0.0));
}

#[test]
fn test_closer_luma_weighs_more() {
    // Center luma 0.5: the 0.52 neighbor is a better match than the 0.9 one
    let window = [0.52, 0.5, 0.9];
    let weights = affinity_weights(&window, 1);

    assert_eq!(weights.len(), 2);
    assert!(weights[0] > weights[1]);
}

#[test]
fn test_single_pixel_window_yields_no_weights() {
    let weights = affinity_weights(&[0.5], 0);
    assert!(weights.is_empty());
}

#[test]
fn test_single_neighbor_gets_full_weight() {
    let weights = affinity_weights(&[0.3, 0.8], 0);

    assert_eq!(weights.len(), 1);
    assert!((weights[0] - 1.0).abs() < 1e-12);
}
