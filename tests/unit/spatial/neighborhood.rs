//! Tests for bounds-clipped neighborhood windows

use chromafill::spatial::Neighborhood;

#[test]
fn test_interior_window_is_full_size() {
    let window = Neighborhood::new((2, 2), 1, (5, 5));

    assert_eq!(window.pixel_count(), 9);
    assert_eq!(window.neighbor_count(), 8);
    assert_eq!(window.rows(), 1..4);
    assert_eq!(window.cols(), 1..4);
    assert_eq!(window.center_offset(), 4);
}

#[test]
fn test_corner_window_is_clipped() {
    let window = Neighborhood::new((0, 0), 1, (5, 5));

    assert_eq!(window.pixel_count(), 4);
    assert_eq!(window.center_offset(), 0);

    let positions: Vec<_> = window.positions().collect();
    assert_eq!(positions, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
}

#[test]
fn test_edge_window_is_clipped_on_one_side() {
    let window = Neighborhood::new((0, 2), 1, (5, 5));

    assert_eq!(window.pixel_count(), 6);
    assert_eq!(window.center_offset(), 1);
    assert_eq!(window.rows(), 0..2);
    assert_eq!(window.cols(), 1..4);
}

#[test]
fn test_far_corner_window_is_clipped() {
    let window = Neighborhood::new((4, 4), 1, (5, 5));

    assert_eq!(window.pixel_count(), 4);
    assert_eq!(window.center_offset(), 3);
}

#[test]
fn test_radius_zero_holds_only_center() {
    let window = Neighborhood::new((3, 3), 0, (5, 5));

    assert_eq!(window.pixel_count(), 1);
    assert_eq!(window.neighbor_count(), 0);
}

#[test]
fn test_large_radius_covers_whole_grid() {
    let window = Neighborhood::new((1, 1), 10, (3, 4));

    assert_eq!(window.rows(), 0..3);
    assert_eq!(window.cols(), 0..4);
    assert_eq!(window.pixel_count(), 12);
}

#[test]
fn test_positions_are_row_major_and_include_center() {
    let window = Neighborhood::new((1, 1), 1, (3, 3));
    let positions: Vec<_> = window.positions().collect();

    assert_eq!(positions.len(), 9);
    assert_eq!(positions[0], (0, 0));
    assert_eq!(positions[window.center_offset()], (1, 1));
    assert_eq!(positions[8], (2, 2));
}
