//! Bounds-clipped square windows around a center pixel
//!
//! Windows shrink at the image border, so the covered range is re-derived for
//! every pixel rather than assuming a constant neighbor count.

use std::ops::Range;

/// Square window of a given radius around a center pixel, clipped to the
/// image bounds
#[derive(Debug, Clone)]
pub struct Neighborhood {
    center: (usize, usize),
    rows: Range<usize>,
    cols: Range<usize>,
}

impl Neighborhood {
    /// Build the window for `center` within a grid of `(height, width)`
    pub fn new(center: (usize, usize), radius: usize, dimensions: (usize, usize)) -> Self {
        let (height, width) = dimensions;
        let rows = center.0.saturating_sub(radius)..(center.0 + radius + 1).min(height);
        let cols = center.1.saturating_sub(radius)..(center.1 + radius + 1).min(width);

        Self { center, rows, cols }
    }

    /// Center pixel coordinates
    pub const fn center(&self) -> (usize, usize) {
        self.center
    }

    /// Row range covered by the window
    pub const fn rows(&self) -> Range<usize> {
        self.rows.start..self.rows.end
    }

    /// Column range covered by the window
    pub const fn cols(&self) -> Range<usize> {
        self.cols.start..self.cols.end
    }

    /// Number of pixels in the window, center included
    pub const fn pixel_count(&self) -> usize {
        (self.rows.end - self.rows.start) * (self.cols.end - self.cols.start)
    }

    /// Number of pixels in the window excluding the center
    pub const fn neighbor_count(&self) -> usize {
        self.pixel_count() - 1
    }

    /// Position of the center within row-major iteration over the window
    pub const fn center_offset(&self) -> usize {
        (self.center.0 - self.rows.start) * (self.cols.end - self.cols.start)
            + (self.center.1 - self.cols.start)
    }

    /// Row-major coordinates of every pixel in the window, center included
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols.clone();
        self.rows
            .clone()
            .flat_map(move |row| cols.clone().map(move |col| (row, col)))
    }
}
