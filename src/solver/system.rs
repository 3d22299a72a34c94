//! Sparse constraint system assembly
//!
//! One row per pixel in row-major order: marked pixels get an identity
//! constraint that pins them to their hinted chroma, unmarked pixels a
//! smoothness constraint tying them to the weighted average of their
//! neighbors. Entries are accumulated as triplets and converted to
//! compressed-row storage in one step.

use crate::analysis::weights::affinity_weights;
use crate::spatial::Neighborhood;
use ndarray::Array2;
use sprs::{CsMat, TriMat};

/// Assembled constraint system, shared by both chrominance solves
#[derive(Debug)]
pub struct SparseSystem {
    /// Square constraint matrix with one row and one column per pixel
    pub matrix: CsMat<f64>,
    /// Image dimensions (height, width) the system was built for
    pub dimensions: (usize, usize),
}

impl SparseSystem {
    /// Number of rows, equal to the pixel count
    pub fn rows(&self) -> usize {
        self.matrix.rows()
    }
}

/// Build the constraint matrix for the given mask and luma plane
///
/// Every pixel contributes exactly one row and the diagonal entry is always
/// exactly 1, so the matrix is square regardless of image content. An
/// unmarked pixel whose window holds no neighbors (radius 0, or a 1x1 image)
/// degrades to a bare identity row, pinning its chroma to the zero
/// right-hand side instead of dividing by an empty weight sum.
pub fn assemble(mask: &Array2<bool>, luma: &Array2<f64>, radius: usize) -> SparseSystem {
    let (height, width) = luma.dim();
    let pixel_count = height * width;
    let window_capacity = (2 * radius + 1).pow(2);

    let mut triplets = TriMat::with_capacity(
        (pixel_count, pixel_count),
        pixel_count * window_capacity,
    );

    for i in 0..height {
        for j in 0..width {
            let row = i * width + j;
            let marked = mask.get((i, j)).copied().unwrap_or(false);

            if !marked {
                let window = Neighborhood::new((i, j), radius, (height, width));
                let window_luma: Vec<f64> = window
                    .positions()
                    .map(|(wi, wj)| luma.get((wi, wj)).copied().unwrap_or(0.0))
                    .collect();
                let weights = affinity_weights(&window_luma, window.center_offset());

                let neighbors = window.positions().filter(|&position| position != (i, j));
                for ((ni, nj), weight) in neighbors.zip(weights) {
                    triplets.add_triplet(row, ni * width + nj, -weight);
                }
            }

            // Diagonal entry for the current pixel, always exactly 1
            triplets.add_triplet(row, row, 1.0);
        }
    }

    SparseSystem {
        matrix: triplets.to_csr(),
        dimensions: (height, width),
    }
}

/// Right-hand side for one chrominance channel
///
/// Marked pixels carry the marked image's channel value; every other entry
/// is 0, matching the homogeneous smoothness rows.
pub fn channel_rhs(mask: &Array2<bool>, channel: &Array2<f64>) -> Vec<f64> {
    mask.iter()
        .zip(channel.iter())
        .map(|(&marked, &value)| if marked { value } else { 0.0 })
        .collect()
}
