//! End-to-end colorization pipeline
//!
//! Build once, solve twice: the constraint matrix is assembled a single time
//! from the mask and the grey image's luma, then reused for the I and Q
//! channel solves so both channels see identical geometry.

use crate::color::mask::hint_mask;
use crate::color::yiq::{rgb_to_yiq, yiq_to_rgb};
use crate::io::configuration::DEFAULT_NEIGHBOR_RADIUS;
use crate::io::error::{ColorizeError, Result};
use crate::solver::linear::{SolverOptions, solve};
use crate::solver::system::{assemble, channel_rhs};
use ndarray::{Array2, Array3, Axis};

/// Settings for a colorize run
#[derive(Debug, Clone, Copy)]
pub struct ColorizeOptions {
    /// Neighborhood radius for the smoothness constraints
    pub radius: usize,
    /// Convergence settings passed to both channel solves
    pub solver: SolverOptions,
}

impl Default for ColorizeOptions {
    fn default() -> Self {
        Self {
            radius: DEFAULT_NEIGHBOR_RADIUS,
            solver: SolverOptions::default(),
        }
    }
}

/// Colorize a greyscale image from the hints in `marked`
///
/// Both images are (height, width, 3) arrays with samples in [0, 1]. The
/// result keeps the grey image's luminance and carries chrominance
/// propagated outward from the marked pixels, converted back to RGB. The
/// call holds no state; every invocation assembles and discards its own
/// system.
///
/// # Errors
///
/// Returns `DimensionMismatch` when the images disagree in shape and
/// propagates solver failures when a channel solve breaks down or fails to
/// converge.
pub fn colorize(
    grey: &Array3<f64>,
    marked: &Array3<f64>,
    options: ColorizeOptions,
) -> Result<Array3<f64>> {
    if grey.dim() != marked.dim() || grey.dim().2 != 3 {
        return Err(ColorizeError::DimensionMismatch {
            grey: grey.dim(),
            marked: marked.dim(),
        });
    }

    let mask = hint_mask(grey, marked);
    let grey_yiq = rgb_to_yiq(grey);
    let marked_yiq = rgb_to_yiq(marked);

    let luma = grey_yiq.index_axis(Axis(2), 0).to_owned();
    let chroma_i = marked_yiq.index_axis(Axis(2), 1).to_owned();
    let chroma_q = marked_yiq.index_axis(Axis(2), 2).to_owned();

    let system = assemble(&mask, &luma, options.radius);
    let solved_i = solve(&system.matrix, &channel_rhs(&mask, &chroma_i), options.solver)?;
    let solved_q = solve(&system.matrix, &channel_rhs(&mask, &chroma_q), options.solver)?;

    let result = recombine(&luma, &solved_i, &solved_q);
    Ok(yiq_to_rgb(&result))
}

// Reassembles the YIQ planes into a (height, width, 3) image
fn recombine(luma: &Array2<f64>, chroma_i: &[f64], chroma_q: &[f64]) -> Array3<f64> {
    let (height, width) = luma.dim();
    let mut result = Array3::zeros((height, width, 3));

    for i in 0..height {
        for j in 0..width {
            let flat = i * width + j;
            let channels = [
                luma.get((i, j)).copied().unwrap_or(0.0),
                chroma_i.get(flat).copied().unwrap_or(0.0),
                chroma_q.get(flat).copied().unwrap_or(0.0),
            ];
            for (channel, &value) in channels.iter().enumerate() {
                if let Some(slot) = result.get_mut((i, j, channel)) {
                    *slot = value;
                }
            }
        }
    }

    result
}
