//! Hint mask derivation from a grey/marked image pair

use crate::io::configuration::MASK_THRESHOLD;
use ndarray::{Array2, Array3};

/// Marked-pixel mask: true where the marked image deviates from the grey one
///
/// A pixel counts as a hint when the sum of absolute per-channel differences
/// exceeds the fixed threshold, so lossless copies of the grey image leave
/// the mask empty. Both images must share dimensions; the orchestrator
/// validates this before calling.
pub fn hint_mask(grey: &Array3<f64>, marked: &Array3<f64>) -> Array2<bool> {
    let (height, width, channels) = grey.dim();
    let mut mask = Array2::from_elem((height, width), false);

    for i in 0..height {
        for j in 0..width {
            let mut difference = 0.0;
            for channel in 0..channels {
                let grey_sample = grey.get((i, j, channel)).copied().unwrap_or(0.0);
                let marked_sample = marked.get((i, j, channel)).copied().unwrap_or(0.0);
                difference += (grey_sample - marked_sample).abs();
            }

            if difference > MASK_THRESHOLD {
                if let Some(flag) = mask.get_mut((i, j)) {
                    *flag = true;
                }
            }
        }
    }

    mask
}
