//! PNG load and save between disk and normalized float arrays

use crate::io::error::{ColorizeError, Result};
use image::{ImageBuffer, Rgb};
use ndarray::Array3;
use std::path::Path;

/// Load an image as a (height, width, 3) array of samples in [0, 1]
///
/// Alpha and palette formats are flattened to 8-bit RGB before conversion.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or is not a decodable
/// image.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<Array3<f64>> {
    let path_buf = path.as_ref().to_path_buf();
    let img = image::open(&path_buf).map_err(|e| ColorizeError::ImageLoad {
        path: path_buf,
        source: e,
    })?;
    let rgb_img = img.to_rgb8();

    let (width, height) = (rgb_img.width() as usize, rgb_img.height() as usize);
    let mut samples = Array3::zeros((height, width, 3));

    for (x, y, pixel) in rgb_img.enumerate_pixels() {
        for (channel, &value) in pixel.0.iter().enumerate() {
            if let Some(sample) = samples.get_mut((y as usize, x as usize, channel)) {
                *sample = f64::from(value) / 255.0;
            }
        }
    }

    Ok(samples)
}

/// Save a (height, width, 3) array of [0, 1] samples as an 8-bit PNG
///
/// Values are clamped to [0, 1] before quantization. A missing parent
/// directory is created.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the image
/// cannot be written to the given path.
pub fn save_image<P: AsRef<Path>>(samples: &Array3<f64>, path: P) -> Result<()> {
    let (height, width, _) = samples.dim();
    let mut img: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::new(width as u32, height as u32);

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let mut channels = [0u8; 3];
        for (channel, slot) in channels.iter_mut().enumerate() {
            let value = samples
                .get((y as usize, x as usize, channel))
                .copied()
                .unwrap_or(0.0);
            *slot = (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        }
        *pixel = Rgb(channels);
    }

    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| ColorizeError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    img.save(path).map_err(|e| ColorizeError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
