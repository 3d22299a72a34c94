//! Scribble-guided colorization of greyscale images
//!
//! Propagates chrominance from user-marked pixels to the rest of the image
//! by solving a sparse linear system whose smoothness constraints follow
//! local luminance similarity, after Levin, Lischinski, and Weiss,
//! "Colorization Using Optimization" (2004).

#![forbid(unsafe_code)]

/// Luminance statistics and affinity weight computation
pub mod analysis;
/// Color space conversion and hint mask extraction
pub mod color;
/// Input/output operations and error handling
pub mod io;
/// Sparse constraint assembly and the linear colorization solve
pub mod solver;
/// Spatial windows over the pixel grid
pub mod spatial;

pub use io::error::{ColorizeError, Result};
pub use solver::colorize::{ColorizeOptions, colorize};
