//! Error types for colorization operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all colorization operations
#[derive(Debug)]
pub enum ColorizeError {
    /// Failed to load an input image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save the colorized image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Grey and marked images disagree in shape
    ///
    /// Checked before any processing; the pipeline never runs on mismatched
    /// inputs.
    DimensionMismatch {
        /// Dimensions of the grey image (height, width, channels)
        grey: (usize, usize, usize),
        /// Dimensions of the marked image (height, width, channels)
        marked: (usize, usize, usize),
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// The iterative solve hit a numerical breakdown
    ///
    /// Occurs when the constraint system is singular or so ill-conditioned
    /// that a search direction degenerates.
    SolverBreakdown {
        /// Solver step at which the breakdown occurred
        operation: &'static str,
    },

    /// The iterative solve exhausted its iteration cap
    SolverDiverged {
        /// Number of iterations performed
        iterations: usize,
        /// Relative residual at the point of giving up
        residual: f64,
    },

    /// Numerical computation produced an invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for ColorizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::DimensionMismatch { grey, marked } => {
                write!(
                    f,
                    "Grey image is {}x{}x{} but marked image is {}x{}x{}",
                    grey.0, grey.1, grey.2, marked.0, marked.1, marked.2
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::SolverBreakdown { operation } => {
                write!(
                    f,
                    "Sparse solve broke down during {operation}; the constraint system is singular or degenerate"
                )
            }
            Self::SolverDiverged {
                iterations,
                residual,
            } => {
                write!(
                    f,
                    "Sparse solve failed to converge after {iterations} iterations (relative residual {residual:e})"
                )
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for ColorizeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for colorization results
pub type Result<T> = std::result::Result<T, ColorizeError>;

impl From<image::ImageError> for ColorizeError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for ColorizeError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> ColorizeError {
    ColorizeError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> ColorizeError {
    ColorizeError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
