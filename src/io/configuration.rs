//! Algorithm constants and runtime configuration defaults

// Constants from the published colorization method
/// Minimum summed per-channel difference for a pixel to count as a color hint
pub const MASK_THRESHOLD: f64 = 0.01;

/// Scale factor applied to neighborhood luma variance when deriving sigma
pub const SIGMA_SCALE: f64 = 0.6;

// Keeps flat neighborhoods from collapsing the weight kernel
/// Lower bound on sigma
pub const SIGMA_FLOOR: f64 = 2e-6;

/// Default neighborhood radius (radius 1 gives a 3x3 window)
pub const DEFAULT_NEIGHBOR_RADIUS: usize = 1;

// Solver settings
/// Relative residual at which a channel solve is accepted
pub const SOLVER_TOLERANCE: f64 = 1e-10;

/// Default iteration cap for a single channel solve
pub const DEFAULT_SOLVER_MAX_ITERATIONS: usize = 20_000;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_result";

/// Suffix identifying the companion hint image for a grey input
pub const MARKED_SUFFIX: &str = "_marked";
