//! Sparse constraint assembly and the linear colorization solve

/// End-to-end colorization pipeline
pub mod colorize;
/// Iterative solution of the assembled sparse system
pub mod linear;
/// Sparse constraint system assembly
pub mod system;
