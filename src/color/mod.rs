//! Color space conversion and hint mask extraction

/// Hint mask derivation from a grey/marked image pair
pub mod mask;
/// RGB to YIQ conversion and back with fixed clamping ranges
pub mod yiq;
