/// Row-scan stereogram generation and its configuration
pub mod generator;
/// Depth-to-shift conversion and out-of-range shift handling
pub mod shift;
