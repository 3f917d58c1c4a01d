//! Input/output shell around the stereogram core

/// Command-line arguments and the load, generate, save pipeline
pub mod cli;
/// Default values and display constants
pub mod configuration;
/// Error types shared by every module
pub mod error;
/// Image decoding and encoding for depth maps, patterns and stereograms
pub mod image;
/// Row progress display
pub mod progress;
/// Grayscale depth previews
pub mod visualization;
