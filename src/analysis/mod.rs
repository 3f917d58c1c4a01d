//! Depth map analysis reported alongside generation

/// Depth histograms and summary statistics
pub mod statistics;
