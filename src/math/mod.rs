//! Numeric utilities for depth preparation and pattern resampling

/// Depth range normalization and inversion
pub mod normalize;
/// Nearest-neighbour pattern resampling and tile scale computation
pub mod resample;
