//! Spatial data structures for stereogram synthesis
//!
//! This module contains:
//! - Depth map, pattern and output grids
//! - Synthetic tile construction

/// Depth map, pattern and stereogram grid types
pub mod grid;
/// Random-dot tile generation and tile sizing
pub mod tiles;

pub use grid::{DepthMap, Pattern, Stereogram};
