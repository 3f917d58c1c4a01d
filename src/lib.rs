//! Single-image stereogram synthesis from depth maps and tiling patterns
//!
//! Each output row repeats a narrow pattern tile from left to right. Past the
//! first tile, every pixel copies an earlier pixel of its row, displaced by a
//! shift proportional to the local depth, which the eyes decode as relief.

#![forbid(unsafe_code)]

/// Row-scan generation and shift policies
pub mod algorithm;
/// Depth statistics for diagnostics
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Depth normalization and pattern resampling
pub mod math;
/// Depth map, pattern and output grids
pub mod spatial;

pub use algorithm::generator::{StereogramConfig, autostereogram, autostereogram_with_progress};
pub use algorithm::shift::ShiftPolicy;
pub use io::error::{Result, StereogramError};
pub use math::normalize::normalize;
pub use spatial::{DepthMap, Pattern, Stereogram};
