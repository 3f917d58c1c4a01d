//! Single-image stereogram generation
//!
//! Every output row is an independent left-to-right scan. The first
//! `tile_width` cells copy the vertically wrapped pattern row; every later
//! cell copies an earlier cell of the same row, displaced by a shift
//! proportional to the local depth. Rows can be scanned in parallel because
//! no state crosses them.

use indicatif::ProgressBar;
use ndarray::parallel::prelude::*;
use ndarray::{Array3, ArrayView1, ArrayViewMut2, Axis};

use crate::algorithm::shift::{ShiftPlan, ShiftPolicy};
use crate::io::configuration::DEFAULT_SHIFT_AMPLITUDE;
use crate::io::error::Result;
use crate::spatial::grid::{DepthMap, Pattern, Stereogram};

/// Parameters controlling how depth is turned into pattern displacement
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StereogramConfig {
    /// Shift at full depth, as a fraction of the tile width
    pub shift_amplitude: f64,
    /// Swap near and far before encoding
    pub invert: bool,
    /// Handling of shifts outside the tile window
    pub shift_policy: ShiftPolicy,
    /// Scan rows on the rayon thread pool
    pub parallel: bool,
}

impl Default for StereogramConfig {
    fn default() -> Self {
        Self {
            shift_amplitude: DEFAULT_SHIFT_AMPLITUDE,
            invert: false,
            shift_policy: ShiftPolicy::default(),
            parallel: true,
        }
    }
}

/// Build a stereogram from a depth map and a pattern tile
///
/// The depth map is normalized to `[0, 1]` (and inverted when requested)
/// before use. The output has the depth map's rows and columns and the
/// pattern's channels.
///
/// # Errors
///
/// Returns an error if the shift amplitude is rejected by the configured
/// policy, or a computed shift leaves the tile window under
/// [`ShiftPolicy::Reject`]
pub fn autostereogram(
    depth: &DepthMap,
    pattern: &Pattern,
    config: &StereogramConfig,
) -> Result<Stereogram> {
    autostereogram_with_progress(depth, pattern, config, None)
}

/// [`autostereogram`] that ticks `progress` once per finished row
///
/// # Errors
///
/// Same conditions as [`autostereogram`]
pub fn autostereogram_with_progress(
    depth: &DepthMap,
    pattern: &Pattern,
    config: &StereogramConfig,
    progress: Option<&ProgressBar>,
) -> Result<Stereogram> {
    let plan = ShiftPlan::new(config.shift_amplitude, pattern.cols(), config.shift_policy)?;
    let (raw_min, raw_max) = depth.range();

    let mut depth = depth.normalized();
    if config.invert {
        depth = depth.inverted();
    }

    let (rows, cols) = (depth.rows(), depth.cols());
    if pattern.cols() >= cols {
        log::warn!(
            "Pattern width {} covers the output width {cols}; no depth will be encoded",
            pattern.cols()
        );
    }
    log::debug!(
        "Generating {rows}x{cols} stereogram from {}x{}x{} tile (shift {}, {:?}, raw depth [{raw_min}, {raw_max}])",
        pattern.rows(),
        pattern.cols(),
        pattern.channels(),
        config.shift_amplitude,
        config.shift_policy
    );

    let mut pixels = Array3::zeros((rows, cols, pattern.channels()));
    let depth_rows = depth.values().axis_iter(Axis(0));

    if config.parallel {
        pixels
            .axis_iter_mut(Axis(0))
            .into_par_iter()
            .zip(depth_rows.into_par_iter())
            .enumerate()
            .try_for_each(|(row, (out, samples))| {
                scan_row(row, out, samples, pattern, &plan, progress)
            })?;
    } else {
        pixels
            .axis_iter_mut(Axis(0))
            .zip(depth_rows)
            .enumerate()
            .try_for_each(|(row, (out, samples))| {
                scan_row(row, out, samples, pattern, &plan, progress)
            })?;
    }

    Ok(Stereogram::from_pixels(pixels))
}

// Fills one output row strictly left to right; cells before `col` are final
fn scan_row(
    row: usize,
    mut out: ArrayViewMut2<'_, u8>,
    samples: ArrayView1<'_, f64>,
    pattern: &Pattern,
    plan: &ShiftPlan,
    progress: Option<&ProgressBar>,
) -> Result<()> {
    let base = pattern.wrapped_row(row);
    let tile_width = plan.tile_width();

    for (col, &sample) in samples.iter().enumerate() {
        if col < tile_width {
            out.row_mut(col).assign(&base.row(col));
        } else {
            let source = plan.source_column(sample, row, col)?;
            let (written, mut pending) = out.view_mut().split_at(Axis(0), col);
            pending.row_mut(0).assign(&written.row(source));
        }
    }

    if let Some(bar) = progress {
        bar.inc(1);
    }
    Ok(())
}
