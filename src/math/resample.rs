//! Nearest-neighbour resampling for tiling patterns
//!
//! The generator needs a pattern narrow enough to repeat several times across
//! the output. [`tile_scale`] picks the factor that shrinks a pattern to
//! `floor(width / columns)` pixels, and [`rescale`] applies it.

use crate::io::error::{Result, degenerate_geometry, invalid_parameter};
use ndarray::{Array3, Axis};

// Guards `floor(len * factor)` against results like 41.999999 for an exact 42
const SCALE_EPSILON: f64 = 1e-9;

/// Scale factor that makes a pattern of `pattern_width` tile `columns` times
///
/// # Errors
///
/// Returns an error if `columns` is zero or exceeds the pattern width, since
/// the resampled width would collapse to zero
pub fn tile_scale(pattern_width: usize, columns: usize) -> Result<f64> {
    if columns == 0 {
        return Err(degenerate_geometry(&"tiling columns must be positive"));
    }
    let tile_width = pattern_width / columns;
    if tile_width == 0 {
        return Err(degenerate_geometry(&format!(
            "pattern width {pattern_width} cannot be split into {columns} columns"
        )));
    }
    Ok(tile_width as f64 / pattern_width as f64)
}

/// Output length of an axis of `len` samples scaled by `factor`
pub fn scaled_len(len: usize, factor: f64) -> usize {
    (len as f64).mul_add(factor, SCALE_EPSILON).floor() as usize
}

/// Rescale an image grid by `factor` with nearest-neighbour sampling
///
/// Output pixel `(r, c)` copies input pixel `(floor(r / factor), floor(c / factor))`.
/// The channel axis is left untouched.
///
/// # Errors
///
/// Returns an error if:
/// - `factor` is not a finite positive number
/// - The scaled image would have zero rows or columns
pub fn rescale<T: Clone>(pixels: &Array3<T>, factor: f64) -> Result<Array3<T>> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(invalid_parameter(
            "factor",
            &factor,
            &"must be a finite positive number",
        ));
    }

    let (rows, cols, _) = pixels.dim();
    let new_rows = scaled_len(rows, factor);
    let new_cols = scaled_len(cols, factor);
    if new_rows == 0 || new_cols == 0 {
        return Err(degenerate_geometry(&format!(
            "rescaling {rows}x{cols} by {factor} leaves no pixels"
        )));
    }

    let source_indices = |new_len: usize, len: usize| -> Vec<usize> {
        (0..new_len)
            .map(|i| ((i as f64 / factor) as usize).min(len - 1))
            .collect()
    };

    Ok(pixels
        .select(Axis(0), &source_indices(new_rows, rows))
        .select(Axis(1), &source_indices(new_cols, cols)))
}
