//! Synthetic pattern tiles
//!
//! Random-dot tiles are the classic carrier for single-image random-dot
//! stereograms and let the pipeline run without a pattern image.

use ndarray::{Array3, Axis};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::io::error::{Result, degenerate_geometry, invalid_parameter};
use crate::spatial::grid::Pattern;

/// Width of one tile when `columns` repeats span `output_width` pixels
///
/// # Errors
///
/// Returns an error if `columns` is zero or the resulting width is zero
pub fn tile_width_for(output_width: usize, columns: usize) -> Result<usize> {
    if columns == 0 {
        return Err(degenerate_geometry(&"tiling columns must be positive"));
    }
    match output_width / columns {
        0 => Err(degenerate_geometry(&format!(
            "output width {output_width} cannot hold {columns} columns"
        ))),
        width => Ok(width),
    }
}

/// Seeded black and white noise tile
///
/// Every color channel of a pixel shares one value so dots stay achromatic.
/// With 2 or 4 channels the last channel is alpha and always opaque.
///
/// # Errors
///
/// Returns an error if:
/// - `density` is outside `[0, 1]`
/// - Any dimension is zero
pub fn random_dot_tile(
    rows: usize,
    cols: usize,
    channels: usize,
    density: f64,
    seed: u64,
) -> Result<Pattern> {
    if !(0.0..=1.0).contains(&density) {
        return Err(invalid_parameter(
            "density",
            &density,
            &"must be within [0, 1]",
        ));
    }

    let alpha_index = (channels == 2 || channels == 4).then(|| channels - 1);
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pixels = Array3::zeros((rows, cols, channels));

    for mut pixel in pixels.lanes_mut(Axis(2)) {
        let value = if rng.random_bool(density) { u8::MAX } else { 0 };
        pixel.fill(value);
        if let Some(alpha) = alpha_index.and_then(|i| pixel.get_mut(i)) {
            *alpha = u8::MAX;
        }
    }

    Pattern::new(pixels)
}
