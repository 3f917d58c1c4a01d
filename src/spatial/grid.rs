//! Depth map, pattern and stereogram grids
//!
//! Thin owners around `ndarray` arrays that enforce shape invariants at
//! construction so the generator can index without re-validating.

use ndarray::{Array2, Array3, ArrayView2, Axis};

use crate::io::error::{Result, degenerate_geometry, invalid_source};
use crate::math::normalize::{invert, normalize, value_range};
use crate::math::resample::{rescale, tile_scale};

/// Single-channel height field, one sample per output pixel
#[derive(Debug, Clone, PartialEq)]
pub struct DepthMap {
    values: Array2<f64>,
}

impl DepthMap {
    /// Wrap a grid of depth samples
    ///
    /// # Errors
    ///
    /// Returns an error if the grid has no samples or contains NaN or infinite values
    pub fn new(values: Array2<f64>) -> Result<Self> {
        let (rows, cols) = values.dim();
        if rows == 0 || cols == 0 {
            return Err(invalid_source(&format!(
                "depth map has no samples ({rows}x{cols})"
            )));
        }
        if let Some(((row, col), value)) = values.indexed_iter().find(|(_, v)| !v.is_finite()) {
            return Err(invalid_source(&format!(
                "depth sample at ({row}, {col}) is not finite: {value}"
            )));
        }
        Ok(Self { values })
    }

    /// Number of rows (output height)
    pub fn rows(&self) -> usize {
        self.values.nrows()
    }

    /// Number of columns (output width)
    pub fn cols(&self) -> usize {
        self.values.ncols()
    }

    /// Raw depth samples
    pub const fn values(&self) -> &Array2<f64> {
        &self.values
    }

    /// Smallest and largest sample
    pub fn range(&self) -> (f64, f64) {
        value_range(&self.values).unwrap_or((0.0, 0.0))
    }

    /// Copy rescaled to `[0, 1]`; constant maps are returned unchanged
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            values: normalize(&self.values),
        }
    }

    /// Copy with near and far swapped
    #[must_use]
    pub fn inverted(&self) -> Self {
        Self {
            values: invert(&self.values),
        }
    }
}

/// Tiling texture, shape `(rows, cols, channels)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    pixels: Array3<u8>,
}

impl Pattern {
    /// Wrap a pixel grid as a pattern
    ///
    /// # Errors
    ///
    /// Returns an error if any axis of the grid is empty
    pub fn new(pixels: Array3<u8>) -> Result<Self> {
        let (rows, cols, channels) = pixels.dim();
        if rows == 0 || cols == 0 || channels == 0 {
            return Err(degenerate_geometry(&format!(
                "pattern shape {rows}x{cols}x{channels} has an empty axis"
            )));
        }
        Ok(Self { pixels })
    }

    /// Number of rows before the pattern wraps vertically
    pub fn rows(&self) -> usize {
        self.pixels.dim().0
    }

    /// Width of one pattern repeat
    pub fn cols(&self) -> usize {
        self.pixels.dim().1
    }

    /// Channels per pixel
    pub fn channels(&self) -> usize {
        self.pixels.dim().2
    }

    /// Pixel grid
    pub const fn pixels(&self) -> &Array3<u8> {
        &self.pixels
    }

    /// Pattern row feeding output row `row`, wrapping vertically
    pub fn wrapped_row(&self, row: usize) -> ArrayView2<'_, u8> {
        self.pixels.index_axis(Axis(0), row % self.rows())
    }

    /// Shrink the pattern so it repeats `columns` times across its current width
    ///
    /// # Errors
    ///
    /// Returns an error if `columns` is zero or larger than the pattern width
    pub fn fit_to_columns(&self, columns: usize) -> Result<Self> {
        let factor = tile_scale(self.cols(), columns)?;
        Self::new(rescale(&self.pixels, factor)?)
    }
}

/// Generated stereogram, shape `(rows, cols, channels)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stereogram {
    pixels: Array3<u8>,
}

impl Stereogram {
    pub(crate) const fn from_pixels(pixels: Array3<u8>) -> Self {
        Self { pixels }
    }

    /// Output height
    pub fn rows(&self) -> usize {
        self.pixels.dim().0
    }

    /// Output width
    pub fn cols(&self) -> usize {
        self.pixels.dim().1
    }

    /// Channels per pixel, matching the pattern
    pub fn channels(&self) -> usize {
        self.pixels.dim().2
    }

    /// Pixel grid
    pub const fn pixels(&self) -> &Array3<u8> {
        &self.pixels
    }
}
