//! Depth map statistics for diagnostics
//!
//! Binning follows the common equal-width convention: `bins` intervals over
//! `[min, max]`, each half-open except the last, which also includes `max`.
//! A constant map is binned over `[v - 0.5, v + 0.5]`.

use std::fmt;

use ndarray::Array2;

use crate::io::error::{Result, invalid_parameter, invalid_source};
use crate::math::normalize::value_range;

/// Equal-width histogram of depth samples
#[derive(Debug, Clone, PartialEq)]
pub struct DepthHistogram {
    /// Bin edges, one more than the number of bins
    pub edges: Vec<f64>,
    /// Sample count per bin
    pub counts: Vec<usize>,
}

impl DepthHistogram {
    /// Bin every sample of `values` into `bins` equal-width intervals
    ///
    /// # Errors
    ///
    /// Returns an error if `bins` is zero or `values` is empty
    pub fn from_values(values: &Array2<f64>, bins: usize) -> Result<Self> {
        if bins == 0 {
            return Err(invalid_parameter("bins", &bins, &"must be positive"));
        }
        let (lo, hi) = match value_range(values) {
            Some((lo, hi)) if hi > lo => (lo, hi),
            Some((v, _)) => (v - 0.5, v + 0.5),
            None => return Err(invalid_source(&"cannot bin an empty depth map")),
        };

        let width = (hi - lo) / bins as f64;
        let edges = (0..=bins)
            .map(|i| if i == bins { hi } else { (i as f64).mul_add(width, lo) })
            .collect();

        let mut counts = vec![0; bins];
        for &v in values {
            let bin = (((v - lo) / width) as usize).min(bins - 1);
            if let Some(count) = counts.get_mut(bin) {
                *count += 1;
            }
        }

        Ok(Self { edges, counts })
    }

    /// Total number of binned samples
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

impl fmt::Display for DepthHistogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let peak = self.counts.iter().copied().max().unwrap_or(0).max(1);
        for (i, count) in self.counts.iter().enumerate() {
            let lo = self.edges.get(i).copied().unwrap_or(f64::NAN);
            let hi = self.edges.get(i + 1).copied().unwrap_or(f64::NAN);
            let bar = "#".repeat(count * 40 / peak);
            writeln!(f, "[{lo:>7.3}, {hi:>7.3}) {count:>8} {bar}")?;
        }
        Ok(())
    }
}

/// Minimum, maximum and mean of a depth map
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthSummary {
    /// Smallest sample
    pub min: f64,
    /// Largest sample
    pub max: f64,
    /// Arithmetic mean of all samples
    pub mean: f64,
}

impl DepthSummary {
    /// Summarize `values`, or `None` when empty
    pub fn from_values(values: &Array2<f64>) -> Option<Self> {
        let (min, max) = value_range(values)?;
        let mean = values.mean()?;
        Some(Self { min, max, mean })
    }
}
