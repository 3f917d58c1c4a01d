//! Depth range normalization
//!
//! Maps raw depth samples onto the canonical `[0, 1]` range consumed by the
//! stereogram generator. Constant maps pass through untouched so no division
//! by zero can occur.

use ndarray::Array2;
use num_traits::Float;

/// Minimum and maximum of a grid, or `None` when the grid is empty
pub fn value_range<T: Float>(values: &Array2<T>) -> Option<(T, T)> {
    let mut iter = values.iter().copied();
    let first = iter.next()?;
    Some(iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
}

/// Rescale values to `[0, 1]` using the grid's own minimum and maximum
///
/// Returns an unchanged copy when the grid is empty or constant.
pub fn normalize<T: Float>(values: &Array2<T>) -> Array2<T> {
    match value_range(values) {
        Some((lo, hi)) if hi > lo => {
            let span = hi - lo;
            values.mapv(|v| (v - lo) / span)
        }
        _ => values.clone(),
    }
}

/// Flip near and far: every sample `d` becomes `1 - d`
pub fn invert<T: Float>(values: &Array2<T>) -> Array2<T> {
    values.mapv(|v| T::one() - v)
}
