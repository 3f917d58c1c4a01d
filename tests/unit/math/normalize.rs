//! Tests for depth range normalization and inversion

#[cfg(test)]
mod tests {
    use autostereogram::math::normalize::{invert, normalize, value_range};
    use ndarray::{Array2, array};

    // Tests non-constant input spans exactly [0, 1]
    #[test]
    fn test_normalize_spans_unit_range() {
        let depth: Array2<f64> = array![[3.0, 5.0, 7.0], [11.0, -1.0, 4.0]];

        let normalized = normalize(&depth);

        assert_eq!(value_range(&normalized), Some((0.0, 1.0)));
        assert!((normalized[(0, 0)] - 4.0 / 12.0).abs() < 1e-12);
    }

    // Tests normalizing twice gives the same grid as normalizing once
    #[test]
    fn test_normalize_is_idempotent() {
        let depth = Array2::from_shape_fn((9, 13), |(r, c)| ((r * 31 + c * 17) % 23) as f64 * 0.37);

        let once = normalize(&depth);
        let twice = normalize(&once);

        assert_eq!(once, twice);
    }

    // Tests constant input is returned unchanged
    #[test]
    fn test_normalize_leaves_constant_map_unchanged() {
        let depth = Array2::from_elem((4, 6), 0.5);

        assert_eq!(normalize(&depth), depth);
    }

    // Tests empty input yields no range and passes through
    #[test]
    fn test_empty_map_has_no_range() {
        let depth = Array2::<f64>::zeros((0, 3));

        assert_eq!(value_range(&depth), None);
        assert_eq!(normalize(&depth).dim(), (0, 3));
    }

    // Tests normalization is generic over f32
    #[test]
    fn test_normalize_f32() {
        let depth: Array2<f32> = array![[2.0, 4.0], [6.0, 10.0]];

        let normalized = normalize(&depth);

        assert_eq!(normalized, array![[0.0, 0.25], [0.5, 1.0]]);
    }

    // Tests inversion maps d to 1 - d
    #[test]
    fn test_invert_flips_depth() {
        let depth: Array2<f64> = array![[0.0, 0.25], [0.5, 1.0]];

        assert_eq!(invert(&depth), array![[1.0, 0.75], [0.5, 0.0]]);
    }
}
