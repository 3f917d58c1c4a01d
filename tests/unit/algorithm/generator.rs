//! Tests for row-scan stereogram generation

#[cfg(test)]
mod tests {
    use autostereogram::algorithm::generator::{StereogramConfig, autostereogram};
    use autostereogram::algorithm::shift::ShiftPolicy;
    use autostereogram::spatial::grid::{DepthMap, Pattern, Stereogram};
    use autostereogram::StereogramError;
    use ndarray::{Array2, Array3, array};

    // Pattern whose pixel value encodes (row, col) so copies are traceable
    fn traced_pattern(rows: usize, cols: usize) -> Pattern {
        Pattern::new(Array3::from_shape_fn((rows, cols, 1), |(r, c, _)| {
            (r * 16 + c + 1) as u8
        }))
        .expect("valid pattern")
    }

    fn gradient_depth(rows: usize, cols: usize) -> DepthMap {
        DepthMap::new(Array2::from_shape_fn((rows, cols), |(r, c)| {
            ((r * 7 + c * 3) % 11) as f64
        }))
        .expect("valid depth")
    }

    fn config(shift_amplitude: f64) -> StereogramConfig {
        StereogramConfig {
            shift_amplitude,
            ..StereogramConfig::default()
        }
    }

    fn pixel(out: &Stereogram, row: usize, col: usize) -> u8 {
        out.pixels()[(row, col, 0)]
    }

    // Tests the first tile of every row copies the vertically wrapped pattern
    #[test]
    fn test_base_tile_copies_wrapped_pattern() {
        let pattern = traced_pattern(3, 4);
        let depth = gradient_depth(7, 20);

        let out = autostereogram(&depth, &pattern, &config(0.5)).expect("generation succeeds");

        for r in 0..7 {
            for c in 0..4 {
                assert_eq!(
                    out.pixels()[(r, c, 0)],
                    pattern.pixels()[(r % 3, c, 0)],
                    "base tile mismatch at ({r}, {c})"
                );
            }
        }
    }

    // Tests output shape takes rows and columns from depth, channels from pattern
    #[test]
    fn test_output_shape_follows_depth_and_pattern() {
        let pattern = Pattern::new(Array3::from_elem((5, 4, 3), 9u8)).expect("valid pattern");
        let depth = gradient_depth(6, 13);

        let out = autostereogram(&depth, &pattern, &StereogramConfig::default())
            .expect("generation succeeds");

        assert_eq!(out.pixels().dim(), (6, 13, 3));
        assert_eq!((out.rows(), out.cols(), out.channels()), (6, 13, 3));
    }

    // Tests a zero amplitude repeats the base tile with period equal to its width
    #[test]
    fn test_zero_amplitude_tiles_pattern_exactly() {
        let pattern = traced_pattern(2, 5);
        let depth = gradient_depth(4, 23);

        let out = autostereogram(&depth, &pattern, &config(0.0)).expect("generation succeeds");

        for r in 0..4 {
            for c in 0..23 {
                assert_eq!(pixel(&out, r, c), pixel(&out, r, c % 5));
            }
        }
    }

    // Tests a hand-computed row where full depth shifts the source by one column
    #[test]
    fn test_full_depth_shifts_source_column() {
        let pattern = Pattern::new(array![[[10u8], [20]]]).expect("valid pattern");
        let depth = DepthMap::new(array![[0.0, 0.0, 0.0, 0.0, 1.0, 1.0]]).expect("valid depth");

        let out = autostereogram(&depth, &pattern, &config(0.5)).expect("generation succeeds");

        let row: Vec<u8> = out.pixels().iter().copied().collect();
        assert_eq!(row, vec![10, 20, 10, 20, 20, 20]);
    }

    // Tests changing one depth row leaves every other output row untouched
    #[test]
    fn test_rows_are_independent() {
        let pattern = traced_pattern(4, 4);
        let depth = gradient_depth(5, 24);
        let mut edited = depth.values().clone();
        // Row 2 stays within the global range, so normalization is unchanged
        edited.row_mut(2).fill(10.0);
        let edited = DepthMap::new(edited).expect("valid depth");

        let before = autostereogram(&depth, &pattern, &config(0.6)).expect("generation succeeds");
        let after = autostereogram(&edited, &pattern, &config(0.6)).expect("generation succeeds");

        for r in [0, 1, 3, 4] {
            assert_eq!(
                before.pixels().index_axis(ndarray::Axis(0), r),
                after.pixels().index_axis(ndarray::Axis(0), r),
                "row {r} changed"
            );
        }
        assert_ne!(
            before.pixels().index_axis(ndarray::Axis(0), 2),
            after.pixels().index_axis(ndarray::Axis(0), 2)
        );
    }

    // Tests parallel and sequential scans produce identical images
    #[test]
    fn test_parallel_matches_sequential() {
        let pattern = traced_pattern(3, 6);
        let depth = gradient_depth(31, 57);
        let parallel = StereogramConfig {
            parallel: true,
            ..config(0.45)
        };
        let sequential = StereogramConfig {
            parallel: false,
            ..config(0.45)
        };

        let a = autostereogram(&depth, &pattern, &parallel).expect("generation succeeds");
        let b = autostereogram(&depth, &pattern, &sequential).expect("generation succeeds");

        assert_eq!(a, b);
    }

    // Tests inverting equals generating from the explicitly inverted normalized map
    #[test]
    fn test_invert_uses_one_minus_normalized_depth() {
        let pattern = traced_pattern(2, 4);
        let depth = gradient_depth(6, 30);
        let flipped = depth.normalized().inverted();
        let inverted_config = StereogramConfig {
            invert: true,
            ..config(0.5)
        };

        let a = autostereogram(&depth, &pattern, &inverted_config).expect("generation succeeds");
        let b = autostereogram(&flipped, &pattern, &config(0.5)).expect("generation succeeds");

        assert_eq!(a, b);
    }

    // Tests a pattern as wide as the output is reproduced without any recurrence
    #[test]
    fn test_pattern_as_wide_as_output_is_copied() {
        let pattern = traced_pattern(3, 8);
        let depth = gradient_depth(5, 8);

        let out = autostereogram(&depth, &pattern, &config(0.9)).expect("generation succeeds");

        for r in 0..5 {
            for c in 0..8 {
                assert_eq!(pixel(&out, r, c), pattern.pixels()[(r % 3, c, 0)]);
            }
        }
    }

    // Tests a pattern wider than the output is cropped rather than rejected
    #[test]
    fn test_pattern_wider_than_output_is_cropped() {
        let pattern = traced_pattern(2, 12);
        let depth = gradient_depth(3, 5);

        let out = autostereogram(&depth, &pattern, &config(0.2)).expect("generation succeeds");

        assert_eq!(out.pixels().dim(), (3, 5, 1));
        assert_eq!(pixel(&out, 2, 4), pattern.pixels()[(0, 4, 0)]);
    }

    // Tests the reject policy refuses an amplitude that could leave the window
    #[test]
    fn test_reject_policy_refuses_large_amplitude() {
        let pattern = traced_pattern(2, 4);
        let depth = gradient_depth(3, 12);

        let result = autostereogram(&depth, &pattern, &config(1.0));

        assert!(matches!(
            result,
            Err(StereogramError::InvalidParameter {
                parameter: "shift_amplitude",
                ..
            })
        ));
    }

    // Tests the clamp policy stays inside the window for huge amplitudes
    #[test]
    fn test_clamp_policy_handles_large_amplitude() {
        let pattern = traced_pattern(2, 4);
        let depth = gradient_depth(3, 12);
        let clamped = StereogramConfig {
            shift_policy: ShiftPolicy::Clamp,
            ..config(25.0)
        };

        let out = autostereogram(&depth, &pattern, &clamped).expect("clamped generation succeeds");

        let allowed: Vec<u8> = pattern.pixels().iter().copied().collect();
        assert!(out.pixels().iter().all(|v| allowed.contains(v)));
    }
}
