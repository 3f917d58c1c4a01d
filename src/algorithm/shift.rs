//! Depth-to-shift conversion and the safe-indexing policy
//!
//! Column `c >= tile_width` copies from `c - tile_width + shift`, a position
//! inside the window of the last `tile_width` written cells. The shift is
//! only safe while it stays within `[0, tile_width)`.

use clap::ValueEnum;

use crate::io::error::{Result, StereogramError, invalid_parameter};

/// How shifts outside `[0, tile_width)` are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ShiftPolicy {
    /// Validate the amplitude up front and fail on any out-of-range shift
    #[default]
    Reject,
    /// Accept any finite amplitude and clamp shifts into the window
    Clamp,
}

/// Shift computation bound to one amplitude, tile width and policy
#[derive(Debug, Clone, Copy)]
pub struct ShiftPlan {
    amplitude: f64,
    tile_width: usize,
    policy: ShiftPolicy,
}

impl ShiftPlan {
    /// Validate the amplitude against the policy and bind it to a tile width
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `amplitude` is NaN or infinite
    /// - The policy is [`ShiftPolicy::Reject`] and `amplitude` is outside `[0, 1)`
    pub fn new(amplitude: f64, tile_width: usize, policy: ShiftPolicy) -> Result<Self> {
        if !amplitude.is_finite() {
            return Err(invalid_parameter(
                "shift_amplitude",
                &amplitude,
                &"must be finite",
            ));
        }
        if policy == ShiftPolicy::Reject && !(0.0..1.0).contains(&amplitude) {
            // Normalized depth is at most 1, so amplitude < 1 keeps shift < tile_width
            return Err(invalid_parameter(
                "shift_amplitude",
                &amplitude,
                &"must be within [0, 1) unless shifts are clamped",
            ));
        }
        Ok(Self {
            amplitude,
            tile_width,
            policy,
        })
    }

    /// Width of one pattern repeat
    pub const fn tile_width(&self) -> usize {
        self.tile_width
    }

    /// Raw shift `floor(depth * amplitude * tile_width)` before policy checks
    pub fn raw_shift(&self, depth: f64) -> f64 {
        (depth * self.amplitude * self.tile_width as f64).floor()
    }

    /// Offset into the window of the last `tile_width` cells for a depth sample
    ///
    /// # Errors
    ///
    /// Returns [`StereogramError::ShiftOutOfRange`] under the reject policy when
    /// the shift is negative, NaN, or not smaller than the tile width
    pub fn shift_at(&self, depth: f64, row: usize, col: usize) -> Result<usize> {
        let shift = self.raw_shift(depth);
        let max_shift = self.tile_width.saturating_sub(1) as f64;

        match self.policy {
            ShiftPolicy::Clamp if shift.is_nan() => Ok(0),
            ShiftPolicy::Clamp => Ok(shift.clamp(0.0, max_shift) as usize),
            ShiftPolicy::Reject if (0.0..=max_shift).contains(&shift) => Ok(shift as usize),
            ShiftPolicy::Reject => Err(StereogramError::ShiftOutOfRange {
                row,
                col,
                shift,
                tile_width: self.tile_width,
            }),
        }
    }

    /// Earlier column that output column `col` copies from
    ///
    /// Only meaningful for `col >= tile_width`; the result is always in
    /// `[col - tile_width, col)`.
    ///
    /// # Errors
    ///
    /// Propagates the policy failure from [`Self::shift_at`]
    pub fn source_column(&self, depth: f64, row: usize, col: usize) -> Result<usize> {
        let window_start = col.saturating_sub(self.tile_width);
        Ok(window_start + self.shift_at(depth, row, col)?)
    }
}
