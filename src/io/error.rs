//! Error types for stereogram synthesis and its file pipeline

use std::fmt;
use std::path::PathBuf;

/// Main error type for all stereogram operations
#[derive(Debug)]
pub enum StereogramError {
    /// Failed to load a depth map or pattern image from filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Decoded input doesn't meet synthesis requirements
    InvalidSourceData {
        /// Description of what's wrong with the source data
        reason: String,
    },

    /// Pattern or tiling geometry cannot produce a stereogram
    ///
    /// Raised for zero-sized patterns, zero tiling columns, or a resampled
    /// pattern whose width collapses to nothing
    DegenerateGeometry {
        /// Description of the degenerate geometry
        reason: String,
    },

    /// Recurrence offset falls outside the window of already written columns
    ShiftOutOfRange {
        /// Output row being generated
        row: usize,
        /// Output column being generated
        col: usize,
        /// Computed shift before any correction
        shift: f64,
        /// Width of one pattern repeat
        tile_width: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save a generated image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for StereogramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::DegenerateGeometry { reason } => {
                write!(f, "Degenerate geometry: {reason}")
            }
            Self::ShiftOutOfRange {
                row,
                col,
                shift,
                tile_width,
            } => {
                write!(
                    f,
                    "Shift {shift} at row {row}, column {col} is outside [0, {tile_width})"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for StereogramError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for stereogram results
pub type Result<T> = std::result::Result<T, StereogramError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> StereogramError {
    StereogramError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a degenerate geometry error
pub fn degenerate_geometry(reason: &impl ToString) -> StereogramError {
    StereogramError::DegenerateGeometry {
        reason: reason.to_string(),
    }
}

/// Create an invalid source data error
pub fn invalid_source(reason: &impl ToString) -> StereogramError {
    StereogramError::InvalidSourceData {
        reason: reason.to_string(),
    }
}
