//! Pipeline constants and runtime configuration defaults

// Default values for configurable parameters
/// Default depth map image path
pub const DEFAULT_DEPTHMAP_PATH: &str = "assets/depthmap.png";
/// Default pattern image path
pub const DEFAULT_PATTERN_PATH: &str = "assets/pattern.png";
/// Default output image path
pub const DEFAULT_OUTPUT_PATH: &str = "result.png";

/// Default shift amplitude (fraction of the tile width at full depth)
pub const DEFAULT_SHIFT_AMPLITUDE: f64 = 0.2;

/// Default number of pattern repeats across the original pattern width
pub const DEFAULT_COLUMNS: usize = 6;

// Random-dot tile settings
/// Fixed seed for reproducible random-dot tiles
pub const DEFAULT_SEED: u64 = 42;
/// Fraction of white dots in a random-dot tile
pub const DEFAULT_DOT_DENSITY: f64 = 0.5;
/// Channel count of generated random-dot tiles (RGBA)
pub const RANDOM_DOT_CHANNELS: usize = 4;

// Depth statistics
/// Bin count for depth histograms
pub const HISTOGRAM_BINS: usize = 10;

// Logging
/// Environment variable holding the log filter
pub const LOG_LEVEL_ENV: &str = "LOGLEVEL";
/// Log filter used when the environment variable is unset
pub const DEFAULT_LOG_LEVEL: &str = "warn";

// Progress bar display settings
/// Width of the row progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
