//! Command-line interface for turning a depth map and a pattern into a stereogram

use crate::algorithm::generator::{StereogramConfig, autostereogram_with_progress};
use crate::algorithm::shift::ShiftPolicy;
use crate::analysis::statistics::{DepthHistogram, DepthSummary};
use crate::io::configuration::{
    DEFAULT_COLUMNS, DEFAULT_DEPTHMAP_PATH, DEFAULT_DOT_DENSITY, DEFAULT_OUTPUT_PATH,
    DEFAULT_PATTERN_PATH, DEFAULT_SEED, DEFAULT_SHIFT_AMPLITUDE, HISTOGRAM_BINS,
    RANDOM_DOT_CHANNELS,
};
use crate::io::error::Result;
use crate::io::image::{DepthChannel, load_depth_map, load_pattern, save_stereogram};
use crate::io::progress::RowProgress;
use crate::io::visualization::export_depth_preview;
use crate::spatial::grid::{DepthMap, Pattern, Stereogram};
use crate::spatial::tiles::{random_dot_tile, tile_width_for};
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "autostereogram")]
#[command(
    author,
    version,
    about = "Creates an autostereogram from a depthmap and a pattern",
    after_help = "Enjoy the program! :)"
)]
/// Command-line arguments for stereogram generation
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Pattern image tiled across the output
    #[arg(short, long, default_value = DEFAULT_PATTERN_PATH)]
    pub pattern: PathBuf,

    /// Depth map image; brighter is nearer
    #[arg(short, long, default_value = DEFAULT_DEPTHMAP_PATH)]
    pub depthmap: PathBuf,

    /// Shift at full depth, as a fraction of the tile width
    #[arg(short, long, default_value_t = DEFAULT_SHIFT_AMPLITUDE)]
    pub shift: f64,

    /// Number of pattern repeats across the pattern's original width
    #[arg(short, long, default_value_t = DEFAULT_COLUMNS)]
    pub columns: usize,

    /// Swap near and far
    #[arg(short, long)]
    pub invert: bool,

    /// Output image path; the format follows the extension
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Depth map channel carrying depth
    #[arg(long, value_enum, default_value_t = DepthChannel::Red)]
    pub depth_channel: DepthChannel,

    /// Handling of shifts that leave the tile window
    #[arg(long, value_enum, default_value_t = ShiftPolicy::Reject)]
    pub shift_policy: ShiftPolicy,

    /// Use a random-dot tile instead of the pattern image
    #[arg(long)]
    pub random_dots: bool,

    /// Seed for the random-dot tile
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Fraction of white dots in the random-dot tile
    #[arg(long, default_value_t = DEFAULT_DOT_DENSITY)]
    pub dot_density: f64,

    /// Also write the normalized depth map as a grayscale image
    #[arg(long, value_name = "PATH")]
    pub depth_preview: Option<PathBuf>,

    /// Print a histogram of the depth map
    #[arg(long)]
    pub histogram: bool,

    /// Generate rows on a single thread
    #[arg(long)]
    pub sequential: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Generator settings taken from the flags
    pub const fn stereogram_config(&self) -> StereogramConfig {
        StereogramConfig {
            shift_amplitude: self.shift,
            invert: self.invert,
            shift_policy: self.shift_policy,
            parallel: !self.sequential,
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Runs load, analysis, generation and save for one set of arguments
pub struct Pipeline {
    cli: Cli,
}

impl Pipeline {
    /// Create a pipeline for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run every stage and write the output image
    ///
    /// Nothing is written to the output path unless generation succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if any input cannot be loaded, the geometry or shift
    /// settings are invalid, or an output file cannot be written
    pub fn process(&self) -> Result<()> {
        let start_time = Instant::now();

        let depth = load_depth_map(&self.cli.depthmap, self.cli.depth_channel)?;
        self.report_depth(&depth)?;

        if let Some(preview_path) = &self.cli.depth_preview {
            export_depth_preview(&depth, self.cli.invert, preview_path)?;
        }

        let pattern = self.prepare_pattern(&depth)?;
        let stereogram = self.generate(&depth, &pattern)?;
        save_stereogram(&stereogram, &self.cli.output)?;

        log::info!("Finished in {:.2?}", start_time.elapsed());
        Ok(())
    }

    /// Load or synthesize the tile and shrink it to the requested column count
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern cannot be loaded, or the column count
    /// leaves a zero-width tile
    pub fn prepare_pattern(&self, depth: &DepthMap) -> Result<Pattern> {
        let pattern = if self.cli.random_dots {
            let width = tile_width_for(depth.cols(), self.cli.columns)?;
            log::info!(
                "Using {}x{width} random-dot tile (seed {})",
                depth.rows(),
                self.cli.seed
            );
            random_dot_tile(
                depth.rows(),
                width,
                RANDOM_DOT_CHANNELS,
                self.cli.dot_density,
                self.cli.seed,
            )?
        } else {
            let original = load_pattern(&self.cli.pattern)?;
            let fitted = original.fit_to_columns(self.cli.columns)?;
            log::info!(
                "Rescaled pattern from {}x{} to {}x{} for {} columns",
                original.rows(),
                original.cols(),
                fitted.rows(),
                fitted.cols(),
                self.cli.columns
            );
            fitted
        };
        Ok(pattern)
    }

    /// Generate the stereogram, showing row progress unless quiet
    ///
    /// # Errors
    ///
    /// Returns an error if the shift settings are rejected
    pub fn generate(&self, depth: &DepthMap, pattern: &Pattern) -> Result<Stereogram> {
        let progress = RowProgress::new(depth.rows(), self.cli.should_show_progress());
        progress.set_label("Generating");
        let result = autostereogram_with_progress(
            depth,
            pattern,
            &self.cli.stereogram_config(),
            progress.bar(),
        );
        progress.finish();
        result
    }

    #[allow(clippy::print_stderr)]
    fn report_depth(&self, depth: &DepthMap) -> Result<()> {
        if let Some(summary) = DepthSummary::from_values(depth.values()) {
            log::info!(
                "Depth range [{:.3}, {:.3}], mean {:.3}",
                summary.min,
                summary.max,
                summary.mean
            );
            if summary.max <= summary.min {
                log::warn!("Depth map is constant; the stereogram will show a flat plane");
            }
        }
        if self.cli.histogram {
            let histogram = DepthHistogram::from_values(depth.values(), HISTOGRAM_BINS)?;
            eprintln!("Depth histogram ({} samples):\n{histogram}", histogram.total());
        }
        Ok(())
    }
}
