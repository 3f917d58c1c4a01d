//! Row progress display for stereogram generation

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static ROW_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} rows"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks generated rows, or does nothing when disabled
///
/// The underlying bar is thread-safe, so row workers can tick it directly.
pub struct RowProgress {
    bar: Option<ProgressBar>,
}

impl RowProgress {
    /// Create a progress display for `rows` rows; `enabled = false` shows nothing
    pub fn new(rows: usize, enabled: bool) -> Self {
        let bar = enabled.then(|| {
            let bar = ProgressBar::new(rows as u64);
            bar.set_style(ROW_STYLE.clone());
            bar
        });
        Self { bar }
    }

    /// Bar handed to the generator
    pub const fn bar(&self) -> Option<&ProgressBar> {
        self.bar.as_ref()
    }

    /// Label shown in front of the bar
    pub fn set_label(&self, label: &str) {
        if let Some(bar) = &self.bar {
            bar.set_message(label.to_string());
        }
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}
