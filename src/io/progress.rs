//! Progress display for a batch of textures

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {msg} [{bar:30.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks completed textures; silent when hidden
///
/// Safe to advance from several rendering threads at once.
pub struct BatchProgress {
    bar: ProgressBar,
}

impl BatchProgress {
    /// Visible progress bar for `count` textures
    pub fn new(count: usize, prompt: &str) -> Self {
        let bar = ProgressBar::new(count as u64);
        bar.set_style(BATCH_STYLE.clone());
        bar.set_message(prompt.to_string());
        Self { bar }
    }

    /// Progress tracker that draws nothing
    pub fn hidden(count: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(count as u64);
        Self { bar }
    }

    /// Record one finished texture
    pub fn complete_one(&self) {
        self.bar.inc(1);
    }

    /// Number of textures recorded so far
    pub fn completed(&self) -> u64 {
        self.bar.position()
    }

    /// Number of textures the batch expects
    pub fn total(&self) -> u64 {
        self.bar.length().unwrap_or(0)
    }

    /// Clear the display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
