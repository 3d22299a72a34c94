//! Batch progress display for file processing

use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress display for a batch of input files
///
/// A single bar tracks files completed; the message shows the file currently
/// being solved, which matters because large images spend long stretches
/// inside one solve.
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a bar sized to the number of files in the batch
    pub fn new(file_count: usize) -> Self {
        let bar = ProgressBar::new(file_count as u64);
        bar.set_style(BATCH_STYLE.clone());
        bar.enable_steady_tick(Duration::from_millis(100));

        Self { bar }
    }

    /// Show the file currently being processed
    pub fn start_file(&self, path: &Path) {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.bar.set_message(name);
    }

    /// Mark the current file as done
    pub fn complete_file(&self) {
        self.bar.inc(1);
    }

    /// Clear the message and close out the bar
    pub fn finish(&self) {
        self.bar.finish_with_message("done");
    }
}
