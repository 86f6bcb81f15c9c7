//! Multi-file progress tracking with automatic batching for large sets

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;

static FILE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Puzzles: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Coordinates progress display for batch solving
///
/// Small batches get one line per puzzle; large batches collapse to a
/// single counting bar to avoid terminal spam.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    file_bars: Vec<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            file_bars: Vec::new(),
        }
    }

    /// Initialize progress bars based on puzzle count
    pub fn initialize(&mut self, file_count: usize) {
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
            return;
        }

        for _ in 0..file_count {
            let pb = ProgressBar::new_spinner();
            pb.set_style(FILE_STYLE.clone());
            pb.enable_steady_tick(Duration::from_millis(100));
            self.file_bars.push(self.multi_progress.add(pb));
        }
    }

    /// Announce that a puzzle is being solved
    pub fn start_file(&self, index: usize, path: &Path) {
        if let Some(bar) = self.file_bars.get(index) {
            bar.set_message(format!("solving {}", display_name(path)));
        }
    }

    /// Report a puzzle's terminal outcome
    pub fn complete_file(&self, index: usize, path: &Path, outcome: &str) {
        if let Some(bar) = self.file_bars.get(index) {
            bar.finish_with_message(format!("{}: {outcome}", display_name(path)));
        }
        if let Some(bar) = &self.batch_bar {
            bar.inc(1);
        }
    }

    /// Finish all remaining bars
    pub fn finish(&self) {
        if let Some(bar) = &self.batch_bar {
            bar.finish();
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |name| {
            name.to_string_lossy().to_string()
        })
}
