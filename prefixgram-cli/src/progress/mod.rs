//! Progress reporting module

use indicatif::{ProgressBar, ProgressBarIter, ProgressStyle};
use prefixgram_core::EmitStats;
use std::io::BufRead;
use std::time::Duration;

/// Byte-based progress over the input corpus, drawn on stderr
pub struct ProgressReporter {
    progress_bar: ProgressBar,
}

impl ProgressReporter {
    /// Create a reporter for an input of `total_bytes`
    ///
    /// When `enabled` is false the bar is hidden and tracking costs nothing.
    pub fn new(enabled: bool, total_bytes: u64) -> Self {
        if !enabled {
            return Self {
                progress_bar: ProgressBar::hidden(),
            };
        }

        let pb = ProgressBar::new(total_bytes);
        let style = ProgressStyle::with_template(
            "[{elapsed_precise}] {bar:40.cyan/blue} {bytes}/{total_bytes} {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("##-");
        pb.set_style(style);
        pb.enable_steady_tick(Duration::from_millis(100));

        Self { progress_bar: pb }
    }

    /// Wrap a reader so consumed bytes advance the bar
    pub fn track<R: BufRead>(&self, reader: R) -> ProgressBarIter<R> {
        self.progress_bar.wrap_read(reader)
    }

    /// Finish progress reporting
    pub fn finish(&self, stats: &EmitStats) {
        self.progress_bar
            .finish_with_message(format!("{} records", stats.records()));
    }

    /// Stop the bar where it is, for runs that end early
    pub fn abandon(&self) {
        self.progress_bar.abandon();
    }

    #[cfg(test)]
    fn is_hidden(&self) -> bool {
        self.progress_bar.is_hidden()
    }

    #[cfg(test)]
    fn is_finished(&self) -> bool {
        self.progress_bar.is_finished()
    }
}
