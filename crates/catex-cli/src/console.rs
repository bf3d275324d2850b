//! Console rendering of run progress.

use catex_scraper::progress::{ProgressSink, ProgressUpdate};

/// Prints progress to stderr, one line per change, skipping updates that
/// would repeat the previous line (the tracker re-emits snapshots around
/// every milestone).
#[derive(Default)]
pub struct ConsoleProgress {
    last_percent: Option<u32>,
    last_step: String,
}

impl ProgressSink for ConsoleProgress {
    fn update(&mut self, update: ProgressUpdate) {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let percent = update.percent.round().clamp(0.0, 100.0) as u32;
        if self.last_percent == Some(percent) && self.last_step == update.step {
            return;
        }
        eprintln!("[{percent:>3}%] {}", update.step);
        self.last_percent = Some(percent);
        self.last_step = update.step;
    }
}
