use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

/// Bar over the files of a sync or seed batch
pub struct BatchProgress {
    pb: ProgressBar,
}

impl BatchProgress {
    pub fn new(total_files: usize, label: &str) -> Self {
        let pb = if console::Term::stdout().is_term() && !crate::output::is_quiet() {
            ProgressBar::new(total_files as u64)
        } else {
            ProgressBar::hidden()
        };
        if let Ok(style) = ProgressStyle::with_template("{prefix} [{bar:30}] {pos}/{len} {msg}") {
            pb.set_style(style.progress_chars("=> "));
        }
        pb.set_prefix(label.to_string());
        Self { pb }
    }

    /// Mark one file as handled
    pub fn file_done(&self, path: &Path) {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        self.pb.set_message(name);
        self.pb.inc(1);
    }

    pub fn finish(&self) {
        self.pb.finish_and_clear();
    }
}
