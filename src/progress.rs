use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;

/// Trait for reporting deletion progress.
///
/// The CLI implements it with an indicatif bar redrawn in place; tests and
/// embedders can swap in `SilentReporter` or a log-line implementation.
pub trait ProgressReporter {
    /// `current` of `total` items, `label` names the item being processed.
    fn update(&self, current: usize, total: usize, label: &str);
    fn finish(&self);
}

/// No-op progress reporter for silent operation.
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {
    fn update(&self, _current: usize, _total: usize, _label: &str) {}
    fn finish(&self) {}
}

/// Terminal reporter: a single progress bar overwritten in place, showing
/// count/total and the path currently being deleted.
pub struct ConsoleReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for ConsoleReporter {
    fn update(&self, current: usize, total: usize, label: &str) {
        let mut guard = self.bar.lock().unwrap();
        let bar = guard.get_or_insert_with(|| {
            let pb = ProgressBar::new(total as u64);
            pb.set_style(
                ProgressStyle::with_template(
                    "  {spinner:.red} Deleting [{bar:50.red/dim}] {pos}/{len}\n  {wide_msg}",
                )
                .unwrap()
                .progress_chars("#--")
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
            );
            pb
        });

        if bar.length() != Some(total as u64) {
            bar.set_length(total as u64);
        }
        bar.set_position(current as u64);
        bar.set_message(label.to_string());
    }

    fn finish(&self) {
        let mut guard = self.bar.lock().unwrap();
        if let Some(pb) = guard.take() {
            pb.finish_and_clear();
        }
    }
}
