//! Progress reporting for console answers

use ask_application::ProgressNotifier;
use ask_domain::ProgressEvent;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Reports progress with a spinner; status events replace the spinner
/// message and streamed text is printed above it as it arrives.
pub struct ConsoleProgress {
    spinner: ProgressBar,
    /// Streamed text was printed and the line is still open.
    open_line: AtomicBool,
}

impl ConsoleProgress {
    pub fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(Self::spinner_style());
        spinner.enable_steady_tick(Duration::from_millis(100));
        Self::with_spinner(spinner)
    }

    fn with_spinner(spinner: ProgressBar) -> Self {
        Self {
            spinner,
            open_line: AtomicBool::new(false),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Remove the spinner once the answer is ready to print, ending the
    /// line of streamed text so the answer starts on its own line.
    pub fn finish(&self) {
        self.spinner.finish_and_clear();
        if self.open_line.swap(false, Ordering::SeqCst) {
            println!();
        }
    }
}

impl Default for ConsoleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ConsoleProgress {
    fn on_event(&self, event: &ProgressEvent) {
        match event {
            ProgressEvent::Status(text) => self.spinner.set_message(text.clone()),
            ProgressEvent::Delta(text) => {
                if text.is_empty() {
                    return;
                }
                self.spinner.suspend(|| {
                    print!("{}", text.dimmed());
                    let _ = std::io::stdout().flush();
                });
                self.open_line.store(!text.ends_with('\n'), Ordering::SeqCst);
            }
        }
    }
}

/// Simple text-based progress (no spinner), used when stdout is not a terminal
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_event(&self, event: &ProgressEvent) {
        match event {
            ProgressEvent::Status(text) => eprintln!("{} {}", "->".cyan(), text),
            ProgressEvent::Delta(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hidden() -> ConsoleProgress {
        ConsoleProgress::with_spinner(ProgressBar::hidden())
    }

    #[test]
    fn status_leaves_no_open_line() {
        let progress = hidden();
        progress.on_event(&ProgressEvent::status("Thinking..."));
        assert!(!progress.open_line.load(Ordering::SeqCst));
    }

    #[test]
    fn delta_opens_line_until_finish() {
        let progress = hidden();
        progress.on_event(&ProgressEvent::status("Thinking..."));
        progress.on_event(&ProgressEvent::delta("The answer is 42"));
        progress.on_event(&ProgressEvent::status("Complete!"));
        assert!(progress.open_line.load(Ordering::SeqCst));

        progress.finish();
        assert!(!progress.open_line.load(Ordering::SeqCst));
    }

    #[test]
    fn delta_ending_in_newline_closes_line() {
        let progress = hidden();
        progress.on_event(&ProgressEvent::delta("42"));
        progress.on_event(&ProgressEvent::delta("\n"));
        assert!(!progress.open_line.load(Ordering::SeqCst));
    }
}
