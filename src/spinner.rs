use std::{
    io::{self, Write},
    time::Duration,
};

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while a request is in flight. Dropping it without calling
/// [`Progress::succeed`] clears it without any failure mark.
pub struct Progress {
    bar: ProgressBar,
}

impl Progress {
    pub fn start(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.enable_steady_tick(Duration::from_millis(80));
        bar.set_style(
            ProgressStyle::default_spinner()
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
        );
        bar.set_message(message.to_string());

        Self { bar }
    }

    pub fn succeed<W: Write>(self, out: &mut W, message: &str) -> io::Result<()> {
        self.bar.finish_and_clear();
        writeln!(out, "{} {}", "✔".green(), message)
    }
}

impl Drop for Progress {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}
