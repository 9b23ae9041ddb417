//! Terminal implementation of the wizard's view binding.

use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use sheetgenie::{Operation, WizardView};

/// Renders wizard output on the terminal: an indicatif spinner as the
/// busy indicator, styled lines for result messages.
pub struct ConsoleView {
    spinner: Option<ProgressBar>,
}

impl ConsoleView {
    pub fn new() -> Self {
        Self { spinner: None }
    }
}

impl WizardView for ConsoleView {
    fn clear_result(&mut self, _op: Operation) {
        // The terminal scrolls; a stale message is superseded by the
        // next one rather than erased in place.
    }

    fn busy(&mut self, op: Operation, on: bool) {
        if on {
            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::with_template("  {spinner:.cyan} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            spinner.enable_steady_tick(Duration::from_millis(80));
            spinner.set_message(format!("Running {}...", op.name()));
            self.spinner = Some(spinner);
        } else if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }

    fn show_success(&mut self, _op: Operation, message: &str) {
        println!("  {}", style(message).green());
    }

    fn show_error(&mut self, _op: Operation, message: &str) {
        println!("  {}", style(message).red());
    }
}
