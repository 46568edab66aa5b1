//! Console diagnostics
//!
//! Informational progress lines are suppressible with the quiet flag;
//! warnings and errors always print, visually distinguished.

use colored::Colorize;

/// Console printer honoring the quiet flag
#[derive(Debug, Clone, Copy, Default)]
pub struct Console {
    quiet: bool,
}

impl Console {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Informational progress line, suppressed when quiet
    pub fn info(&self, message: &str) {
        if !self.quiet {
            println!("{}", message);
        }
    }

    /// Warning line, always printed
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "WARNING!".yellow().bold(), message);
    }

    /// Error line, used only for fatal conditions
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "ERROR:".red().bold(), message);
    }
}

/// Couples console output with warning aggregation for the final report
pub struct Reporter<'a> {
    console: &'a Console,
    warnings: Vec<String>,
}

impl<'a> Reporter<'a> {
    pub fn new(console: &'a Console) -> Self {
        Self {
            console,
            warnings: Vec::new(),
        }
    }

    pub fn info(&self, message: &str) {
        self.console.info(message);
    }

    /// Print the warning and keep it for the report
    pub fn warn(&mut self, message: String) {
        self.console.warn(&message);
        self.warnings.push(message);
    }

    pub fn into_warnings(self) -> Vec<String> {
        self.warnings
    }
}
