//! Console output helpers

use colored::Colorize;

/// Styled messages for the terminal
pub struct Output;

impl Output {
    /// Print an error message to stderr
    pub fn error(message: &str) {
        eprintln!("{} {}", "error:".red().bold(), message);
    }
}
