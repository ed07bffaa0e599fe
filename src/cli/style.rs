//! Terminal styling helpers
//!
//! Thin wrapper over owo-colors that degrades to plain text when the
//! stream does not support color.

use owo_colors::{OwoColorize, Stream::Stdout};

/// String styling extension used by CLI output
pub trait Stylize {
    /// Green - a completed action
    fn success(&self) -> String;
    /// Yellow - something worth attention
    fn warn(&self) -> String;
    /// Dimmed - secondary information
    fn muted(&self) -> String;
    /// Cyan - identifiers and values
    fn accent(&self) -> String;
}

impl<T: AsRef<str>> Stylize for T {
    fn success(&self) -> String {
        self.as_ref()
            .if_supports_color(Stdout, |t| t.green())
            .to_string()
    }

    fn warn(&self) -> String {
        self.as_ref()
            .if_supports_color(Stdout, |t| t.yellow())
            .to_string()
    }

    fn muted(&self) -> String {
        self.as_ref()
            .if_supports_color(Stdout, |t| t.dimmed())
            .to_string()
    }

    fn accent(&self) -> String {
        self.as_ref()
            .if_supports_color(Stdout, |t| t.cyan())
            .to_string()
    }
}

/// Green check mark
pub fn check() -> String {
    "✓".success()
}
