//! Text decoration seam for report rendering
//!
//! Reports mark emphasis through this trait instead of touching ANSI codes
//! directly, so rendering stays testable without a terminal.

use colored::Colorize;

/// Applies emphasis to fragments of report text
pub trait TextStyle {
    /// Render `text` in bold.
    fn bold(&self, text: &str) -> String;

    /// Render `text` in italics.
    fn italic(&self, text: &str) -> String;
}

/// Terminal styling backed by `colored`
///
/// Inherits `colored`'s handling of tty detection, `NO_COLOR`, and the
/// global override, so output degrades to plain text when piped.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiStyle;

impl TextStyle for AnsiStyle {
    fn bold(&self, text: &str) -> String {
        text.bold().to_string()
    }

    fn italic(&self, text: &str) -> String {
        text.italic().to_string()
    }
}

/// Identity styling for tests and undecorated output
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainStyle;

impl TextStyle for PlainStyle {
    fn bold(&self, text: &str) -> String {
        text.to_string()
    }

    fn italic(&self, text: &str) -> String {
        text.to_string()
    }
}
