//! Terminal capability helpers for CLI output.

use owo_colors::{OwoColorize, colors::css};

/// Whether colored output should be used on stdout.
pub fn supports_color() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

/// The terminal width in columns, when it can be detected.
pub fn terminal_width() -> Option<u16> {
    terminal_size::terminal_size().map(|(w, _)| w.0)
}

/// Whether the terminal is too narrow for multi-column output (< 72 cols).
pub fn is_narrow() -> bool {
    terminal_width().is_some_and(|w| w < 72)
}

/// Capability-gated coloring for CLI strings.
pub trait Colorize {
    /// Green: an operation that succeeded.
    fn success(&self) -> String;
    /// Yellow: worth attention, not fatal.
    fn warning(&self) -> String;
    /// Red: a failure.
    fn error(&self) -> String;
    /// Dimmed: headers and secondary detail.
    fn dim(&self) -> String;
}

impl Colorize for str {
    fn success(&self) -> String {
        if supports_color() {
            self.fg::<css::Green>().to_string()
        } else {
            self.to_string()
        }
    }

    fn warning(&self) -> String {
        if supports_color() {
            self.fg::<css::Gold>().to_string()
        } else {
            self.to_string()
        }
    }

    fn error(&self) -> String {
        if supports_color() {
            self.fg::<css::Red>().to_string()
        } else {
            self.to_string()
        }
    }

    fn dim(&self) -> String {
        if supports_color() {
            self.dimmed().to_string()
        } else {
            self.to_string()
        }
    }
}

impl Colorize for String {
    fn success(&self) -> String {
        self.as_str().success()
    }

    fn warning(&self) -> String {
        self.as_str().warning()
    }

    fn error(&self) -> String {
        self.as_str().error()
    }

    fn dim(&self) -> String {
        self.as_str().dim()
    }
}
