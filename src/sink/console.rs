//! Terminal output with ANSI styling.

use std::io::{self, Write};

use super::{OutputSink, Style};

/// ANSI color codes
pub mod colors {
    /// Reset all terminal formatting to default.
    pub const RESET: &str = "\x1b[0m";
    /// Green foreground color.
    pub const GREEN: &str = "\x1b[32m";
    /// Yellow foreground color.
    pub const YELLOW: &str = "\x1b[33m";
}

/// Sink that writes styled lines to any [`Write`] target, stdout by default.
pub struct ConsoleSink<W: Write = io::Stdout> {
    out: W,
    color: bool,
}

impl ConsoleSink<io::Stdout> {
    /// Console sink on stdout.
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    fn color_for(style: Style) -> Option<&'static str> {
        match style {
            Style::Affirmative => Some(colors::GREEN),
            Style::Uncertain => Some(colors::YELLOW),
            Style::Plain => None,
        }
    }
}

impl<W: Write> OutputSink for ConsoleSink<W> {
    fn write(&mut self, text: &str, style: Style) -> io::Result<()> {
        match Self::color_for(style).filter(|_| self.color) {
            Some(color) => writeln!(self.out, "{}{}{}", color, text, colors::RESET),
            None => writeln!(self.out, "{}", text),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
