//! Output sinks.
//!
//! The engine never prints directly. Every result line goes through an
//! [`OutputSink`], which must preserve call order. The console sink maps
//! styles to terminal colours; [`CapturingSink`] records lines for tests and
//! other harnesses.

mod capture;
mod console;

pub use capture::{CapturedLine, CapturingSink};
pub use console::{colors, ConsoleSink};

use serde::Serialize;

/// Presentation style of an emitted line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    /// A positive, affirmative result.
    Affirmative,
    /// An uncertain or negative result.
    Uncertain,
    /// Unstyled text.
    Plain,
}

impl Style {
    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Affirmative => "affirmative",
            Style::Uncertain => "uncertain",
            Style::Plain => "plain",
        }
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Append-only, order-preserving destination for result lines.
pub trait OutputSink {
    /// Write one line of text in the given style.
    fn write(&mut self, text: &str, style: Style) -> std::io::Result<()>;

    /// Flush buffered output.
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn write(&mut self, text: &str, style: Style) -> std::io::Result<()> {
        (**self).write(text, style)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        (**self).flush()
    }
}
