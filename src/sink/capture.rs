//! In-memory sink that records every line.

use serde::Serialize;

use super::{OutputSink, Style};

/// One recorded write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CapturedLine {
    pub text: String,
    pub style: Style,
}

/// Sink that keeps `(text, style)` pairs in call order.
#[derive(Debug, Default, Clone)]
pub struct CapturingSink {
    lines: Vec<CapturedLine>,
}

impl CapturingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CapturedLine] {
        &self.lines
    }

    /// Just the text of each line.
    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|l| l.text.as_str()).collect()
    }

    /// Number of lines written in `style`.
    pub fn count(&self, style: Style) -> usize {
        self.lines.iter().filter(|l| l.style == style).count()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl OutputSink for CapturingSink {
    fn write(&mut self, text: &str, style: Style) -> std::io::Result<()> {
        self.lines.push(CapturedLine {
            text: text.to_string(),
            style,
        });
        Ok(())
    }
}
