//! Paragraphs
//!
//! One paragraph per input line. The raw line is kept alongside the runs
//! because the portable-document renderer styles whole paragraphs from it.

use serde::{Deserialize, Serialize};

use crate::inline::Run;

/// A paragraph of styled runs
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Paragraph {
    /// Runs in rendering order
    pub runs: Vec<Run>,
    /// The input line this paragraph was tokenized from
    pub source: String,
}

impl Paragraph {
    /// Create an empty paragraph (a blank line)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph from its source line and runs
    pub fn with_runs(source: impl Into<String>, runs: Vec<Run>) -> Self {
        Self {
            runs,
            source: source.into(),
        }
    }

    /// Append a run
    pub fn push(&mut self, run: Run) {
        self.runs.push(run);
    }

    /// True when the paragraph has no runs
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// True when the source line is empty or whitespace only
    pub fn is_blank(&self) -> bool {
        self.source.trim().is_empty()
    }

    /// Text as laid out by the word-level renderers, without the line break
    pub fn visible_text(&self) -> String {
        let mut out = String::new();
        for run in &self.runs {
            out.push_str(&run.text);
            if run.needs_separator() {
                out.push(' ');
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_default() {
        let para = Paragraph::default();
        assert!(para.is_empty());
        assert!(para.is_blank());
    }

    #[test]
    fn test_visible_text_restores_word_boundaries() {
        let para = Paragraph::with_runs(
            "**Science** and *Art*",
            vec![Run::heading("Science"), Run::plain("and "), Run::italic("Art")],
        );
        assert_eq!(para.visible_text(), "Science and Art ");
    }
}
