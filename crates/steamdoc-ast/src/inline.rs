//! Inline runs
//!
//! A run is the smallest styled unit of a paragraph. Runs never carry the
//! markup delimiters they were parsed from.

use serde::{Deserialize, Serialize};

/// The markup delimiter character (`*` for italics, `**` for headings)
pub const MARKER: char = '*';

/// Visual style of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStyle {
    /// Unmarked text
    #[default]
    Plain,
    /// Double-marked word among the first two words of a paragraph
    Heading,
    /// Double-marked word later in a paragraph
    Subheading,
    /// Single-marked word
    Italic,
}

impl RunStyle {
    /// Whether this style came from a marker in the source text
    pub fn is_marked(self) -> bool {
        self != RunStyle::Plain
    }

    /// Lowercase name, used as the view tag and in JSON output
    pub fn name(self) -> &'static str {
        match self {
            RunStyle::Plain => "plain",
            RunStyle::Heading => "heading",
            RunStyle::Subheading => "subheading",
            RunStyle::Italic => "italic",
        }
    }
}

/// A styled run of text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    /// Text content with markers removed
    pub text: String,
    /// Visual style
    pub style: RunStyle,
}

impl Run {
    /// Create a run, dropping any marker characters from `text`
    pub fn new(text: impl Into<String>, style: RunStyle) -> Self {
        let mut text = text.into();
        if text.contains(MARKER) {
            text.retain(|c| c != MARKER);
        }
        Self { text, style }
    }

    /// Plain run
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, RunStyle::Plain)
    }

    /// Heading run
    pub fn heading(text: impl Into<String>) -> Self {
        Self::new(text, RunStyle::Heading)
    }

    /// Subheading run
    pub fn subheading(text: impl Into<String>) -> Self {
        Self::new(text, RunStyle::Subheading)
    }

    /// Italic run
    pub fn italic(text: impl Into<String>) -> Self {
        Self::new(text, RunStyle::Italic)
    }

    /// Whether a word separator must follow this run when it is laid out.
    ///
    /// Plain runs already end with the separator captured by the tokenizer;
    /// marked runs hold the bare word.
    pub fn needs_separator(&self) -> bool {
        self.style.is_marked()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_strips_markers() {
        let run = Run::heading("**Science**");
        assert_eq!(run.text, "Science");
        assert_eq!(run.style, RunStyle::Heading);
    }

    #[test]
    fn test_plain_run_keeps_text() {
        let run = Run::plain("and ");
        assert_eq!(run.text, "and ");
        assert!(!run.needs_separator());
    }

    #[test]
    fn test_marked_runs_need_separator() {
        assert!(Run::italic("Art").needs_separator());
        assert!(Run::subheading("Tech").needs_separator());
    }

    #[test]
    fn test_style_serializes_lowercase() {
        let json = serde_json::to_string(&Run::italic("Art")).unwrap();
        assert_eq!(json, r#"{"text":"Art","style":"italic"}"#);
    }
}
