//! steamdoc-core - Markup tokenizer and session building blocks
//!
//! Generated lesson text uses a small, position-sensitive markup
//! convention: `**word**` marks a heading (or a subheading past the
//! second word of a line) and `*word*` marks italics. This crate turns
//! that text into a [`steamdoc_ast::StyledDocument`] and projects it onto
//! an interactive text surface.
//!
//! # Example
//!
//! ```
//! use steamdoc_ast::RunStyle;
//! use steamdoc_core::tokenize;
//!
//! let doc = tokenize("**Science** and *Art* are linked");
//! let styles: Vec<_> = doc.runs().map(|r| r.style).collect();
//! assert_eq!(styles[0], RunStyle::Heading);
//! assert_eq!(styles[2], RunStyle::Italic);
//! ```

pub mod config;
pub mod history;
pub mod prompt;
pub mod request;
pub mod tokenizer;
pub mod view;

// Re-export main types and functions
pub use config::{ConfigError, Credentials, ExportFormat, Settings};
pub use history::{HistoryEntry, HistoryLog, HISTORY_CAPACITY};
pub use prompt::build_prompt;
pub use request::{Language, LessonRequest, OutputType, RequestForm, ValidationError};
pub use tokenizer::tokenize;
pub use view::{TextBuffer, TextSurface, ViewRenderer, ViewStyle};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, "1.0.0");
    }
}
