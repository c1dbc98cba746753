//! steamdoc-ast - Styled document model
//!
//! This crate provides the renderer-agnostic structure produced by the
//! markup tokenizer and consumed by every output sink:
//!
//! - [`StyledDocument`] - ordered paragraphs
//! - [`Paragraph`] - ordered runs for one line of input
//! - [`Run`] - a word (or word fragment) with a [`RunStyle`]

pub mod block;
pub mod document;
pub mod inline;

pub use block::Paragraph;
pub use document::StyledDocument;
pub use inline::{Run, RunStyle, MARKER};

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
