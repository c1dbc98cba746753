//! Document root

use serde::{Deserialize, Serialize};

use crate::block::Paragraph;
use crate::inline::Run;

/// A tokenized document: ordered paragraphs
///
/// Produced once per generation and read, never mutated, by the renderers.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StyledDocument {
    /// Paragraphs in input order
    pub paragraphs: Vec<Paragraph>,
}

impl StyledDocument {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a paragraph to the document
    pub fn push(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    /// Check if the document has no paragraphs
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Get the number of paragraphs
    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }

    /// Iterate over every run in document order
    pub fn runs(&self) -> impl Iterator<Item = &Run> {
        self.paragraphs.iter().flat_map(|p| p.runs.iter())
    }
}

impl FromIterator<Paragraph> for StyledDocument {
    fn from_iter<I: IntoIterator<Item = Paragraph>>(iter: I) -> Self {
        Self {
            paragraphs: iter.into_iter().collect(),
        }
    }
}
