//! Markup tokenizer
//!
//! Splits generated text into paragraphs (one per line) and words (split on
//! single spaces), classifying each word by the marker it carries and its
//! position in the line.
//!
//! # Classification
//!
//! A zero-based counter `n` advances once per word, marked or not:
//!
//! | word contains | `n < 2`   | otherwise    |
//! |---------------|-----------|--------------|
//! | `**`          | Heading   | Subheading   |
//! | `*`           | Italic    | Italic       |
//! | nothing       | Plain     | Plain        |
//!
//! Plain words keep a trailing space so word boundaries survive rendering.
//! Empty words (from repeated spaces) become a Plain run of one space.
//!
//! # Example
//!
//! ```
//! use steamdoc_ast::Run;
//! use steamdoc_core::tokenizer::tokenize;
//!
//! let doc = tokenize("The **Science** **Technology**");
//! assert_eq!(
//!     doc.paragraphs[0].runs,
//!     vec![Run::plain("The "), Run::heading("Science"), Run::subheading("Technology")]
//! );
//! ```

use steamdoc_ast::{Paragraph, Run, RunStyle, StyledDocument};

/// Number of leading words of a line that may be headings
const HEADING_WORDS: usize = 2;

const DOUBLE_MARKER: &str = "**";
const SINGLE_MARKER: char = '*';

/// Tokenize raw text into a styled document
///
/// Empty input yields a document with no paragraphs. Every other input yields
/// one paragraph per line, including blank lines (which have no runs).
pub fn tokenize(raw: &str) -> StyledDocument {
    if raw.is_empty() {
        return StyledDocument::new();
    }

    // Normalize line endings
    let text = raw.replace("\r\n", "\n");

    let doc: StyledDocument = text.split('\n').map(tokenize_line).collect();
    log::debug!("tokenized {} paragraph(s)", doc.len());
    doc
}

/// Tokenize a single line into a paragraph
pub fn tokenize_line(line: &str) -> Paragraph {
    if line.is_empty() {
        return Paragraph::new();
    }

    let runs = line
        .split(' ')
        .enumerate()
        .map(|(n, word)| classify_word(word, n))
        .collect();

    Paragraph::with_runs(line, runs)
}

/// Classify one word at zero-based position `n` within its line
fn classify_word(word: &str, n: usize) -> Run {
    match word_style(word, n) {
        RunStyle::Plain => Run::plain(format!("{} ", word)),
        style => Run::new(word, style),
    }
}

/// Style for a word; the double marker is checked before the single one
pub fn word_style(word: &str, n: usize) -> RunStyle {
    if word.contains(DOUBLE_MARKER) {
        if n < HEADING_WORDS {
            RunStyle::Heading
        } else {
            RunStyle::Subheading
        }
    } else if word.contains(SINGLE_MARKER) {
        RunStyle::Italic
    } else {
        RunStyle::Plain
    }
}
