//! Behaviour tests for the markup tokenizer and view renderer
//!
//! Each scenario pins the exact run sequence the renderers rely on.

use steamdoc_ast::{Run, RunStyle};
use steamdoc_core::{tokenize, TextBuffer, ViewRenderer};

/// Remove every marker character, the way a reader would see the text
fn strip_markers(raw: &str) -> String {
    raw.replace('*', "")
}

#[test]
fn test_mixed_paragraph_scenario() {
    let doc = tokenize("**Science** and *Art* are linked");
    assert_eq!(doc.len(), 1);
    assert_eq!(
        doc.paragraphs[0].runs,
        vec![
            Run::heading("Science"),
            Run::plain("and "),
            Run::italic("Art"),
            Run::plain("are "),
            Run::plain("linked "),
        ]
    );
}

#[test]
fn test_three_double_markers_scenario() {
    let doc = tokenize("**Science** **Technology** **Engineering**");
    assert_eq!(
        doc.paragraphs[0].runs,
        vec![
            Run::heading("Science"),
            Run::heading("Technology"),
            Run::subheading("Engineering"),
        ]
    );
}

#[test]
fn test_unmarked_word_still_advances_counter() {
    let doc = tokenize("The **Science** **Technology**");
    let styles: Vec<_> = doc.paragraphs[0].runs.iter().map(|r| r.style).collect();
    assert_eq!(
        styles,
        vec![RunStyle::Plain, RunStyle::Heading, RunStyle::Subheading]
    );
}

#[test]
fn test_late_double_marker_is_subheading_even_if_first() {
    let doc = tokenize("Explore the **Water** cycle");
    assert_eq!(doc.paragraphs[0].runs[2], Run::subheading("Water"));
}

#[test]
fn test_single_marker_is_italic_anywhere() {
    let text = "*one* two three four five six *seven*";
    let doc = tokenize(text);
    let runs = &doc.paragraphs[0].runs;
    assert_eq!(runs[0], Run::italic("one"));
    assert_eq!(runs[6], Run::italic("seven"));
}

#[test]
fn test_unmarked_paragraphs_are_plain_words() {
    let inputs = ["hello", "a quick brown fox", "trailing space ", "x  y"];
    for input in inputs {
        let doc = tokenize(input);
        let para = &doc.paragraphs[0];
        assert!(para.runs.iter().all(|r| r.style == RunStyle::Plain));
        let joined: String = para.runs.iter().map(|r| r.text.as_str()).collect();
        let expected: String = input.split(' ').map(|w| format!("{} ", w)).collect();
        assert_eq!(joined, expected, "input: {:?}", input);
    }
}

#[test]
fn test_view_round_trip_preserves_spacing() {
    let raw = "**Science** and *Art* are linked\n\
\n\
**Materials:** paper,  glue and *scissors*\n\
Plain closing line";
    let doc = tokenize(raw);
    let mut buffer = TextBuffer::new();
    ViewRenderer::render(&doc, &mut buffer);

    let visible = buffer.text();
    let lines: Vec<&str> = visible.lines().collect();
    let expected: Vec<String> = raw.split('\n').map(strip_markers).collect();
    assert_eq!(lines.len(), expected.len());
    for (line, want) in lines.iter().zip(&expected) {
        // Every word is followed by exactly one separator, so only the final
        // one is extra
        assert_eq!(line.strip_suffix(' ').unwrap_or(line), want);
    }
}

#[test]
fn test_empty_text_renders_nothing() {
    let doc = tokenize("");
    assert!(doc.is_empty());

    let mut buffer = TextBuffer::new();
    ViewRenderer::render(&doc, &mut buffer);
    assert_eq!(buffer.text(), "");
}

#[test]
fn test_unmarked_generation_degrades_to_plain() {
    let doc = tokenize("Heading without markers\n- bullet one\n- bullet two");
    assert!(doc.runs().all(|r| r.style == RunStyle::Plain));
}
