//! Styled document to Typst markup
//!
//! Works a whole paragraph at a time from its source line:
//!
//! - a line containing `**` becomes one bold 14pt block, markers stripped
//! - otherwise a line containing `*` alternates normal and emphasized spans,
//!   an unpaired trailing marker runs to the end of the line
//! - any other non-blank line is an 11pt block followed by a 6pt spacer
//! - blank lines are dropped

use steamdoc_ast::{Paragraph, StyledDocument, MARKER};

/// Families tried after the configured font; both ship with Typst.
const FALLBACK_FONTS: &[&str] = &["Libertinus Serif", "New Computer Modern"];

/// Page and text settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSetup {
    /// Body font family
    pub font: String,
    /// Body size in points
    pub font_size_pt: u32,
    /// Document title metadata
    pub title: Option<String>,
}

impl Default for PageSetup {
    fn default() -> Self {
        Self {
            font: "Helvetica".to_string(),
            font_size_pt: 11,
            title: None,
        }
    }
}

/// How a paragraph is laid out
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParagraphLayout {
    /// Whole paragraph as a heading block
    Heading(String),
    /// Alternating spans; `true` marks an emphasized span
    Emphasis(Vec<(String, bool)>),
    /// Plain body text
    Body(String),
    /// Nothing is emitted
    Blank,
}

impl ParagraphLayout {
    /// Classify a paragraph from its source line
    pub fn of(para: &Paragraph) -> Self {
        let source = para.source.as_str();
        if source.trim().is_empty() {
            Self::Blank
        } else if source.contains("**") {
            Self::Heading(source.chars().filter(|&c| c != MARKER).collect())
        } else if source.contains(MARKER) {
            let spans = source
                .split(MARKER)
                .enumerate()
                .filter(|(_, segment)| !segment.is_empty())
                .map(|(i, segment)| (segment.to_string(), i % 2 == 1))
                .collect();
            Self::Emphasis(spans)
        } else {
            Self::Body(source.to_string())
        }
    }
}

/// Transpiler for converting a styled document to Typst markup
pub struct Transpiler;

impl Transpiler {
    /// Transpile with default page settings
    pub fn transpile(doc: &StyledDocument) -> String {
        Self::transpile_with(doc, &PageSetup::default())
    }

    /// Transpile a document to Typst markup
    pub fn transpile_with(doc: &StyledDocument, setup: &PageSetup) -> String {
        let mut output = String::new();

        if let Some(ref title) = setup.title {
            output.push_str(&format!(
                "#set document(title: \"{}\")\n",
                escape_string(title)
            ));
        }
        output.push_str("#set page(paper: \"us-letter\")\n");
        output.push_str(&format!(
            "#set text(font: ({}), size: {}pt)\n",
            font_families(&setup.font),
            setup.font_size_pt
        ));

        for para in &doc.paragraphs {
            output.push_str(&Self::transpile_paragraph(para));
        }

        output
    }

    /// Transpile a single paragraph
    pub fn transpile_paragraph(para: &Paragraph) -> String {
        match ParagraphLayout::of(para) {
            ParagraphLayout::Heading(text) => format!(
                "#block(below: 12pt, text(size: 14pt, weight: \"bold\", \"{}\"))\n",
                escape_string(&text)
            ),
            ParagraphLayout::Emphasis(spans) => {
                let body = spans
                    .iter()
                    .map(|(text, emphasized)| {
                        if *emphasized {
                            format!("emph(\"{}\")", escape_string(text))
                        } else {
                            format!("text(\"{}\")", escape_string(text))
                        }
                    })
                    .collect::<Vec<_>>()
                    .join(" + ");
                format!("#block(below: 8pt, {})\n", body)
            }
            ParagraphLayout::Body(text) => format!(
                "#block(below: 8pt, text(\"{}\"))\n#v(6pt)\n",
                escape_string(&text)
            ),
            ParagraphLayout::Blank => String::new(),
        }
    }
}

fn font_families(font: &str) -> String {
    std::iter::once(font)
        .chain(FALLBACK_FONTS.iter().copied())
        .map(|family| format!("\"{}\"", escape_string(family)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Escape a string for a Typst string literal
fn escape_string(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn para(source: &str) -> Paragraph {
        Paragraph::with_runs(source, Vec::new())
    }

    #[test]
    fn test_heading_wins_over_italic() {
        assert_eq!(
            ParagraphLayout::of(&para("**Science** and *Art*")),
            ParagraphLayout::Heading("Science and Art".to_string())
        );
        let out = Transpiler::transpile_paragraph(&para("**Science** and *Art*"));
        assert_eq!(
            out,
            "#block(below: 12pt, text(size: 14pt, weight: \"bold\", \"Science and Art\"))\n"
        );
    }

    #[test]
    fn test_italic_pairs() {
        assert_eq!(
            ParagraphLayout::of(&para("Use *clay* and *water* now")),
            ParagraphLayout::Emphasis(vec![
                ("Use ".to_string(), false),
                ("clay".to_string(), true),
                (" and ".to_string(), false),
                ("water".to_string(), true),
                (" now".to_string(), false),
            ])
        );
    }

    #[test]
    fn test_unpaired_marker_closes_at_end() {
        assert_eq!(
            ParagraphLayout::of(&para("Try *this at home")),
            ParagraphLayout::Emphasis(vec![
                ("Try ".to_string(), false),
                ("this at home".to_string(), true),
            ])
        );
    }

    #[test]
    fn test_italic_markup() {
        let out = Transpiler::transpile_paragraph(&para("*Art* class"));
        assert_eq!(out, "#block(below: 8pt, emph(\"Art\") + text(\" class\"))\n");
    }

    #[test]
    fn test_body_has_spacer() {
        let out = Transpiler::transpile_paragraph(&para("Plain words"));
        assert_eq!(out, "#block(below: 8pt, text(\"Plain words\"))\n#v(6pt)\n");
    }

    #[test]
    fn test_blank_dropped() {
        assert_eq!(Transpiler::transpile_paragraph(&para("")), "");
        assert_eq!(Transpiler::transpile_paragraph(&para("   ")), "");
    }

    #[test]
    fn test_document_preamble() {
        let setup = PageSetup {
            title: Some("Rivers".to_string()),
            ..PageSetup::default()
        };
        let out = Transpiler::transpile_with(&StyledDocument::new(), &setup);
        assert!(out.starts_with("#set document(title: \"Rivers\")\n"));
        assert!(out.contains(
            "#set text(font: (\"Helvetica\", \"Libertinus Serif\", \"New Computer Modern\"), size: 11pt)\n"
        ));
        assert!(!out.contains("#block"));
    }

    #[test]
    fn test_escape_string() {
        assert_eq!(escape_string("say \"hi\""), "say \\\"hi\\\"");
        assert_eq!(escape_string("a\\b"), "a\\\\b");
        assert_eq!(escape_string("#[$]"), "#[$]");
    }
}
