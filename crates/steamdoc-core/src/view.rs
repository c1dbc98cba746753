//! Interactive view renderer
//!
//! Projects a [`StyledDocument`] onto a live text surface. The surface is
//! anything that can be cleared, appended to with a style, and locked
//! against edits; [`TextBuffer`] is the in-memory implementation and the
//! CLI provides a terminal one.

use steamdoc_ast::{RunStyle, StyledDocument};

/// Default body size in points
pub const BODY_SIZE_PT: u8 = 11;

/// Font attributes for one of the four view styles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewStyle {
    /// Font size in points
    pub size_pt: u8,
    /// Bold weight
    pub bold: bool,
    /// Italic slant
    pub italic: bool,
}

impl ViewStyle {
    /// Visual style for a run style
    pub fn for_run(style: RunStyle) -> Self {
        match style {
            RunStyle::Heading => Self {
                size_pt: 14,
                bold: true,
                italic: false,
            },
            RunStyle::Subheading => Self {
                size_pt: 12,
                bold: true,
                italic: false,
            },
            RunStyle::Italic => Self {
                size_pt: BODY_SIZE_PT,
                bold: false,
                italic: true,
            },
            RunStyle::Plain => Self {
                size_pt: BODY_SIZE_PT,
                bold: false,
                italic: false,
            },
        }
    }
}

/// An appendable, lockable text surface
pub trait TextSurface {
    /// Remove all content
    fn clear(&mut self);

    /// Append text with a style (`Plain` is the surface default)
    fn insert(&mut self, text: &str, style: RunStyle);

    /// Lock or unlock the surface against edits
    fn set_read_only(&mut self, read_only: bool);
}

/// Renderer for interactive text surfaces
pub struct ViewRenderer;

impl ViewRenderer {
    /// Replace the surface contents with the document
    ///
    /// Each paragraph's runs are written in order followed by a line break.
    /// Marked runs are followed by an unstyled space so words stay apart.
    /// The surface is left read-only.
    pub fn render<S: TextSurface + ?Sized>(doc: &StyledDocument, surface: &mut S) {
        surface.set_read_only(false);
        surface.clear();

        for paragraph in &doc.paragraphs {
            for run in &paragraph.runs {
                surface.insert(&run.text, run.style);
                if run.needs_separator() {
                    surface.insert(" ", RunStyle::Plain);
                }
            }
            surface.insert("\n", RunStyle::Plain);
        }

        surface.set_read_only(true);
    }
}

/// A styled span in a [`TextBuffer`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Span text
    pub text: String,
    /// Span style
    pub style: RunStyle,
}

/// In-memory text surface
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    spans: Vec<Span>,
    read_only: bool,
}

impl TextBuffer {
    /// Create an empty, editable buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Styled spans in insertion order
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Visible text with styles discarded
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// True if nothing but whitespace has been written
    pub fn is_blank(&self) -> bool {
        self.spans.iter().all(|s| s.text.trim().is_empty())
    }

    /// Whether edits are currently refused
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }
}

impl TextSurface for TextBuffer {
    fn clear(&mut self) {
        if self.read_only {
            log::warn!("ignoring clear on read-only text buffer");
            return;
        }
        self.spans.clear();
    }

    fn insert(&mut self, text: &str, style: RunStyle) {
        if self.read_only {
            log::warn!("ignoring insert on read-only text buffer");
            return;
        }
        self.spans.push(Span {
            text: text.to_string(),
            style,
        });
    }

    fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }
}
