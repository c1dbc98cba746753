//! Terminal text surface
//!
//! Writes rendered runs to a terminal with crossterm attributes. Terminals
//! have one font size, so size is shown through emphasis: headings are bold,
//! underlined and coloured, subheadings bold, italics italic.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, SetAttribute, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use steamdoc_ast::RunStyle;
use steamdoc_core::view::BODY_SIZE_PT;
use steamdoc_core::{TextSurface, ViewStyle};

/// A [`TextSurface`] backed by a terminal or any writer
pub struct TerminalSurface<W: Write> {
    writer: W,
    styled: bool,
    clear_screen: bool,
    read_only: bool,
    error: Option<io::Error>,
}

impl<W: Write> TerminalSurface<W> {
    /// Create a surface
    ///
    /// `styled` enables escape sequences; `clear_screen` makes
    /// [`TextSurface::clear`] wipe the screen instead of doing nothing.
    pub fn new(writer: W, styled: bool, clear_screen: bool) -> Self {
        Self {
            writer,
            styled,
            clear_screen,
            read_only: false,
            error: None,
        }
    }

    /// First write error seen since the last call
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    /// Recover the writer
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn record(&mut self, result: io::Result<()>) {
        if let Err(e) = result {
            log::warn!("terminal write failed: {}", e);
            self.error.get_or_insert(e);
        }
    }

    fn write_styled(&mut self, text: &str, style: RunStyle) -> io::Result<()> {
        if !self.styled {
            return self.writer.write_all(text.as_bytes());
        }

        let view = ViewStyle::for_run(style);
        if view.bold {
            queue!(self.writer, SetAttribute(Attribute::Bold))?;
        }
        if view.italic {
            queue!(self.writer, SetAttribute(Attribute::Italic))?;
        }
        if view.size_pt > BODY_SIZE_PT + 1 {
            queue!(
                self.writer,
                SetAttribute(Attribute::Underlined),
                SetForegroundColor(Color::Cyan)
            )?;
        }
        queue!(self.writer, Print(text), SetAttribute(Attribute::Reset))
    }
}

impl<W: Write> TextSurface for TerminalSurface<W> {
    fn clear(&mut self) {
        if self.read_only || !self.clear_screen || !self.styled {
            return;
        }
        let result = queue!(self.writer, Clear(ClearType::All), MoveTo(0, 0));
        self.record(result);
    }

    fn insert(&mut self, text: &str, style: RunStyle) {
        if self.read_only {
            return;
        }
        let result = self.write_styled(text, style);
        self.record(result);
    }

    fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
        if read_only {
            let result = self.writer.flush();
            self.record(result);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use steamdoc_core::{tokenize, ViewRenderer};

    #[test]
    fn test_plain_output_drops_markers() {
        let mut surface = TerminalSurface::new(Vec::new(), false, false);
        ViewRenderer::render(&tokenize("**Science** and *Art*\nnext line"), &mut surface);
        let out = String::from_utf8(surface.into_inner()).unwrap();
        assert_eq!(out, "Science and Art \nnext line \n");
    }

    #[test]
    fn test_styled_output_uses_escapes() {
        let mut surface = TerminalSurface::new(Vec::new(), true, false);
        ViewRenderer::render(&tokenize("**Science**"), &mut surface);
        let out = String::from_utf8(surface.into_inner()).unwrap();
        assert!(out.contains("\u{1b}["));
        assert!(out.contains("Science"));
        assert!(!out.contains('*'));
    }

    #[test]
    fn test_read_only_after_render() {
        let mut surface = TerminalSurface::new(Vec::new(), false, false);
        ViewRenderer::render(&tokenize("done"), &mut surface);
        surface.insert("late", RunStyle::Plain);
        let out = String::from_utf8(surface.into_inner()).unwrap();
        assert_eq!(out, "done \n");
    }

    const CLEAR_ALL: &str = "\u{1b}[2J";

    #[test]
    fn test_clear_screen_on_render() {
        let mut surface = TerminalSurface::new(Vec::new(), true, true);
        ViewRenderer::render(&tokenize("Rivers flow"), &mut surface);
        let out = String::from_utf8(surface.into_inner()).unwrap();
        assert!(out.starts_with(CLEAR_ALL));
        assert!(out.contains("Rivers"));
    }

    #[test]
    fn test_clear_screen_needs_styling() {
        let mut surface = TerminalSurface::new(Vec::new(), false, true);
        ViewRenderer::render(&tokenize("Rivers flow"), &mut surface);
        let out = String::from_utf8(surface.into_inner()).unwrap();
        assert_eq!(out, "Rivers flow \n");

        let mut surface = TerminalSurface::new(Vec::new(), true, false);
        ViewRenderer::render(&tokenize("Rivers flow"), &mut surface);
        let out = String::from_utf8(surface.into_inner()).unwrap();
        assert!(!out.contains(CLEAR_ALL));
    }
}
