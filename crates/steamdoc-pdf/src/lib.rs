//! steamdoc-pdf - PDF export via Typst
//!
//! # Architecture
//!
//! 1. **Transpiler** - lays out each paragraph of a
//!    [`StyledDocument`](steamdoc_ast::StyledDocument) as Typst markup
//! 2. **Compiler** - compiles the markup to PDF bytes
//!
//! # Example
//!
//! ```ignore
//! use steamdoc_ast::StyledDocument;
//! use steamdoc_pdf::{Compiler, Transpiler};
//!
//! let doc = StyledDocument::new();
//! let typst_markup = Transpiler::transpile(&doc);
//! let pdf_bytes = Compiler::compile(&typst_markup)?;
//! ```

use std::io::Write;
use std::path::{Path, PathBuf};

use steamdoc_ast::StyledDocument;

mod compiler;
mod error;
mod transpiler;

pub use compiler::Compiler;
pub use error::{PdfError, Result};
pub use transpiler::{PageSetup, ParagraphLayout, Transpiler};

/// Options for a PDF export
#[derive(Debug, Clone, Default)]
pub struct PdfExportOptions {
    /// Page and text settings
    pub setup: PageSetup,
    /// Extra font files handed to Typst
    pub font_paths: Vec<PathBuf>,
}

/// Render a document to PDF bytes with default settings
pub fn render_pdf(doc: &StyledDocument) -> Result<Vec<u8>> {
    render_pdf_with_options(doc, &PdfExportOptions::default())
}

/// Render a document to PDF bytes
pub fn render_pdf_with_options(doc: &StyledDocument, options: &PdfExportOptions) -> Result<Vec<u8>> {
    let typst_markup = Transpiler::transpile_with(doc, &options.setup);
    Compiler::compile_with_fonts(&typst_markup, &options.font_paths)
}

/// Write a PDF file with default settings
pub fn export(doc: &StyledDocument, path: impl AsRef<Path>) -> Result<()> {
    export_with_options(doc, path, &PdfExportOptions::default())
}

/// Write a PDF file
///
/// Rendering happens before anything touches the filesystem. The bytes go to
/// a temporary file beside `path` which is then renamed into place.
pub fn export_with_options(
    doc: &StyledDocument,
    path: impl AsRef<Path>,
    options: &PdfExportOptions,
) -> Result<()> {
    let path = path.as_ref();
    let bytes = render_pdf_with_options(doc, options)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(&bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| PdfError::Io(e.error))?;

    log::debug!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_document() {
        let pdf = render_pdf(&StyledDocument::new()).unwrap();
        assert!(pdf.starts_with(b"%PDF"));
    }

    #[test]
    fn test_render_default_settings_embeds_font() {
        let doc: StyledDocument = vec![steamdoc_ast::Paragraph::with_runs(
            "Volcanoes erupt loudly",
            vec![steamdoc_ast::Run::plain("Volcanoes erupt loudly")],
        )]
        .into_iter()
        .collect();

        let pdf = render_pdf(&doc).unwrap();
        assert!(pdf.windows(9).any(|w| w == b"/FontFile"));
    }
}
