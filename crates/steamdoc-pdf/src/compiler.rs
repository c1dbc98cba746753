//! Typst to PDF compiler
//!
//! Compiles Typst markup to PDF bytes using typst-as-lib.

use std::path::Path;

use crate::error::{PdfError, Result};
use typst_as_lib::typst_kit_options::TypstKitFontOptions;
use typst_as_lib::TypstEngine;

/// Compiler for converting Typst markup to PDF
pub struct Compiler;

impl Compiler {
    /// Compile Typst markup to PDF bytes
    pub fn compile(markup: &str) -> Result<Vec<u8>> {
        Self::compile_with_fonts::<&Path>(markup, &[])
    }

    /// Compile with extra font files
    ///
    /// System fonts and the fonts bundled with Typst are always searched, so
    /// the fallback families in the preamble resolve on any machine.
    pub fn compile_with_fonts<P: AsRef<Path>>(markup: &str, font_paths: &[P]) -> Result<Vec<u8>> {
        let mut font_data = Vec::with_capacity(font_paths.len());
        for font_path in font_paths {
            let font_path = font_path.as_ref();
            let font_bytes = std::fs::read(font_path).map_err(|e| {
                PdfError::Font(format!(
                    "Failed to read font {}: {}",
                    font_path.display(),
                    e
                ))
            })?;
            font_data.push(font_bytes);
        }

        let mut builder = TypstEngine::builder()
            .main_file(markup.to_string())
            .search_fonts_with(
                TypstKitFontOptions::default()
                    .include_system_fonts(true)
                    .include_embedded_fonts(true),
            );
        if !font_data.is_empty() {
            builder = builder.fonts(font_data);
        }

        let engine = builder.build();
        let compiled = engine.compile();

        for warning in &compiled.warnings {
            log::warn!("typst warning: {}", warning.message);
        }

        let document = compiled
            .output
            .map_err(|e| PdfError::Compilation(format!("{:?}", e)))?;

        let options = typst_pdf::PdfOptions::default();
        let pdf_bytes = typst_pdf::pdf(&document, &options)
            .map_err(|e| PdfError::Compilation(format!("PDF generation failed: {:?}", e)))?;

        Ok(pdf_bytes.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_simple() {
        let markup = "#block(below: 12pt, text(size: 14pt, weight: \"bold\", \"Hello\"))\n";
        let result = Compiler::compile(markup);

        assert!(result.is_ok(), "Compilation failed: {:?}", result.err());
        assert!(result.unwrap().starts_with(b"%PDF"));
    }

    #[test]
    fn test_unknown_family_falls_back_to_bundled_font() {
        let markup = "#set text(font: (\"No Such Family\", \"Libertinus Serif\"))\nVolcanoes erupt loudly\n";
        let pdf = Compiler::compile(markup).unwrap();
        assert!(contains(&pdf, b"/FontFile"), "no embedded font program");
        assert!(contains(&pdf, b"LibertinusSerif"), "fallback family not used");
    }

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    #[test]
    fn test_compile_emphasis() {
        let markup = "#block(below: 8pt, text(\"Use \") + emph(\"clay\"))\n#v(6pt)\n";
        let result = Compiler::compile(markup);
        assert!(result.is_ok(), "Compilation failed: {:?}", result.err());
    }

    #[test]
    fn test_missing_font_file() {
        let err = Compiler::compile_with_fonts("hi", &["/nonexistent/font.ttf"]).unwrap_err();
        assert!(matches!(err, PdfError::Font(_)));
    }

    #[test]
    fn test_compile_error() {
        let result = Compiler::compile("#undefined_function_xyz()");
        assert!(matches!(result, Err(PdfError::Compilation(_))));
    }
}
