//! DOCX writer
//!
//! Generates `word/document.xml` from a [`StyledDocument`]: one `w:p` per
//! paragraph, justified, one `w:r` per run. Marked runs carry their word
//! without a trailing space, so a plain separator run follows each of them.

use std::io::Write;
use std::path::Path;

use steamdoc_ast::{Paragraph, Run, RunStyle, StyledDocument};

use crate::archive::OoxmlArchive;
use crate::error::{OoxmlError, Result};
use crate::package;

/// Heading run size in half-points (14pt)
pub const HEADING_HALF_POINTS: u32 = 28;
/// Subheading run size in half-points (13pt)
pub const SUBHEADING_HALF_POINTS: u32 = 26;

/// Document-level options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocxOptions {
    /// Default text font
    pub font: String,
    /// Default text size in points
    pub font_size_pt: u32,
    /// Title written to the core properties, if any
    pub title: Option<String>,
}

impl Default for DocxOptions {
    fn default() -> Self {
        Self {
            font: "Helvetica".to_string(),
            font_size_pt: 11,
            title: None,
        }
    }
}

impl DocxOptions {
    /// Set the document title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// DOCX document writer
#[derive(Debug, Default)]
pub struct DocxWriter {
    /// Output buffer for document.xml
    output: String,
    options: DocxOptions,
}

impl DocxWriter {
    /// Create a writer with the given options
    pub fn new(options: DocxOptions) -> Self {
        Self {
            output: String::new(),
            options,
        }
    }

    /// Generate a complete DOCX package
    pub fn generate(doc: &StyledDocument, options: &DocxOptions) -> Result<Vec<u8>> {
        let mut writer = Self::new(options.clone());
        writer.build_archive(doc).to_bytes()
    }

    /// Assemble all package parts
    fn build_archive(&mut self, doc: &StyledDocument) -> OoxmlArchive {
        let title = self.options.title.clone();
        let with_core = title.is_some();

        let mut archive = OoxmlArchive::new();
        archive.set_string("[Content_Types].xml", package::content_types_xml(with_core));
        archive.set_string("_rels/.rels", package::root_rels_xml(with_core));
        archive.set_string("word/_rels/document.xml.rels", package::document_rels_xml());
        archive.set_string(
            package::STYLES_PART,
            package::styles_xml(&self.options.font, self.options.font_size_pt * 2),
        );
        if let Some(title) = title {
            archive.set_string(package::CORE_PART, package::core_xml(&title));
        }
        archive.set_string(package::DOCUMENT_PART, self.generate_document_xml(doc));
        archive
    }

    /// Generate word/document.xml
    pub fn generate_document_xml(&mut self, doc: &StyledDocument) -> String {
        self.output.clear();

        self.output
            .push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        self.output.push('\n');
        self.output.push_str(
            r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">"#,
        );
        self.output.push('\n');
        self.output.push_str("<w:body>\n");

        for para in &doc.paragraphs {
            self.generate_paragraph(para);
        }

        // Letter page, one inch margins
        self.output.push_str("<w:sectPr>\n");
        self.output
            .push_str("<w:pgSz w:w=\"12240\" w:h=\"15840\"/>\n");
        self.output.push_str(
            "<w:pgMar w:top=\"1440\" w:right=\"1440\" w:bottom=\"1440\" w:left=\"1440\" w:header=\"720\" w:footer=\"720\" w:gutter=\"0\"/>\n",
        );
        self.output.push_str("</w:sectPr>\n");

        self.output.push_str("</w:body>\n");
        self.output.push_str("</w:document>");

        std::mem::take(&mut self.output)
    }

    fn generate_paragraph(&mut self, para: &Paragraph) {
        self.output.push_str("<w:p>\n");
        self.output.push_str("<w:pPr>\n");
        self.output.push_str("<w:jc w:val=\"both\"/>\n");
        self.output.push_str("</w:pPr>\n");

        for run in &para.runs {
            self.generate_run(run);
            if run.needs_separator() {
                self.generate_text_run(" ");
            }
        }

        self.output.push_str("</w:p>\n");
    }

    fn generate_run(&mut self, run: &Run) {
        if run.style == RunStyle::Plain {
            self.generate_text_run(&run.text);
            return;
        }

        self.output.push_str("<w:r>\n");
        self.output.push_str("<w:rPr>\n");
        match run.style {
            RunStyle::Heading => {
                self.output.push_str("<w:b/>\n");
                self.push_size(HEADING_HALF_POINTS);
            }
            RunStyle::Subheading => {
                self.output.push_str("<w:b/>\n");
                self.push_size(SUBHEADING_HALF_POINTS);
            }
            RunStyle::Italic => {
                self.output.push_str("<w:i/>\n");
            }
            RunStyle::Plain => {}
        }
        self.output.push_str("</w:rPr>\n");
        self.push_text(&run.text);
        self.output.push_str("</w:r>\n");
    }

    fn generate_text_run(&mut self, text: &str) {
        self.output.push_str("<w:r>\n");
        self.push_text(text);
        self.output.push_str("</w:r>\n");
    }

    fn push_size(&mut self, half_points: u32) {
        self.output
            .push_str(&format!("<w:sz w:val=\"{}\"/>\n", half_points));
        self.output
            .push_str(&format!("<w:szCs w:val=\"{}\"/>\n", half_points));
    }

    fn push_text(&mut self, text: &str) {
        self.output.push_str(&format!(
            "<w:t xml:space=\"preserve\">{}</w:t>\n",
            escape_xml(text)
        ));
    }
}

/// Write a DOCX file with default options
pub fn export(doc: &StyledDocument, path: impl AsRef<Path>) -> Result<()> {
    export_with_options(doc, path, &DocxOptions::default())
}

/// Write a DOCX file
///
/// The package is written to a temporary file in the target directory and
/// renamed into place; on failure no file is left at `path`.
pub fn export_with_options(
    doc: &StyledDocument,
    path: impl AsRef<Path>,
    options: &DocxOptions,
) -> Result<()> {
    let path = path.as_ref();
    let bytes = DocxWriter::generate(doc, options)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(&bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| OoxmlError::Io(e.error))?;

    log::debug!(
        "wrote {} paragraphs to {}",
        doc.paragraphs.len(),
        path.display()
    );
    Ok(())
}

/// Escape special XML characters
pub(crate) fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
