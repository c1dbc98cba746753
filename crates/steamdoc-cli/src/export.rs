//! Export dispatch
//!
//! Picks DOCX or PDF for an output path and hands the document to the
//! matching writer.

use std::path::{Path, PathBuf};

use steamdoc_ast::StyledDocument;
use steamdoc_core::config::ExportSettings;
use steamdoc_core::ExportFormat;
use steamdoc_ooxml::{DocxOptions, OoxmlError};
use steamdoc_pdf::{PageSetup, PdfError, PdfExportOptions};
use thiserror::Error;

/// A failed export
#[derive(Error, Debug)]
pub enum ExportError {
    /// DOCX writer failed
    #[error(transparent)]
    Docx(#[from] OoxmlError),

    /// PDF typesetting or writing failed
    #[error(transparent)]
    Pdf(#[from] PdfError),
}

/// Choose the format: explicit choice, then the path's extension, then the
/// configured default
pub fn resolve_format(
    path: &Path,
    explicit: Option<ExportFormat>,
    default: ExportFormat,
) -> ExportFormat {
    explicit
        .or_else(|| ExportFormat::from_path(path))
        .unwrap_or(default)
}

/// Append the format's extension when the path has none
pub fn with_default_extension(path: &Path, format: ExportFormat) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(format.extension())
    }
}

/// Write `doc` to `path` in `format`
pub fn export_document(
    doc: &StyledDocument,
    path: &Path,
    format: ExportFormat,
    settings: &ExportSettings,
    title: Option<&str>,
) -> Result<(), ExportError> {
    log::debug!("exporting {} to {}", format, path.display());
    match format {
        ExportFormat::Docx => {
            let options = DocxOptions {
                font: settings.font.clone(),
                font_size_pt: settings.font_size_pt,
                title: title.map(str::to_string),
            };
            steamdoc_ooxml::export_with_options(doc, path, &options)?;
        }
        ExportFormat::Pdf => {
            let options = PdfExportOptions {
                setup: PageSetup {
                    font: settings.font.clone(),
                    font_size_pt: settings.font_size_pt,
                    title: title.map(str::to_string),
                },
                font_paths: settings.pdf_fonts.iter().map(PathBuf::from).collect(),
            };
            steamdoc_pdf::export_with_options(doc, path, &options)?;
        }
    }
    Ok(())
}
