//! # steamdoc-ooxml
//!
//! Word-processor export for steamdoc: writes a [`StyledDocument`] as a DOCX
//! package with one justified paragraph per document paragraph.
//!
//! ## Example
//!
//! ```no_run
//! use steamdoc_ast::{Paragraph, Run, StyledDocument};
//! use steamdoc_ooxml::{export_with_options, DocxOptions};
//!
//! let doc: StyledDocument = vec![Paragraph::with_runs(
//!     "**Science**",
//!     vec![Run::heading("Science")],
//! )]
//! .into_iter()
//! .collect();
//!
//! export_with_options(&doc, "ideas.docx", &DocxOptions::default().with_title("Ideas"))?;
//! # Ok::<(), steamdoc_ooxml::OoxmlError>(())
//! ```
//!
//! [`StyledDocument`]: steamdoc_ast::StyledDocument

pub mod archive;
pub mod error;
pub mod package;
pub mod writer;

#[cfg(test)]
mod test_utils;

pub use archive::OoxmlArchive;
pub use error::{OoxmlError, Result};
pub use writer::{export, export_with_options, DocxOptions, DocxWriter};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
