//! steamdoc CLI - Command-line interface library
//!
//! This library provides the CLI functionality for steamdoc:
//! - Generate: ask Gemini for STEAM ideas or a 5E lesson plan
//! - Render: display or export an already generated text file
//! - Tokenize: inspect how the markup is classified
//! - Interactive: a session loop with history and export
//!
//! # Binary Usage
//!
//! ```bash
//! # Generate and export
//! steamdoc generate --topic Volcanoes --outcomes "observe, model" \
//!     --age 10-12 --time 40 --output volcanoes.docx
//!
//! # Export a saved response to PDF
//! steamdoc render ideas.txt --output ideas.pdf
//!
//! # Inspect tokenization
//! steamdoc tokenize ideas.txt --json
//! ```

pub mod app;
pub mod export;
pub mod session;
pub mod terminal;

pub use app::{
    generate_command, render_command, run_cli, run_interactive, tokenize_command,
};
pub use session::{Generated, GeneratorFactory, Session, SessionError};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
