//! # steamdoc-services
//!
//! Clients for the two external services steamdoc talks to:
//!
//! - [`GeminiClient`] - prompt in, generated text out
//! - [`GoogleTranslator`] - text plus a language code in, translated text out
//!
//! Both sit behind the [`TextGenerator`] and [`Translator`] traits so the
//! background [`worker`] can be driven by fakes in tests.
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use steamdoc_services::{worker, GeminiClient, GeminiConfig, GenerationJob, GoogleTranslator};
//!
//! let generator = Arc::new(GeminiClient::new(GeminiConfig::new("AIzaSy...", "gemini-pro"))?);
//! let translator = Arc::new(GoogleTranslator::new()?);
//!
//! let handle = worker::spawn(
//!     GenerationJob::new("Describe volcanoes").translate_to("ne"),
//!     generator,
//!     translator,
//! );
//! let text = handle.wait()?;
//! println!("{}", text.text);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod gemini;
pub mod service;
pub mod translate;
pub mod worker;

pub use error::{JobError, Result, ServiceError};
pub use gemini::{GeminiClient, GeminiConfig, DEFAULT_GEMINI_URL};
pub use service::{TextGenerator, Translator};
pub use translate::{GoogleTranslator, DEFAULT_TRANSLATE_URL};
pub use worker::{GeneratedText, GenerationJob, JobHandle};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
