//! Service traits
//!
//! Implementations must be `Send + Sync`: they are shared with the
//! background worker thread.

use crate::error::Result;

/// A text-generation service
pub trait TextGenerator: Send + Sync {
    /// Human-readable name of this service
    fn name(&self) -> &'static str;

    /// Generate text for a prompt
    ///
    /// Returns [`crate::ServiceError::EmptyResponse`] when the service answers
    /// with no text.
    fn generate(&self, prompt: &str) -> Result<String>;
}

/// A machine-translation service
pub trait Translator: Send + Sync {
    /// Human-readable name of this service
    fn name(&self) -> &'static str;

    /// Translate `text` into the language identified by `target`
    /// (a two-letter code such as `ne`)
    fn translate(&self, text: &str, target: &str) -> Result<String>;
}
