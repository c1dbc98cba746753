//! Configuration
//!
//! Settings are loaded from `steamdoc.toml` in the working directory (or a
//! file named with `--config`):
//!
//! ```toml
//! [generation]
//! model = "gemini-pro"
//! timeout_secs = 30
//!
//! [translation]
//! base_url = "https://translate.googleapis.com"
//!
//! [export]
//! default_format = "pdf"
//! font = "Helvetica"
//! font_size_pt = 11
//! ```
//!
//! The API key lives in [`Credentials`], which is process-scoped and handed
//! to the service clients explicitly.

mod credentials;
mod settings;


use std::path::PathBuf;

use thiserror::Error;

pub use credentials::{validate_api_key, Credentials, API_KEY_ENV, API_KEY_LEN, API_KEY_PREFIX};
pub use settings::{
    ExportFormat, ExportSettings, GenerationSettings, Settings, TranslationSettings,
    DEFAULT_CONFIG_FILE,
};

/// Errors raised while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("Failed to read config {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML for [`Settings`]
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// API key does not look like a Gemini key
    #[error("Invalid API Key, Please enter a valid key")]
    InvalidApiKey,

    /// No API key was configured
    #[error("No API key configured (set {} or use --api-key)", API_KEY_ENV)]
    MissingApiKey,

    /// Unknown export format name or extension
    #[error("Unsupported export format: {0}")]
    UnknownFormat(String),
}
