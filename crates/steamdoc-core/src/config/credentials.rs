//! API key store
//!
//! Holds the generation-service key and the show-key preference for the
//! lifetime of the process. Callers read it explicitly and pass the key to
//! the clients that need it.

use super::ConfigError;

/// Environment variable consulted for the API key
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
/// Expected key length
pub const API_KEY_LEN: usize = 39;
/// Expected key prefix
pub const API_KEY_PREFIX: &str = "AIzaSy";

/// Check that a key looks like a Gemini API key
pub fn validate_api_key(key: &str) -> bool {
    key.len() == API_KEY_LEN && key.starts_with(API_KEY_PREFIX)
}

/// Process-scoped credentials
#[derive(Clone, Default)]
pub struct Credentials {
    api_key: Option<String>,
    show_key: bool,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("show_key", &self.show_key)
            .finish()
    }
}

impl Credentials {
    /// Empty credentials
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the key from, in priority order: an explicit value, the
    /// environment, the config file
    pub fn resolve(explicit: Option<&str>, config_key: Option<&str>) -> Result<Self, ConfigError> {
        let env_key = std::env::var(API_KEY_ENV).ok();
        let key = explicit
            .or(env_key.as_deref())
            .or(config_key)
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let mut credentials = Self::new();
        credentials.set_api_key(key)?;
        Ok(credentials)
    }

    /// Current key
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Replace the key; invalid keys leave the current one untouched
    pub fn set_api_key(&mut self, key: &str) -> Result<(), ConfigError> {
        let key = key.trim();
        if !validate_api_key(key) {
            return Err(ConfigError::InvalidApiKey);
        }
        self.api_key = Some(key.to_string());
        log::debug!("API key updated");
        Ok(())
    }

    /// Whether the key is shown in clear
    pub fn show_key(&self) -> bool {
        self.show_key
    }

    /// Set the show-key preference
    pub fn set_show_key(&mut self, show: bool) {
        self.show_key = show;
    }

    /// Flip the show-key preference, returning the new value
    pub fn toggle_show_key(&mut self) -> bool {
        self.show_key = !self.show_key;
        self.show_key
    }

    /// Key for display, masked unless show-key is on
    pub fn display_key(&self) -> String {
        match &self.api_key {
            None => "(not set)".to_string(),
            Some(key) if self.show_key => key.clone(),
            Some(key) => "*".repeat(key.chars().count()),
        }
    }
}
