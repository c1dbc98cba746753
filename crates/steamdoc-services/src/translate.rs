//! Google Translate client
//!
//! Uses the public `translate_a/single` endpoint. The whole text is sent in
//! one request; the response lists translated segments which are joined back
//! together in order.

use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::Value;

use crate::error::{Result, ServiceError};
use crate::service::Translator;

/// Default translation endpoint base URL
pub const DEFAULT_TRANSLATE_URL: &str = "https://translate.googleapis.com";

/// Client for Google Translate
#[derive(Debug, Clone)]
pub struct GoogleTranslator {
    base_url: String,
    client: Client,
}

impl GoogleTranslator {
    /// Create a client for the default endpoint
    pub fn new() -> Result<Self> {
        Self::with_url(DEFAULT_TRANSLATE_URL, Duration::from_secs(30))
    }

    /// Create a client for a custom endpoint
    pub fn with_url(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { base_url, client })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Translator for GoogleTranslator {
    fn name(&self) -> &'static str {
        "google"
    }

    fn translate(&self, text: &str, target: &str) -> Result<String> {
        log::debug!("translating {} chars to {}", text.len(), target);

        let url = format!("{}/translate_a/single", self.base_url);
        let response = self
            .client
            .post(&url)
            .query(&[("client", "gtx"), ("sl", "auto"), ("tl", target), ("dt", "t")])
            .form(&[("q", text)])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ServiceError::ServerError {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text()?;
        parse_translate_response(&body)
    }
}

/// Join the translated segments of a `translate_a/single` response
///
/// The body is a nested array whose first element lists
/// `[translated, original, ...]` segments.
pub fn parse_translate_response(body: &str) -> Result<String> {
    let value: Value = serde_json::from_str(body)?;
    let segments = value
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| ServiceError::InvalidResponse("missing translation segments".to_string()))?;

    let text: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    if text.is_empty() {
        return Err(ServiceError::EmptyResponse);
    }
    Ok(text)
}
