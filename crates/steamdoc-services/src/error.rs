//! Error types for service operations

use thiserror::Error;

/// Errors raised by a single service call
#[derive(Error, Debug)]
pub enum ServiceError {
    /// HTTP request error
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned an error status
    #[error("Server error ({status}): {message}")]
    ServerError {
        status: u16,
        message: String,
    },

    /// Response body could not be decoded
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The service answered without any text
    #[error("Could not generate any meaningful output, please try again.")]
    EmptyResponse,

    /// JSON decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for service calls
pub type Result<T> = std::result::Result<T, ServiceError>;

/// Errors delivered by a background generation job
#[derive(Error, Debug)]
pub enum JobError {
    /// The text-generation step failed
    #[error("Error generating STEAM ideas: {0}")]
    Generation(#[source] ServiceError),

    /// The translation step failed
    #[error("Error in translation: {0}")]
    Translation(#[source] ServiceError),

    /// The worker thread ended without reporting
    #[error("Generation worker stopped before reporting a result")]
    WorkerLost,
}
