//! Error types for the commentary collaborator

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoachError {
    #[error("LLM_API_KEY not set")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("Empty response")]
    EmptyResponse,

    #[error("Timed out after {0}ms")]
    Timeout(u64),

    #[error("Runtime error: {0}")]
    Runtime(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CoachError>;
