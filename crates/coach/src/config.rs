//! Commentary configuration (`[coach]` table) and backend selection.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::canned::CannedCoach;
use crate::client::{LlmClient, DEFAULT_API_URL, DEFAULT_MODEL};
use crate::error::{CoachError, Result};
use crate::source::{CommentaryBackend, DEFAULT_FALLBACK, DEFAULT_TIMEOUT_MS};

pub const ENV_API_KEY: &str = "LLM_API_KEY";
pub const ENV_API_URL: &str = "LLM_API_URL";
pub const ENV_MODEL: &str = "LLM_MODEL";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoachConfig {
    pub enabled: bool,
    pub api_url: String,
    pub model: String,
    pub timeout_ms: u64,
    pub fallback: String,
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            fallback: DEFAULT_FALLBACK.to_string(),
        }
    }
}

impl CoachConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Apply `LLM_API_URL` / `LLM_MODEL` from the environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|var| std::env::var(var).ok())
    }

    pub fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(ENV_API_URL) {
            self.api_url = url;
        }
        if let Some(model) = lookup(ENV_MODEL) {
            self.model = model;
        }
        self
    }

    /// Pick the backend: the LLM client when an API key is available,
    /// canned lines otherwise.
    pub fn backend(&self) -> CommentaryBackend {
        self.backend_from(|var| std::env::var(var).ok())
    }

    pub fn backend_from(&self, lookup: impl Fn(&str) -> Option<String>) -> CommentaryBackend {
        match self.llm_client_from(lookup) {
            Ok(client) => {
                info!(url = %self.api_url, model = %self.model, "commentary via LLM");
                CommentaryBackend::Llm(client)
            }
            Err(err) => {
                info!(%err, "using canned commentary");
                CommentaryBackend::Canned(CannedCoach::new())
            }
        }
    }

    /// Build the LLM client; a missing or blank `LLM_API_KEY` is an error.
    pub fn llm_client_from(&self, lookup: impl Fn(&str) -> Option<String>) -> Result<LlmClient> {
        let key = lookup(ENV_API_KEY)
            .filter(|key| !key.trim().is_empty())
            .ok_or(CoachError::MissingApiKey)?;
        Ok(LlmClient::new(key, self.api_url.clone(), self.model.clone()))
    }
}
