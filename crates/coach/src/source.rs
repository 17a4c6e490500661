//! Commentary sources and the fallback wrapper every caller goes through.

use std::future::Future;
use std::time::Duration;

use tracing::warn;

use crate::canned::CannedCoach;
use crate::client::LlmClient;
use crate::error::{CoachError, Result};
use crate::request::CoachRequest;

/// Default time budget for one reply.
pub const DEFAULT_TIMEOUT_MS: u64 = 4000;

/// Text shown whenever a reply cannot be produced.
pub const DEFAULT_FALLBACK: &str = "Keep stacking, the coach is warming up.";

/// Anything that can turn session facts into one line of commentary.
pub trait CommentarySource {
    fn comment(&self, request: &CoachRequest) -> impl Future<Output = Result<String>> + Send;
}

/// Ask `source` for a line, replacing every failure (error, timeout, blank
/// reply) with `fallback`.
pub async fn fetch_or_fallback<S: CommentarySource>(
    source: &S,
    request: &CoachRequest,
    timeout: Duration,
    fallback: &str,
) -> String {
    let result = match tokio::time::timeout(timeout, source.comment(request)).await {
        Ok(result) => result,
        Err(_) => Err(CoachError::Timeout(timeout.as_millis() as u64)),
    };

    match result {
        Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
        Ok(_) => {
            warn!(error = %CoachError::EmptyResponse, "commentary unavailable, using fallback");
            fallback.to_string()
        }
        Err(err) => {
            warn!(error = %err, "commentary unavailable, using fallback");
            fallback.to_string()
        }
    }
}

/// The source selected by configuration.
pub enum CommentaryBackend {
    Llm(LlmClient),
    Canned(CannedCoach),
}

impl CommentarySource for CommentaryBackend {
    async fn comment(&self, request: &CoachRequest) -> Result<String> {
        match self {
            CommentaryBackend::Llm(client) => client.comment(request).await,
            CommentaryBackend::Canned(canned) => canned.comment(request).await,
        }
    }
}
