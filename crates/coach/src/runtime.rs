//! Coach runtime integration.
//!
//! Bridges the sync game loop with async commentary requests. Each request
//! gets an increasing id; only the reply to the most recent request is
//! applied, older ones are dropped when they arrive.

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Runtime;
use tokio::sync::mpsc;
use tracing::debug;

use crate::error::Result;
use crate::request::CoachRequest;
use crate::source::{fetch_or_fallback, CommentarySource};

/// Reply delivered to the game loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoachReply {
    pub id: u64,
    pub text: String,
}

/// Running coach instance.
pub struct Coach<S> {
    rt: Runtime,
    source: Arc<S>,
    timeout: Duration,
    fallback: Arc<str>,
    reply_tx: mpsc::UnboundedSender<CoachReply>,
    reply_rx: mpsc::UnboundedReceiver<CoachReply>,
    latest_id: u64,
    line: Option<String>,
}

impl<S> Coach<S>
where
    S: CommentarySource + Send + Sync + 'static,
{
    pub fn new(source: S, timeout: Duration, fallback: impl Into<String>) -> Result<Self> {
        let rt = Runtime::new()?;
        let (reply_tx, reply_rx) = mpsc::unbounded_channel();
        Ok(Self {
            rt,
            source: Arc::new(source),
            timeout,
            fallback: Arc::from(fallback.into()),
            reply_tx,
            reply_rx,
            latest_id: 0,
            line: None,
        })
    }

    /// Issue a request. Any reply still in flight becomes stale.
    pub fn request(&mut self, request: CoachRequest) -> u64 {
        self.latest_id += 1;
        let id = self.latest_id;

        let source = Arc::clone(&self.source);
        let fallback = Arc::clone(&self.fallback);
        let timeout = self.timeout;
        let tx = self.reply_tx.clone();

        debug!(id, status = request.status.as_str(), level = request.level, "commentary requested");
        self.rt.spawn(async move {
            let text = fetch_or_fallback(source.as_ref(), &request, timeout, &fallback).await;
            let _ = tx.send(CoachReply { id, text });
        });
        id
    }

    /// Drain arrived replies. Returns true if the displayed line changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(reply) = self.reply_rx.try_recv() {
            if reply.id == self.latest_id {
                self.line = Some(reply.text);
                changed = true;
            } else {
                debug!(id = reply.id, latest = self.latest_id, "stale commentary discarded");
            }
        }
        changed
    }

    /// Most recent applied line.
    pub fn latest(&self) -> Option<&str> {
        self.line.as_deref()
    }

    pub fn latest_id(&self) -> u64 {
        self.latest_id
    }
}
