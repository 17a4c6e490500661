//! Commentary collaborator.
//!
//! Turns session facts (score, lines, level, status) into one short line of
//! coaching, either from an LLM endpoint or from canned lines. Requests run
//! on a private tokio runtime so the game loop never blocks; every failure
//! becomes the configured fallback line.
//!
//! ```no_run
//! use std::time::Duration;
//! use blockfall_coach::{CannedCoach, Coach, CoachTrigger};
//! use blockfall_coach::core::{FieldConfig, GameState};
//!
//! let mut game = GameState::new(FieldConfig::default());
//! let mut coach = Coach::new(CannedCoach::new(), Duration::from_secs(4), "...").unwrap();
//! let mut trigger = CoachTrigger::new();
//!
//! game.start();
//! if let Some(request) = trigger.observe(&game.snapshot()) {
//!     coach.request(request);
//! }
//! coach.poll();
//! ```

pub mod canned;
pub mod client;
pub mod config;
pub mod error;
pub mod request;
pub mod runtime;
pub mod source;
pub mod trigger;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use canned::CannedCoach;
pub use client::{ApiFormat, LlmClient};
pub use config::CoachConfig;
pub use error::{CoachError, Result};
pub use request::CoachRequest;
pub use runtime::{Coach, CoachReply};
pub use source::{
    fetch_or_fallback, CommentaryBackend, CommentarySource, DEFAULT_FALLBACK, DEFAULT_TIMEOUT_MS,
};
pub use trigger::CoachTrigger;
