use crate::core::GameSnapshot;
use crate::types::Status;

/// Instructions sent with every commentary request.
pub const SYSTEM_PROMPT: &str = "You are an upbeat coach watching a falling-block puzzle game. \
Reply with exactly one short sentence of encouragement or advice. No quotes, no emoji.";

/// Session facts a commentary request carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoachRequest {
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub status: Status,
}

impl CoachRequest {
    pub fn from_snapshot(snap: &GameSnapshot) -> Self {
        Self {
            score: snap.score,
            lines: snap.lines,
            level: snap.level,
            status: snap.status,
        }
    }

    /// User message for the model.
    pub fn prompt(&self) -> String {
        format!(
            "Status: {}. Score: {}. Lines: {}. Level: {}. Give one short sentence of coaching.",
            self.status.as_str(),
            self.score,
            self.lines,
            self.level
        )
    }
}
