//! Offline commentary, used when no API key is configured.

use crate::error::Result;
use crate::request::CoachRequest;
use crate::source::CommentarySource;
use crate::types::Status;

const PLAYING_EARLY: &[&str] = &[
    "Keep the surface flat and the rest follows.",
    "Leave one column open for the long piece.",
    "Use hold to save the piece you need later.",
];

const PLAYING_LATE: &[&str] = &[
    "Speed is up, trust the ghost and drop early.",
    "Clear the middle first, the edges can wait.",
    "Stay calm, one clean line at a time.",
];

const GAME_OVER: &[&str] = &[
    "Good run, hit enter and go again.",
    "That stack got tall, try clearing sooner next time.",
];

const IDLE: &[&str] = &["Press enter when you are ready."];

/// Levels at or above this draw from the late-game lines.
const LATE_LEVEL: u32 = 5;

/// Fixed lines keyed by status and level.
#[derive(Debug, Clone, Copy, Default)]
pub struct CannedCoach;

impl CannedCoach {
    pub fn new() -> Self {
        Self
    }

    /// Line for a request; deterministic for the same facts.
    pub fn line_for(&self, request: &CoachRequest) -> &'static str {
        let lines = match request.status {
            Status::Idle => IDLE,
            Status::GameOver => GAME_OVER,
            Status::Playing if request.level >= LATE_LEVEL => PLAYING_LATE,
            Status::Playing => PLAYING_EARLY,
        };
        let pick = (request.level as usize + request.lines as usize) % lines.len();
        lines[pick]
    }
}

impl CommentarySource for CannedCoach {
    async fn comment(&self, request: &CoachRequest) -> Result<String> {
        Ok(self.line_for(request).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(status: Status, level: u32) -> CoachRequest {
        CoachRequest {
            score: 0,
            lines: 0,
            level,
            status,
        }
    }

    #[test]
    fn test_lines_follow_status_and_level() {
        let coach = CannedCoach::new();
        assert!(PLAYING_EARLY.contains(&coach.line_for(&request(Status::Playing, 1))));
        assert!(PLAYING_LATE.contains(&coach.line_for(&request(Status::Playing, 7))));
        assert!(GAME_OVER.contains(&coach.line_for(&request(Status::GameOver, 3))));
        assert_eq!(coach.line_for(&request(Status::Idle, 1)), IDLE[0]);
    }

    #[test]
    fn test_comment_is_ready_immediately() {
        let coach = CannedCoach::new();
        let text = tokio_test::block_on(coach.comment(&request(Status::Playing, 2))).unwrap();
        assert_eq!(text, coach.line_for(&request(Status::Playing, 2)));
    }
}
