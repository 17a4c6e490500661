//! Commentary collaborator driven by a real session

use std::time::{Duration, Instant};

use blockfall::coach::{
    fetch_or_fallback, CannedCoach, Coach, CoachRequest, CoachTrigger, CommentarySource,
    DEFAULT_FALLBACK,
};
use blockfall::core::{FieldConfig, GameState};
use blockfall::types::{Intent, Status};

struct Unreachable;

impl CommentarySource for Unreachable {
    async fn comment(&self, _request: &CoachRequest) -> blockfall::coach::Result<String> {
        Err(blockfall::coach::CoachError::MissingApiKey)
    }
}

#[tokio::test]
async fn fallback_replaces_failures() {
    let request = CoachRequest {
        score: 100,
        lines: 1,
        level: 1,
        status: Status::Playing,
    };
    let text = fetch_or_fallback(
        &Unreachable,
        &request,
        Duration::from_millis(50),
        DEFAULT_FALLBACK,
    )
    .await;
    assert_eq!(text, DEFAULT_FALLBACK);
}

#[test]
fn trigger_fires_on_start_and_game_over() {
    let mut game = GameState::with_seed(FieldConfig::default(), 11);
    let mut trigger = CoachTrigger::new();

    assert!(trigger.observe(&game.snapshot()).is_none());

    game.apply_intent(Intent::Start);
    let request = trigger.observe(&game.snapshot()).unwrap();
    assert_eq!(request.status, Status::Playing);

    game.apply_intent(Intent::HardDrop);
    assert!(trigger.observe(&game.snapshot()).is_none());

    while game.status() == Status::Playing {
        game.apply_intent(Intent::HardDrop);
    }
    let request = trigger.observe(&game.snapshot()).unwrap();
    assert_eq!(request.status, Status::GameOver);
}

#[test]
fn coach_delivers_canned_line_for_session() {
    let mut game = GameState::with_seed(FieldConfig::default(), 2);
    let mut coach =
        Coach::new(CannedCoach::new(), Duration::from_secs(1), DEFAULT_FALLBACK).unwrap();
    let mut trigger = CoachTrigger::new();

    game.apply_intent(Intent::Start);
    let request = trigger.observe(&game.snapshot()).unwrap();
    coach.request(request);

    let start = Instant::now();
    while !coach.poll() {
        assert!(start.elapsed() < Duration::from_secs(2), "no reply");
        std::thread::sleep(Duration::from_millis(5));
    }
    let line = coach.latest().unwrap();
    assert!(!line.is_empty());
    assert_ne!(line, DEFAULT_FALLBACK);
}
