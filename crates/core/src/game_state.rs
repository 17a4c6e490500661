//! Game state module - the session state machine
//!
//! This module ties together all core components: board, catalog, generator,
//! scoring and the gravity clock. It owns the session status
//! (idle / playing / game over), the hold slot and the freeze toggle, and
//! dispatches every intent.
//!
//! Every public operation is synchronous and takes `&mut self`, so a lock
//! (stamp, clear, score, spawn) is observed as one update. After each
//! operation the gravity clock is reconciled against the new state.

use tracing::{debug, info};

use crate::board::Board;
use crate::config::{ConfigError, FieldConfig};
use crate::gravity::{GravityClock, GravityKey};
use crate::pieces::Tetromino;
use crate::rng::PieceGenerator;
use crate::scoring::resolve;
use crate::snapshot::{GameSnapshot, PieceSnapshot};
use crate::types::{ConfigChange, Direction, Intent, PieceKind, Status};

/// Outcome of the most recent lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub score_delta: u32,
    pub level: u32,
    pub level_up: bool,
    pub game_over: bool,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    config: FieldConfig,
    board: Board,
    active: Option<Tetromino>,
    next: Option<Tetromino>,
    hold: Option<PieceKind>,
    generator: PieceGenerator,
    gravity: GravityClock,
    status: Status,
    /// Monotonic episode id (increments on every start).
    episode_id: u32,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
    score: u32,
    level: u32,
    lines: u32,
    can_hold: bool,
    frozen: bool,
}

impl GameState {
    /// Create an idle session with an entropy-seeded generator
    pub fn new(config: FieldConfig) -> Self {
        Self::with_generator(config, PieceGenerator::new())
    }

    /// Create an idle session with a deterministic generator
    pub fn with_seed(config: FieldConfig, seed: u64) -> Self {
        Self::with_generator(config, PieceGenerator::with_seed(seed))
    }

    fn with_generator(config: FieldConfig, generator: PieceGenerator) -> Self {
        Self {
            config,
            board: Board::new(config.width, config.height),
            active: None,
            next: None,
            hold: None,
            generator,
            gravity: GravityClock::new(),
            status: Status::Idle,
            episode_id: 0,
            last_event: None,
            score: 0,
            level: 1,
            lines: 0,
            can_hold: true,
            frozen: false,
        }
    }

    pub fn config(&self) -> FieldConfig {
        self.config
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn frozen(&self) -> bool {
        self.frozen
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn hold_piece(&self) -> Option<PieceKind> {
        self.hold
    }

    pub fn active(&self) -> Option<Tetromino> {
        self.active
    }

    pub fn next_piece(&self) -> Option<Tetromino> {
        self.next
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn gravity(&self) -> &GravityClock {
        &self.gravity
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Apply an intent. Returns true if the session changed.
    pub fn apply_intent(&mut self, intent: Intent) -> bool {
        match intent {
            Intent::MoveLeft => self.try_move(-1, 0),
            Intent::MoveRight => self.try_move(1, 0),
            Intent::MoveToLeftWall => self.move_to_wall(Direction::Left),
            Intent::MoveToRightWall => self.move_to_wall(Direction::Right),
            Intent::SoftDrop => self.try_move(0, 1),
            Intent::HardDrop => self.hard_drop(),
            Intent::RotateCw => self.try_rotate(true),
            Intent::RotateCcw => self.try_rotate(false),
            Intent::Hold => self.hold(),
            Intent::ToggleFreeze => self.toggle_freeze(),
            Intent::Start => self.start(),
            Intent::Stop => self.stop(),
        }
    }

    /// Begin a fresh session from idle or game over.
    pub fn start(&mut self) -> bool {
        if self.status == Status::Playing {
            return false;
        }

        let width = self.config.width;
        self.board = Board::new(width, self.config.height);
        self.reset_counters();
        self.active = Some(self.generator.next(width));
        self.next = Some(self.generator.next(width));
        self.status = Status::Playing;
        self.episode_id = self.episode_id.wrapping_add(1);

        info!(
            episode = self.episode_id,
            width,
            height = self.config.height,
            base_speed_ms = self.config.base_speed_ms,
            "session started"
        );
        self.sync_gravity();
        true
    }

    /// Return to idle from any state, discarding the session.
    pub fn stop(&mut self) -> bool {
        let was = self.status;
        self.board = Board::new(self.config.width, self.config.height);
        self.reset_counters();
        self.active = None;
        self.next = None;
        self.status = Status::Idle;

        if was != Status::Idle {
            info!(episode = self.episode_id, from = was.as_str(), "session stopped");
        }
        self.sync_gravity();
        was != Status::Idle
    }

    /// Change the field configuration. Only permitted while idle.
    ///
    /// Returns `Ok(false)` when not idle, `Err` for out-of-range values
    /// (nothing changes in either case).
    pub fn reconfigure(&mut self, change: ConfigChange) -> Result<bool, ConfigError> {
        if self.status != Status::Idle {
            return Ok(false);
        }

        let next = self.config.with_change(change)?;
        if next.width != self.config.width || next.height != self.config.height {
            self.board = Board::new(next.width, next.height);
        }
        self.config = next;

        info!(
            width = next.width,
            height = next.height,
            base_speed_ms = next.base_speed_ms,
            "field reconfigured"
        );
        self.sync_gravity();
        Ok(true)
    }

    /// Move the active piece by (dx, dy).
    ///
    /// A blocked downward move locks the piece. While frozen only lateral
    /// moves are accepted.
    pub fn try_move(&mut self, dx: i16, dy: i16) -> bool {
        let changed = self.move_active(dx, dy);
        self.sync_gravity();
        changed
    }

    /// Drop to the lowest legal row and lock.
    pub fn hard_drop(&mut self) -> bool {
        if self.status != Status::Playing {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let distance = self.drop_distance(&active);
        self.active = Some(Tetromino {
            y: active.y + distance,
            ..active
        });
        self.lock_piece();
        self.sync_gravity();
        true
    }

    /// Slide the active piece as far as it goes in one direction. Never locks.
    pub fn move_to_wall(&mut self, direction: Direction) -> bool {
        if self.status != Status::Playing || self.frozen {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let step = direction.dx();
        let mut distance: i16 = 0;
        while !active.collides(&self.board, step * (distance + 1), 0, None) {
            distance += 1;
            if distance > self.config.width as i16 {
                break;
            }
        }

        if distance == 0 {
            return false;
        }
        self.active = Some(Tetromino {
            x: active.x + step * distance,
            ..active
        });
        true
    }

    /// Rotate in place. No wall kicks: a blocked rotation is discarded.
    pub fn try_rotate(&mut self, clockwise: bool) -> bool {
        if self.status != Status::Playing || self.frozen {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let candidate = active.shape.rotated(clockwise);
        if active.collides(&self.board, 0, 0, Some(&candidate)) {
            return false;
        }

        self.active = Some(Tetromino {
            shape: candidate,
            ..active
        });
        true
    }

    /// Swap the active piece with the hold slot (once per piece).
    ///
    /// The incoming piece starts at the spawn anchor; if it would overlap the
    /// stack there the swap is refused.
    pub fn hold(&mut self) -> bool {
        if self.status != Status::Playing || !self.can_hold {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let width = self.config.width;
        let (incoming, from_queue) = match (self.hold, self.next) {
            (Some(held), _) => (Tetromino::spawn(held, width), false),
            (None, Some(queued)) => (queued.respawned(width), true),
            (None, None) => (self.generator.next(width), false),
        };

        if incoming.collides(&self.board, 0, 0, None) {
            debug!(kind = incoming.kind.as_str(), "hold refused: spawn blocked");
            return false;
        }

        self.hold = Some(active.kind);
        self.active = Some(incoming);
        if from_queue {
            self.next = Some(self.generator.next(width));
        }
        self.can_hold = false;
        self.sync_gravity();
        true
    }

    /// Suspend or resume gravity and downward movement.
    pub fn toggle_freeze(&mut self) -> bool {
        if self.status != Status::Playing {
            return false;
        }
        self.frozen = !self.frozen;
        debug!(frozen = self.frozen, "freeze toggled");
        self.sync_gravity();
        true
    }

    /// Advance the gravity clock by `elapsed_ms`; fires at most one soft drop.
    ///
    /// Returns true if the session changed.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        self.sync_gravity();
        if !self.gravity.advance(elapsed_ms) {
            return false;
        }
        let changed = self.move_active(0, 1);
        self.sync_gravity();
        changed
    }

    /// Row the active piece would land on if dropped now
    pub fn ghost_y(&self) -> Option<i16> {
        let active = self.active?;
        Some(active.y + self.drop_distance(&active))
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        out.board.clear();
        out.board.extend_from_slice(self.board.cells());
        out.active = self.active.map(PieceSnapshot::from);
        out.ghost_y = self.ghost_y();
        out.next = self.next.map(PieceSnapshot::from);
        out.hold = self.hold;
        out.can_hold = self.can_hold;
        out.frozen = self.frozen;
        out.status = self.status;
        out.episode_id = self.episode_id;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.config = self.config;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn reset_counters(&mut self) {
        self.score = 0;
        self.lines = 0;
        self.level = 1;
        self.hold = None;
        self.can_hold = true;
        self.frozen = false;
        self.last_event = None;
    }

    fn move_active(&mut self, dx: i16, dy: i16) -> bool {
        if self.status != Status::Playing || (self.frozen && dy != 0) {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        if !active.collides(&self.board, dx, dy, None) {
            self.active = Some(Tetromino {
                x: active.x + dx,
                y: active.y + dy,
                ..active
            });
            return true;
        }

        if dy > 0 {
            self.lock_piece();
            return true;
        }
        false
    }

    fn drop_distance(&self, piece: &Tetromino) -> i16 {
        let limit = self.config.height as i16 + piece.shape.size() as i16;
        let mut distance: i16 = 0;
        while distance < limit && !piece.collides(&self.board, 0, distance + 1, None) {
            distance += 1;
        }
        distance
    }

    /// Merge the active piece, clear rows, score, and spawn the queued piece.
    fn lock_piece(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        self.board
            .stamp(&active.shape, active.x, active.y, active.kind);

        let level_before = self.level;
        let result = resolve(&mut self.board, self.lines, self.level);
        self.score = self.score.saturating_add(result.score_delta);
        self.lines = result.lines;
        self.level = result.level;

        let width = self.config.width;
        let queued = match self.next.take() {
            Some(piece) => piece,
            None => self.generator.next(width),
        };
        let spawned = queued.respawned(width);
        let game_over = spawned.collides(&self.board, 0, 0, None);

        if game_over {
            self.status = Status::GameOver;
            self.active = None;
            self.next = Some(queued);
            info!(
                episode = self.episode_id,
                score = self.score,
                lines = self.lines,
                level = self.level,
                "game over"
            );
        } else {
            self.active = Some(spawned);
            self.next = Some(self.generator.next(width));
            self.can_hold = true;
            self.frozen = false;
        }

        let level_up = self.level > level_before;
        if level_up {
            info!(level = self.level, lines = self.lines, "level up");
        }
        debug!(
            kind = active.kind.as_str(),
            cleared = result.cleared,
            score_delta = result.score_delta,
            "piece locked"
        );

        self.last_event = Some(LockEvent {
            lines_cleared: result.cleared,
            score_delta: result.score_delta,
            level: self.level,
            level_up,
            game_over,
        });
    }

    fn desired_gravity(&self) -> Option<GravityKey> {
        (self.status == Status::Playing && !self.frozen).then_some(GravityKey {
            level: self.level,
            base_speed_ms: self.config.base_speed_ms,
        })
    }

    fn sync_gravity(&mut self) {
        let desired = self.desired_gravity();
        if self.gravity.reconcile(desired) {
            debug!(interval_ms = ?self.gravity.interval_ms(), "gravity re-armed");
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(FieldConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::shape_of;

    fn playing(active: PieceKind, next: PieceKind) -> GameState {
        let mut state = GameState::with_seed(FieldConfig::default(), 12345);
        state.start();
        state.active = Some(Tetromino::spawn(active, 10));
        state.next = Some(Tetromino::spawn(next, 10));
        state
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::with_seed(FieldConfig::default(), 12345);

        assert_eq!(state.status, Status::Idle);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.lines, 0);
        assert!(state.active.is_none());
        assert!(state.next.is_none());
        assert!(state.hold.is_none());
        assert!(state.can_hold);
        assert!(!state.gravity.is_armed());
        assert_eq!(state.board.width(), 10);
        assert_eq!(state.board.height(), 20);
    }

    #[test]
    fn test_game_start() {
        let mut state = GameState::with_seed(FieldConfig::default(), 12345);
        assert!(state.start());

        assert_eq!(state.status, Status::Playing);
        assert!(state.active.is_some());
        assert!(state.next.is_some());
        assert_eq!(state.episode_id, 1);
        assert_eq!(state.gravity.interval_ms(), Some(1000));

        // Starting again while playing is a no-op.
        assert!(!state.start());
        assert_eq!(state.episode_id, 1);
    }

    #[test]
    fn test_hard_drop_o_piece_lands_on_floor() {
        let mut state = playing(PieceKind::O, PieceKind::T);

        assert!(state.hard_drop());

        assert_eq!(state.board.occupied_count(), 4);
        for (x, y) in [(4, 18), (5, 18), (4, 19), (5, 19)] {
            assert_eq!(state.board.get(x, y), Some(Some(PieceKind::O)));
        }
        let active = state.active.unwrap();
        assert_eq!(active.kind, PieceKind::T);
        assert_eq!((active.x, active.y), (4, 0));
        assert!(state.next.is_some());
        assert_eq!(state.score, 0);
        assert_eq!(state.lines, 0);
    }

    #[test]
    fn test_lock_clears_completed_row_and_shifts_down() {
        let mut state = playing(PieceKind::O, PieceKind::T);
        for x in 0..10 {
            if x != 4 && x != 5 {
                state.board.set(x, 19, Some(PieceKind::I));
            }
        }
        state.board.set(0, 10, Some(PieceKind::Z));

        assert!(state.hard_drop());

        assert_eq!(state.lines, 1);
        assert_eq!(state.score, 100);
        assert_eq!(state.level, 1);
        // Top half of the O slid into the bottom row.
        assert_eq!(state.board.to_rows()[19], "....OO....");
        // Marker moved down by one row.
        assert_eq!(state.board.get(0, 11), Some(Some(PieceKind::Z)));
        assert_eq!(state.board.get(0, 10), Some(None));
        assert_eq!(state.board.to_rows()[0], "..........");
        assert_eq!(state.board.occupied_count(), 3);

        let event = state.take_last_event().unwrap();
        assert_eq!(event.lines_cleared, 1);
        assert_eq!(event.score_delta, 100);
        assert!(!event.game_over);
        assert!(state.take_last_event().is_none());
    }

    #[test]
    fn test_lock_without_clear_keeps_counters() {
        let mut state = playing(PieceKind::T, PieceKind::S);
        state.score = 700;
        state.lines = 7;
        assert!(state.hard_drop());
        assert_eq!(state.score, 700);
        assert_eq!(state.lines, 7);
        assert_eq!(state.level, 1);
    }

    #[test]
    fn test_spawn_collision_is_game_over() {
        let mut state = playing(PieceKind::O, PieceKind::L);
        for y in 0..2 {
            for x in 3..=7 {
                state.board.set(x, y, Some(PieceKind::J));
            }
        }
        state.active = Some(Tetromino {
            x: 0,
            y: 16,
            ..Tetromino::spawn(PieceKind::O, 10)
        });
        state.score = 250;

        assert!(state.hard_drop());

        assert_eq!(state.status, Status::GameOver);
        assert!(state.active.is_none());
        assert_eq!(state.score, 250);
        assert!(!state.gravity.is_armed());
        assert!(state.take_last_event().unwrap().game_over);

        // Terminal: gameplay intents are ignored.
        assert!(!state.apply_intent(Intent::MoveLeft));
        assert!(!state.apply_intent(Intent::HardDrop));
        assert!(!state.apply_intent(Intent::Hold));
        assert!(!state.apply_intent(Intent::ToggleFreeze));
    }

    #[test]
    fn test_restart_from_game_over_goes_to_playing() {
        let mut state = playing(PieceKind::O, PieceKind::L);
        state.status = Status::GameOver;
        state.active = None;
        state.score = 900;
        state.lines = 12;
        state.level = 2;
        state.board.set(0, 19, Some(PieceKind::I));

        assert!(state.apply_intent(Intent::Start));
        assert_eq!(state.status, Status::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.lines, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.board.occupied_count(), 0);
        assert_eq!(state.episode_id, 2);
    }

    #[test]
    fn test_blocked_soft_drop_locks() {
        let mut state = playing(PieceKind::O, PieceKind::I);
        state.active = Some(Tetromino {
            y: 18,
            ..Tetromino::spawn(PieceKind::O, 10)
        });

        assert!(state.try_move(0, 1));
        assert_eq!(state.board.occupied_count(), 4);
        assert_eq!(state.active.unwrap().kind, PieceKind::I);
    }

    #[test]
    fn test_blocked_lateral_move_is_noop() {
        let mut state = playing(PieceKind::O, PieceKind::I);
        state.active = Some(Tetromino {
            x: 0,
            ..Tetromino::spawn(PieceKind::O, 10)
        });
        let before = state.active;

        assert!(!state.try_move(-1, 0));
        assert_eq!(state.active, before);
        assert_eq!(state.board.occupied_count(), 0);
    }

    #[test]
    fn test_move_to_wall() {
        let mut state = playing(PieceKind::O, PieceKind::I);

        assert!(state.move_to_wall(Direction::Left));
        assert_eq!(state.active.unwrap().x, 0);
        assert!(!state.move_to_wall(Direction::Left));

        assert!(state.move_to_wall(Direction::Right));
        assert_eq!(state.active.unwrap().x, 8);
        assert_eq!(state.board.occupied_count(), 0);
    }

    #[test]
    fn test_move_to_wall_stops_at_stack() {
        let mut state = playing(PieceKind::O, PieceKind::I);
        state.board.set(1, 1, Some(PieceKind::S));
        assert!(state.apply_intent(Intent::MoveToLeftWall));
        assert_eq!(state.active.unwrap().x, 2);
    }

    #[test]
    fn test_rotate_four_times_is_identity() {
        let mut state = playing(PieceKind::T, PieceKind::I);
        state.try_move(0, 1);
        let before = state.active.unwrap().shape;
        for _ in 0..4 {
            assert!(state.try_rotate(true));
        }
        assert_eq!(state.active.unwrap().shape, before);
    }

    #[test]
    fn test_rotation_blocked_by_wall_is_discarded() {
        let mut state = playing(PieceKind::I, PieceKind::O);
        let vertical = shape_of(PieceKind::I).rotated(true);
        state.active = Some(Tetromino {
            shape: vertical,
            x: -2,
            y: 5,
            ..Tetromino::spawn(PieceKind::I, 10)
        });

        assert!(!state.try_rotate(true));
        assert!(!state.try_rotate(false));
        let active = state.active.unwrap();
        assert_eq!(active.shape, vertical);
        assert_eq!((active.x, active.y), (-2, 5));
    }

    #[test]
    fn test_hold_empty_slot_takes_queued_piece() {
        let mut state = playing(PieceKind::S, PieceKind::J);

        assert!(state.hold());
        assert_eq!(state.hold, Some(PieceKind::S));
        assert_eq!(state.active.unwrap().kind, PieceKind::J);
        assert!(state.next.is_some());
        assert!(!state.can_hold);
    }

    #[test]
    fn test_hold_twice_second_is_noop() {
        let mut state = playing(PieceKind::S, PieceKind::J);
        assert!(state.apply_intent(Intent::Hold));
        let active = state.active;
        let next = state.next;

        assert!(!state.apply_intent(Intent::Hold));
        assert_eq!(state.active, active);
        assert_eq!(state.next, next);
        assert_eq!(state.hold, Some(PieceKind::S));
    }

    #[test]
    fn test_hold_swap_gets_fresh_catalog_piece() {
        let mut state = playing(PieceKind::T, PieceKind::O);
        assert!(state.hold());
        state.hard_drop();
        assert!(state.can_hold);

        let current = state.active.unwrap().kind;
        assert!(state.hold());
        let active = state.active.unwrap();
        assert_eq!(active.kind, PieceKind::T);
        assert_eq!(active.shape, shape_of(PieceKind::T));
        assert_eq!((active.x, active.y), (4, 0));
        assert_eq!(state.hold, Some(current));
    }

    #[test]
    fn test_hold_refused_when_spawn_blocked() {
        let mut state = playing(PieceKind::I, PieceKind::O);
        state.active = Some(Tetromino {
            y: 10,
            ..Tetromino::spawn(PieceKind::I, 10)
        });
        state.board.set(4, 0, Some(PieceKind::Z));

        assert!(!state.hold());
        assert!(state.can_hold);
        assert_eq!(state.hold, None);
        assert_eq!(state.active.unwrap().kind, PieceKind::I);
    }

    #[test]
    fn test_freeze_blocks_descent_but_not_lateral() {
        let mut state = playing(PieceKind::T, PieceKind::O);
        assert!(state.toggle_freeze());
        assert!(state.frozen);
        assert!(!state.gravity.is_armed());

        let y = state.active.unwrap().y;
        assert!(!state.try_move(0, 1));
        assert!(!state.tick(10_000));
        assert_eq!(state.active.unwrap().y, y);

        assert!(state.try_move(1, 0));
        assert!(!state.try_rotate(true));
        assert!(!state.move_to_wall(Direction::Left));

        assert!(state.toggle_freeze());
        assert!(state.gravity.is_armed());
    }

    #[test]
    fn test_lock_resets_freeze() {
        let mut state = playing(PieceKind::T, PieceKind::O);
        state.toggle_freeze();
        assert!(state.hard_drop());
        assert!(!state.frozen);
        assert!(state.gravity.is_armed());
    }

    #[test]
    fn test_tick_drives_gravity() {
        let config = FieldConfig::new(10, 20, 100).unwrap();
        let mut state = GameState::with_seed(config, 1);
        state.start();
        let y = state.active.unwrap().y;

        assert!(!state.tick(99));
        assert!(state.tick(1));
        assert_eq!(state.active.unwrap().y, y + 1);
    }

    #[test]
    fn test_idle_tick_does_nothing() {
        let mut state = GameState::with_seed(FieldConfig::default(), 1);
        assert!(!state.tick(5_000));
        assert!(state.active.is_none());
    }

    #[test]
    fn test_level_up_rearms_gravity() {
        let mut state = playing(PieceKind::O, PieceKind::T);
        state.lines = 9;
        for x in 0..10 {
            if x != 4 && x != 5 {
                state.board.set(x, 19, Some(PieceKind::I));
            }
        }
        assert_eq!(state.gravity.interval_ms(), Some(1000));

        state.hard_drop();

        assert_eq!(state.level, 2);
        assert_eq!(state.lines, 10);
        assert_eq!(state.score, 100);
        assert_eq!(state.gravity.interval_ms(), Some(900));
        assert!(state.take_last_event().unwrap().level_up);
    }

    #[test]
    fn test_ghost_y() {
        let state = playing(PieceKind::O, PieceKind::T);
        assert_eq!(state.ghost_y(), Some(18));
    }

    #[test]
    fn test_idle_ignores_gameplay_intents() {
        let mut state = GameState::with_seed(FieldConfig::default(), 1);
        for intent in [
            Intent::MoveLeft,
            Intent::MoveRight,
            Intent::MoveToLeftWall,
            Intent::MoveToRightWall,
            Intent::SoftDrop,
            Intent::HardDrop,
            Intent::RotateCw,
            Intent::RotateCcw,
            Intent::Hold,
            Intent::ToggleFreeze,
            Intent::Stop,
        ] {
            assert!(!state.apply_intent(intent), "{:?}", intent);
        }
        assert_eq!(state.status, Status::Idle);
    }

    #[test]
    fn test_stop_resets_everything() {
        let mut state = playing(PieceKind::T, PieceKind::O);
        state.hold();
        state.hard_drop();
        state.score = 1200;

        assert!(state.stop());
        assert_eq!(state.status, Status::Idle);
        assert_eq!(state.score, 0);
        assert_eq!(state.lines, 0);
        assert_eq!(state.level, 1);
        assert!(state.active.is_none());
        assert!(state.next.is_none());
        assert!(state.hold.is_none());
        assert_eq!(state.board.occupied_count(), 0);
        assert!(!state.gravity.is_armed());
    }

    #[test]
    fn test_reconfigure_width_while_idle() {
        let mut state = GameState::with_seed(FieldConfig::default(), 1);
        assert_eq!(state.reconfigure(ConfigChange::Width(14)), Ok(true));
        assert_eq!(state.board.width(), 14);
        assert_eq!(state.board.height(), 20);
        assert_eq!(state.board.occupied_count(), 0);

        state.start();
        assert_eq!(state.board.width(), 14);
    }

    #[test]
    fn test_reconfigure_rejected_outside_idle_or_range() {
        let mut state = GameState::with_seed(FieldConfig::default(), 1);
        assert!(state.reconfigure(ConfigChange::Width(30)).is_err());
        assert_eq!(state.config.width, 10);

        state.start();
        assert_eq!(state.reconfigure(ConfigChange::Height(24)), Ok(false));
        assert_eq!(state.config.height, 20);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let state = playing(PieceKind::O, PieceKind::T);
        let snap = state.snapshot();
        assert_eq!(snap.status, Status::Playing);
        assert_eq!(snap.board.len(), 200);
        assert_eq!(snap.active.unwrap().kind, PieceKind::O);
        assert_eq!(snap.next.unwrap().kind, PieceKind::T);
        assert_eq!(snap.ghost_y, Some(18));
        assert_eq!(snap.level, 1);
        assert!(snap.playable());
    }
}
