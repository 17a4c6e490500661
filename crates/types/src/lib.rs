//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, input mapping, rendering, commentary).
//!
//! # Field Dimensions
//!
//! The playfield is configurable while the session is idle:
//!
//! | Setting | Min | Max | Default | Step |
//! |---------|-----|-----|---------|------|
//! | width (columns) | 6 | 20 | 10 | 1 |
//! | height (rows) | 10 | 30 | 20 | 1 |
//! | base gravity (ms) | 100 | 1000 | 1000 | 50 |
//!
//! # Gravity
//!
//! The automatic descent interval shrinks by 10% per level:
//! `max(50, base * 0.9^(level - 1))` milliseconds.
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Direction, PieceKind, Status};
//!
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//! assert_eq!(Direction::Left.dx(), -1);
//! assert_eq!(Status::Idle.as_str(), "idle");
//! ```

/// Default field width in columns
pub const DEFAULT_WIDTH: u8 = 10;

/// Default field height in rows
pub const DEFAULT_HEIGHT: u8 = 20;

/// Default base gravity interval at level 1
pub const DEFAULT_BASE_SPEED_MS: u32 = 1000;

pub const WIDTH_MIN: u8 = 6;
pub const WIDTH_MAX: u8 = 20;
pub const WIDTH_STEP: u8 = 1;

pub const HEIGHT_MIN: u8 = 10;
pub const HEIGHT_MAX: u8 = 30;
pub const HEIGHT_STEP: u8 = 1;

pub const BASE_SPEED_MIN_MS: u32 = 100;
pub const BASE_SPEED_MAX_MS: u32 = 1000;
pub const BASE_SPEED_STEP_MS: u32 = 50;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity never fires faster than this, whatever the level
pub const GRAVITY_FLOOR_MS: u32 = 50;

/// Per-level gravity multiplier (interval shrinks 10% per level)
pub const GRAVITY_DECAY: f64 = 0.9;

/// Lines needed per level step
pub const LINES_PER_LEVEL: u32 = 10;

/// Line clear scoring table, indexed by rows cleared in one lock.
///
/// Points are multiplied by the level in effect before the clear.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// 24-bit RGB color tag carried by pieces and settled cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// The seven piece kinds
///
/// Each kind has a distinct shape template and color in the catalog
/// (see `blockfall_core::pieces::{shape_of, color_of}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }

    /// Single uppercase letter, used by the side panel.
    pub fn letter(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }
}

/// Session lifecycle status.
///
/// Pausing is modeled by the session's `frozen` flag, not by a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    /// Configurable, no active piece.
    #[default]
    Idle,
    /// Active piece exists; gravity runs unless frozen.
    Playing,
    /// Terminal until `start` or `stop`.
    GameOver,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Idle => "idle",
            Status::Playing => "playing",
            Status::GameOver => "game_over",
        }
    }
}

/// Intents consumed by the session
///
/// The input layer maps raw device events into these. Each intent is a
/// no-op when its precondition is not met.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Slide piece as far left as it goes
    MoveToLeftWall,
    /// Slide piece as far right as it goes
    MoveToRightWall,
    /// Drop piece one cell (locks if blocked)
    SoftDrop,
    /// Drop piece to the lowest legal row and lock
    HardDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
    /// Swap the active piece with the hold slot (once per piece)
    Hold,
    /// Suspend or resume gravity
    ToggleFreeze,
    /// Begin a fresh session from idle or game over
    Start,
    /// Return to idle, discarding the session
    Stop,
}

/// A single configuration change requested while idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigChange {
    Width(u8),
    Height(u8),
    BaseSpeedMs(u32),
}

/// Horizontal direction for wall slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn dx(&self) -> i16 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// A cell on the grid
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: settled cell, tagged with the kind that left it
pub type Cell = Option<PieceKind>;
