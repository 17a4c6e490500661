//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains all the game rules, state management, and simulation
//! logic. It has no dependencies on terminal, networking, or commentary code.
//!
//! # Module Structure
//!
//! - [`board`]: variable-size playfield with collision detection and row clearing
//! - [`shape`]: square occupancy matrices and their rotation
//! - [`pieces`]: the seven-piece catalog and the active piece
//! - [`rng`]: uniform piece generation (seedable for tests)
//! - [`scoring`]: line-clear score table and level progression
//! - [`gravity`]: the arm/disarm clock driving automatic descent
//! - [`config`]: field configuration, ranges and environment overrides
//! - [`game_state`]: the session state machine
//! - [`snapshot`]: read-only views for renderers
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: every piece kind is equally likely on each draw
//! - **Plain rotation**: no wall kicks, a blocked rotation is discarded
//! - **Immediate lock**: a blocked downward move locks the piece at once
//! - **Hold**: store one piece for later use (once per piece)
//! - **Freeze**: suspends gravity and downward movement
//!
//! # Example
//!
//! ```
//! use blockfall_core::{FieldConfig, GameState};
//! use blockfall_core::types::{Intent, Status};
//!
//! let mut game = GameState::with_seed(FieldConfig::default(), 12345);
//! game.apply_intent(Intent::Start);
//!
//! game.apply_intent(Intent::MoveRight);
//! game.apply_intent(Intent::RotateCw);
//! game.apply_intent(Intent::HardDrop);
//!
//! assert_eq!(game.status(), Status::Playing);
//! assert!(game.board().occupied_count() > 0);
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`](game_state::GameState::tick) every frame with the
//! elapsed time. The gravity interval is `max(50, base * 0.9^(level - 1))`.

pub mod board;
pub mod config;
pub mod game_state;
pub mod gravity;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod shape;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::{ConfigError, FieldConfig};
pub use game_state::{GameState, LockEvent};
pub use gravity::{gravity_interval_ms, GravityClock, GravityKey};
pub use pieces::{color_of, shape_of, Tetromino};
pub use rng::PieceGenerator;
pub use scoring::{calculate_level, calculate_line_score, ClearResult};
pub use shape::{rotate, Shape};
pub use snapshot::{GameSnapshot, PieceSnapshot};
