//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It renders a
//! read-only [`core::GameSnapshot`] into a simple framebuffer (2 columns per
//! grid cell) that is then flushed to the terminal as a diff.
//!
//! Nothing here mutates the session.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{cell_letter, AnchorY, GameView, Viewport};
pub use renderer::{dirty_spans_into, Painter, TerminalRenderer, SPAN_GAP};
