//! Blockfall (workspace facade crate).
//!
//! Re-exports the member crates under `blockfall::{core,types,input,term,coach}`
//! and carries the program configuration shared by the binary and tests.

pub mod config;

pub use blockfall_coach as coach;
pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;

pub use config::GameConfig;
