//! Scoring module - line clears, score and level progression
//!
//! Score per lock comes from a fixed table keyed by rows cleared
//! (1: 100, 2: 300, 3: 500, 4: 800), multiplied by the level in effect
//! before the clear. Level is `lines / 10 + 1`.

use crate::board::Board;
use crate::types::{LINES_PER_LEVEL, LINE_SCORES};

/// Outcome of resolving full rows after a lock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClearResult {
    /// Rows removed by this resolution
    pub cleared: u32,
    /// Points earned by this resolution
    pub score_delta: u32,
    /// Total lines after the clear
    pub lines: u32,
    /// Level after the clear
    pub level: u32,
}

/// Calculate line clear score.
/// lines: number of rows cleared at once (0-4)
/// level: level before the clear (1-based)
pub fn calculate_line_score(lines: usize, level: u32) -> u32 {
    LINE_SCORES
        .get(lines)
        .copied()
        .unwrap_or(0)
        .saturating_mul(level)
}

/// Level for a running line total (starts at 1)
pub fn calculate_level(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Clear full rows on `board` and fold the result into the counters.
pub fn resolve(board: &mut Board, lines: u32, level: u32) -> ClearResult {
    let cleared = board.clear_full_rows() as u32;
    let score_delta = calculate_line_score(cleared as usize, level);
    let lines = lines.saturating_add(cleared);

    ClearResult {
        cleared,
        score_delta,
        lines,
        level: calculate_level(lines),
    }
}
