//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{color_of, GameSnapshot, PieceSnapshot};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, Status};

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for a falling-block session.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

/// Screen placement of the play frame for one render.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        self.render_into_with_coach(snap, None, viewport, fb);
    }

    /// Render the snapshot plus one line of commentary under the play frame.
    pub fn render_into_with_coach(
        &self,
        snap: &GameSnapshot,
        coach: Option<&str>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let board_px_w = (snap.width as u16) * self.cell_w;
        let board_px_h = (snap.height as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;
        // Reserve one row under the frame for the coach line.
        let total_h = frame_h + 1;

        let frame = Frame {
            x: viewport.width.saturating_sub(frame_w + PANEL_W) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(total_h) / 2,
                AnchorY::Top => 0,
            },
            w: frame_w,
            h: frame_h,
        };

        let bg = CellStyle::new(Rgb::new(80, 80, 90), PLAY_BG);
        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        fb.fill_rect(frame.x + 1, frame.y + 1, board_px_w, board_px_h, ' ', bg);
        self.draw_border(fb, frame, border);

        // Settled cells.
        for y in 0..snap.height as u16 {
            for x in 0..snap.width as u16 {
                match snap.cell(x as usize, y as usize).flatten() {
                    Some(kind) => self.draw_board_cell(fb, frame, x, y, color_of(kind)),
                    None => self.draw_empty_cell(fb, frame, x, y),
                }
            }
        }

        if let Some(active) = snap.active {
            // Ghost first so the active piece draws over it.
            if let Some(ghost_y) = snap.ghost_y {
                let ghost = CellStyle::new(Rgb::new(140, 140, 140), PLAY_BG).dim();
                for (x, y) in piece_cells(&active, ghost_y) {
                    if let Some((x, y)) = visible(snap, x, y) {
                        self.fill_cell_rect(fb, frame, x, y, '░', ghost);
                    }
                }
            }

            for (x, y) in piece_cells(&active, active.y) {
                if let Some((x, y)) = visible(snap, x, y) {
                    self.draw_board_cell(fb, frame, x, y, active.color);
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if let Some(text) = coach {
            let style = CellStyle::new(Rgb::new(180, 200, 255), PANEL_BG);
            fb.put_str(frame.x, frame.y.saturating_add(frame.h), text, style);
        }

        match snap.status {
            Status::Idle => self.draw_overlay_text(fb, frame, "PRESS ENTER"),
            Status::GameOver => self.draw_overlay_text(fb, frame, "GAME OVER"),
            Status::Playing if snap.frozen => self.draw_overlay_text(fb, frame, "FROZEN"),
            Status::Playing => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    pub fn render_with_coach(
        &self,
        snap: &GameSnapshot,
        coach: Option<&str>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into_with_coach(snap, coach, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: Frame, style: CellStyle) {
        let Frame { x, y, w, h } = frame;
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16) {
        let style = CellStyle::new(Rgb::new(90, 90, 100), PLAY_BG).dim();
        self.fill_cell_rect(fb, frame, x, y, '·', style);
    }

    fn draw_board_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16, color: Rgb) {
        let style = CellStyle::new(color, PLAY_BG).bold();
        self.fill_cell_rect(fb, frame, x, y, '█', style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = frame.x + 1 + cell_x * self.cell_w;
        let py = frame.y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let dim = value.dim();

        let mut y = frame.y;
        for (name, v) in [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y.saturating_add(1), v, value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "HOLD", label);
        y = y.saturating_add(1);
        match snap.hold {
            Some(kind) => {
                let style = if snap.can_hold { value } else { dim };
                let end = fb.put_str(panel_x, y, kind.letter(), style);
                if !snap.can_hold {
                    fb.put_str(end + 1, y, "(used)", dim);
                }
            }
            None => {
                fb.put_str(panel_x, y, "-", value);
            }
        }
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        match snap.next {
            Some(next) => {
                y = self.draw_preview(fb, panel_x, y, &next);
            }
            None => {
                fb.put_str(panel_x, y, "-", value);
                y = y.saturating_add(1);
            }
        }
        y = y.saturating_add(1);

        let config = snap.config;
        fb.put_str(panel_x, y, "FIELD", label);
        y = y.saturating_add(1);
        let mut x = fb.put_u32(panel_x, y, config.width as u32, value);
        x = fb.put_str(x, y, "x", value);
        fb.put_u32(x, y, config.height as u32, value);
        y = y.saturating_add(1);
        x = fb.put_u32(panel_x, y, config.base_speed_ms, value);
        fb.put_str(x, y, "ms", value);
        y = y.saturating_add(2);

        let hints: &[&str] = match snap.status {
            Status::Playing => &["←→ move  ↑ rot", "space drop  c hold", "p freeze  esc stop"],
            Status::Idle => &["enter start", "[ ] width  { } height", "- = speed  q quit"],
            Status::GameOver => &["enter restart", "esc idle  q quit"],
        };
        for hint in hints {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, hint, dim);
            y = y.saturating_add(1);
        }
    }

    /// Draw the queued piece's matrix. Returns the row after it.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, piece: &PieceSnapshot) -> u16 {
        let style = CellStyle::new(piece.color, PANEL_BG).bold();
        let size = piece.shape.size();
        let mut drawn_rows = 0;
        for row in 0..size {
            if !(0..size).any(|col| piece.shape.is_filled(col, row)) {
                continue;
            }
            for col in 0..size {
                if piece.shape.is_filled(col, row) {
                    let px = x + col as u16 * self.cell_w;
                    fb.fill_rect(px, y + drawn_rows, self.cell_w, 1, '█', style);
                }
            }
            drawn_rows += 1;
        }
        y.saturating_add(drawn_rows)
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, frame: Frame, text: &str) {
        let mid_y = frame.y.saturating_add(frame.h / 2);
        let text_w = text.chars().count() as u16;
        let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        fb.put_str(x, mid_y, text, style);
    }
}

/// Room kept to the right of the frame for the side panel when centering.
const PANEL_W: u16 = 24;

fn piece_cells(piece: &PieceSnapshot, y: i16) -> impl Iterator<Item = (i16, i16)> + '_ {
    piece
        .shape
        .cells()
        .into_iter()
        .map(move |(dx, dy)| (piece.x + dx, y + dy))
}

fn visible(snap: &GameSnapshot, x: i16, y: i16) -> Option<(u16, u16)> {
    if x >= 0 && x < snap.width as i16 && y >= 0 && y < snap.height as i16 {
        Some((x as u16, y as u16))
    } else {
        None
    }
}

/// Letter shown for a settled cell (used by text dumps).
pub fn cell_letter(cell: Option<PieceKind>) -> char {
    cell.and_then(|k| k.letter().chars().next()).unwrap_or('.')
}
