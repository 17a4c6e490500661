use crate::config::FieldConfig;
use crate::pieces::Tetromino;
use crate::shape::Shape;
use crate::types::{Cell, PieceKind, Rgb, Status};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color: Rgb,
    pub x: i16,
    pub y: i16,
}

impl From<Tetromino> for PieceSnapshot {
    fn from(value: Tetromino) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            color: value.color,
            x: value.x,
            y: value.y,
        }
    }
}

/// Read-only view of a session for renderers and observers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub width: u8,
    pub height: u8,
    /// Row-major settled cells, `width * height` long
    pub board: Vec<Cell>,
    pub active: Option<PieceSnapshot>,
    pub ghost_y: Option<i16>,
    pub next: Option<PieceSnapshot>,
    pub hold: Option<PieceKind>,
    pub can_hold: bool,
    pub frozen: bool,
    pub status: Status,
    pub episode_id: u32,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub config: FieldConfig,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.width = self.config.width;
        self.height = self.config.height;
        self.board.clear();
        self.active = None;
        self.ghost_y = None;
        self.next = None;
        self.hold = None;
        self.can_hold = true;
        self.frozen = false;
        self.status = Status::Idle;
        self.episode_id = 0;
        self.score = 0;
        self.level = 1;
        self.lines = 0;
    }

    /// Settled cell at (x, y), None when out of bounds
    pub fn cell(&self, x: usize, y: usize) -> Option<Cell> {
        if x >= self.width as usize || y >= self.height as usize {
            return None;
        }
        self.board.get(y * self.width as usize + x).copied()
    }

    pub fn playable(&self) -> bool {
        self.status == Status::Playing && !self.frozen
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let config = FieldConfig::default();
        let mut s = Self {
            width: config.width,
            height: config.height,
            board: Vec::new(),
            active: None,
            ghost_y: None,
            next: None,
            hold: None,
            can_hold: true,
            frozen: false,
            status: Status::Idle,
            episode_id: 0,
            score: 0,
            level: 1,
            lines: 0,
            config,
        };
        s.clear();
        s.board
            .resize(config.width as usize * config.height as usize, None);
        s
    }
}
