//! Pieces module - the piece catalog and the falling piece value
//!
//! The catalog is read-only data. `shape_of` hands out a copy, never a
//! reference, so rotation on a live piece cannot reach the template.

use crate::shape::{Shape, MAX_SHAPE_SIZE};
use crate::types::{PieceKind, Rgb};
use crate::Board;

const H: bool = true;
const E: bool = false;

const I_SHAPE: Shape = Shape::new(
    4,
    [[E, E, E, E], [H, H, H, H], [E, E, E, E], [E, E, E, E]],
);
const O_SHAPE: Shape = Shape::new(
    2,
    [[H, H, E, E], [H, H, E, E], [E, E, E, E], [E, E, E, E]],
);
const T_SHAPE: Shape = Shape::new(
    3,
    [[E, H, E, E], [H, H, H, E], [E, E, E, E], [E, E, E, E]],
);
const S_SHAPE: Shape = Shape::new(
    3,
    [[E, H, H, E], [H, H, E, E], [E, E, E, E], [E, E, E, E]],
);
const Z_SHAPE: Shape = Shape::new(
    3,
    [[H, H, E, E], [E, H, H, E], [E, E, E, E], [E, E, E, E]],
);
const J_SHAPE: Shape = Shape::new(
    3,
    [[H, E, E, E], [H, H, H, E], [E, E, E, E], [E, E, E, E]],
);
const L_SHAPE: Shape = Shape::new(
    3,
    [[E, E, H, E], [H, H, H, E], [E, E, E, E], [E, E, E, E]],
);

/// Shape template for a piece kind (returned by value).
pub fn shape_of(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::Z => Z_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
    }
}

/// Color tag for a piece kind.
pub fn color_of(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(0, 240, 240),
        PieceKind::O => Rgb::new(240, 240, 0),
        PieceKind::T => Rgb::new(160, 0, 240),
        PieceKind::S => Rgb::new(0, 240, 0),
        PieceKind::Z => Rgb::new(240, 0, 0),
        PieceKind::J => Rgb::new(0, 0, 240),
        PieceKind::L => Rgb::new(240, 160, 0),
    }
}

/// Spawn anchor for a shape on a field of the given width: horizontally
/// centred, top row 0.
pub fn spawn_position(shape: &Shape, width: u8) -> (i16, i16) {
    let x = (width / 2) as i16 - (shape.size() / 2) as i16;
    (x, 0)
}

/// A piece instance: kind, its own shape copy, color and top-left anchor.
///
/// `y` may be negative while the piece is still entering from above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color: Rgb,
    pub x: i16,
    pub y: i16,
}

impl Tetromino {
    /// Create a fresh piece from the catalog at the spawn position.
    pub fn spawn(kind: PieceKind, width: u8) -> Self {
        let shape = shape_of(kind);
        let (x, y) = spawn_position(&shape, width);
        Self {
            kind,
            shape,
            color: color_of(kind),
            x,
            y,
        }
    }

    /// Same piece (current shape kept) moved back to the spawn anchor.
    pub fn respawned(&self, width: u8) -> Self {
        let (x, y) = spawn_position(&self.shape, width);
        Self { x, y, ..*self }
    }

    /// Collision probe at offset (dx, dy), optionally with a candidate shape.
    pub fn collides(&self, board: &Board, dx: i16, dy: i16, shape: Option<&Shape>) -> bool {
        let shape = shape.unwrap_or(&self.shape);
        board.collides(shape, self.x + dx, self.y + dy)
    }

    /// Absolute grid coordinates of every occupied cell.
    pub fn cells(&self) -> impl Iterator<Item = (i16, i16)> + '_ {
        self.shape
            .cells()
            .into_iter()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}

/// Every catalog template is square and fits the fixed storage.
pub fn catalog_is_well_formed() -> bool {
    PieceKind::ALL.iter().all(|&k| {
        let s = shape_of(k);
        (2..=MAX_SHAPE_SIZE).contains(&s.size()) && s.cell_count() == 4
    })
}
