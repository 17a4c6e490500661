//! Board module - manages the settled grid
//!
//! The board is a `width x height` grid where each cell is empty or holds the
//! kind of the piece that settled there. Dimensions come from the session's
//! field configuration and never change for the lifetime of a board; resizing
//! replaces the board wholesale.
//!
//! Cells live in a flat row-major vector for cache locality.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.
//! Rows above the board (y < 0) are legal for a piece that is still entering.

use crate::shape::Shape;
use crate::types::{Cell, PieceKind};

/// The settled grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i16, y: i16) -> Option<usize> {
        if x < 0 || x >= self.width as i16 || y < 0 || y >= self.height as i16 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i16, y: i16) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i16, y: i16, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i16, y: i16) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Would `shape` anchored at (x, y) touch a wall, the floor, or a settled cell?
    ///
    /// Cells above the board (y < 0) only test the side walls, so pieces can
    /// spawn partially off the top.
    pub fn collides(&self, shape: &Shape, x: i16, y: i16) -> bool {
        shape.cells().iter().any(|&(dx, dy)| {
            let px = x + dx;
            let py = y + dy;
            if px < 0 || px >= self.width as i16 || py >= self.height as i16 {
                return true;
            }
            py >= 0 && self.is_occupied(px, py)
        })
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height as usize {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_some())
    }

    /// Cells of one row
    pub fn row(&self, y: usize) -> &[Cell] {
        let width = self.width as usize;
        let start = y * width;
        &self.cells[start..start + width]
    }

    /// Remove every full row, pull the remaining rows down keeping their
    /// order, and refill the top with empty rows.
    ///
    /// Returns the number of rows removed. Only rows full right now are
    /// cleared; the result is not re-scanned.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.width as usize;
        let height = self.height as usize;
        let mut cleared = 0;
        let mut write_y = height;

        // Scan from bottom to top
        for read_y in (0..height).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        // Clear the remaining rows at the top
        self.cells[..write_y * width].fill(None);

        cleared
    }

    /// Write every occupied cell of `shape` at (x, y), clipped to the board.
    ///
    /// Returns the number of cells written.
    pub fn stamp(&mut self, shape: &Shape, x: i16, y: i16, kind: PieceKind) -> usize {
        shape
            .cells()
            .iter()
            .filter(|&&(dx, dy)| self.set(x + dx, y + dy, Some(kind)))
            .count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of settled cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Build a board from text rows (`.` empty, a piece letter settled).
    ///
    /// ```
    /// use blockfall_core::Board;
    ///
    /// let board = Board::from_rows(&["......", "II.III"]).unwrap();
    /// assert_eq!(board.width(), 6);
    /// assert!(board.is_occupied(0, 1));
    /// ```
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first().map(|r| r.chars().count())?;
        if width == 0 || width > u8::MAX as usize || height > u8::MAX as usize {
            return None;
        }

        let mut board = Self::new(width as u8, height as u8);
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return None;
            }
            for (x, ch) in row.chars().enumerate() {
                let cell = PieceKind::from_str(&ch.to_string());
                board.set(x as i16, y as i16, cell);
            }
        }
        Some(board)
    }

    /// Render as text rows (`.` empty, piece letter otherwise).
    pub fn to_rows(&self) -> Vec<String> {
        (0..self.height as usize)
            .map(|y| {
                self.row(y)
                    .iter()
                    .map(|c| match c {
                        Some(kind) => kind.letter().chars().next().unwrap_or('#'),
                        None => '.',
                    })
                    .collect()
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_WIDTH, crate::types::DEFAULT_HEIGHT)
    }
}
