//! Shape module - square occupancy matrices and their rotation
//!
//! Every piece carries its own `Shape` value. The type is `Copy`, so taking a
//! shape from the catalog always yields an independent matrix; rotating one
//! piece can never disturb the template or another piece.
//!
//! Matrices are stored in fixed 4x4 storage with an explicit `size` (2, 3 or 4).
//! Only the top-left `size x size` block is meaningful.

use arrayvec::ArrayVec;

/// Largest supported matrix edge
pub const MAX_SHAPE_SIZE: usize = 4;

/// Offset of a single occupied cell relative to the shape's top-left anchor
pub type CellOffset = (i16, i16);

/// Occupied cells of a shape, at most `MAX_SHAPE_SIZE^2`
pub type ShapeCells = ArrayVec<CellOffset, { MAX_SHAPE_SIZE * MAX_SHAPE_SIZE }>;

/// Square boolean matrix marking occupied cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    size: u8,
    rows: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    /// Build a shape from raw rows. Cells outside `size x size` are ignored.
    pub const fn new(size: u8, rows: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE]) -> Self {
        Self { size, rows }
    }

    /// Parse a shape from text rows (`#` occupied, anything else empty).
    ///
    /// The matrix edge is the larger of the row count and the longest row,
    /// so ragged input is padded to square. Returns `None` above 4x4.
    ///
    /// ```
    /// use blockfall_core::Shape;
    ///
    /// let t = Shape::parse(&[".#.", "###", "..."]).unwrap();
    /// assert_eq!(t.size(), 3);
    /// assert!(t.is_filled(1, 0));
    /// ```
    pub fn parse(rows: &[&str]) -> Option<Self> {
        let longest = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        let size = rows.len().max(longest);
        if size == 0 || size > MAX_SHAPE_SIZE {
            return None;
        }

        let mut out = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (r, row) in rows.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                out[r][c] = ch == '#';
            }
        }
        Some(Self::new(size as u8, out))
    }

    /// Edge length of the matrix
    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// Is the cell at (col, row) occupied? Out-of-matrix reads are empty.
    pub fn is_filled(&self, col: usize, row: usize) -> bool {
        col < self.size() && row < self.size() && self.rows[row][col]
    }

    /// Occupied cells as (dx, dy) offsets in row-major order
    pub fn cells(&self) -> ShapeCells {
        let n = self.size();
        let mut out = ShapeCells::new();
        for row in 0..n {
            for col in 0..n {
                if self.rows[row][col] {
                    out.push((col as i16, row as i16));
                }
            }
        }
        out
    }

    /// Number of occupied cells
    pub fn cell_count(&self) -> usize {
        self.cells().len()
    }

    /// Rotate by 90°: transpose, then reverse each row (clockwise) or the
    /// row order (counter-clockwise).
    pub fn rotated(&self, clockwise: bool) -> Self {
        let n = self.size();
        let mut out = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (r, row) in self.rows.iter().enumerate().take(n) {
            for (c, &filled) in row.iter().enumerate().take(n) {
                out[c][r] = filled;
            }
        }

        if clockwise {
            for row in out.iter_mut().take(n) {
                row[..n].reverse();
            }
        } else {
            out[..n].reverse();
        }

        Self::new(self.size, out)
    }

    /// Render as text rows, mainly for diagnostics and tests.
    pub fn to_rows(&self) -> Vec<String> {
        let n = self.size();
        (0..n)
            .map(|r| {
                (0..n)
                    .map(|c| if self.rows[r][c] { '#' } else { '.' })
                    .collect()
            })
            .collect()
    }
}

/// Produce the rotated copy of `shape`.
pub fn rotate(shape: &Shape, clockwise: bool) -> Shape {
    shape.rotated(clockwise)
}
