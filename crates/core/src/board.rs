//! Board module - the committed occupancy grid
//!
//! Row-major flat storage, `(y * cols + x)` indexing. Dimensions are fixed at
//! construction. The board is mutated only by piece placement and line
//! clearing; movement legality is tested against it read-only.

use arrayvec::ArrayVec;

use crate::shape::{Shape, MAX_SHAPE_DIM};

/// The game board - `rows x cols` binary occupancy grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<bool>,
    rows: usize,
    cols: usize,
}

impl Board {
    /// Create a new empty board.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "board dimensions must be positive");
        Self {
            cells: vec![false; rows * cols],
            rows,
            cols,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the cell at (x, y) is occupied. Out of bounds reads as empty;
    /// bounds themselves are the caller's concern (see `Piece::can_move`).
    pub fn occupied(&self, x: i32, y: i32) -> bool {
        if x < 0 || x >= self.cols as i32 || y < 0 || y >= self.rows as i32 {
            return false;
        }
        self.cells[y as usize * self.cols + x as usize]
    }

    /// Mark the cell at (x, y) occupied. Out-of-bounds writes are ignored;
    /// a locking piece may still have cells above the visible grid.
    pub fn set_occupied(&mut self, x: i32, y: i32) {
        if x >= 0 && x < self.cols as i32 && y >= 0 && y < self.rows as i32 {
            self.cells[y as usize * self.cols + x as usize] = true;
        }
    }

    /// Whether row `y` is completely occupied.
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.rows {
            return false;
        }
        let start = y * self.cols;
        self.cells[start..start + self.cols].iter().all(|&c| c)
    }

    /// Commit a shape to the board at anchor (x, y).
    ///
    /// No legality check is performed; the caller must already have decided
    /// to lock via a failed downward move test.
    pub fn place(&mut self, shape: &Shape, x: i32, y: i32) {
        for (r, c) in shape.cells() {
            self.set_occupied(x + c as i32, y + r as i32);
        }
    }

    /// Remove every fully occupied row, compacting the remainder downward and
    /// refilling the top with empty rows. Dimensions are preserved.
    ///
    /// Returns the cleared row indices, bottom to top. A single lock can
    /// complete at most `MAX_SHAPE_DIM` rows.
    pub fn clear_lines(&mut self) -> ArrayVec<usize, MAX_SHAPE_DIM> {
        let mut cleared = ArrayVec::new();
        let mut write_y = self.rows;

        // Two-pointer scan from the bottom: surviving rows slide down into
        // the write cursor, full rows are skipped.
        for read_y in (0..self.rows).rev() {
            if self.is_row_full(read_y) {
                let _ = cleared.try_push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src = read_y * self.cols;
                    let dst = write_y * self.cols;
                    self.cells.copy_within(src..src + self.cols, dst);
                }
            }
        }

        // Fresh empty rows on top.
        for cell in &mut self.cells[..write_y * self.cols] {
            *cell = false;
        }

        cleared
    }

    /// Flat view of the grid, row-major.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Number of occupied cells (test observability).
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Fill an entire row (test setup helper).
    pub fn fill_row(&mut self, y: usize) {
        assert!(y < self.rows, "row {} out of range", y);
        for x in 0..self.cols {
            self.cells[y * self.cols + x] = true;
        }
    }
}
