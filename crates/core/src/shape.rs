//! Shape module - immutable piece matrices and clockwise rotation
//!
//! A shape is a small rectangular binary matrix. Rotation is a pure function
//! that builds a new value, so a candidate orientation can be collision-tested
//! and thrown away without touching the active piece.

/// Maximum extent of a shape matrix in either axis.
pub const MAX_SHAPE_DIM: usize = 4;

/// One piece orientation - a `height x width` binary matrix.
///
/// Stored inline (no allocation) so shapes are cheap `Copy` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    cells: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
    width: usize,
    height: usize,
}

impl Shape {
    /// Build a shape from row slices of 0/1 values.
    ///
    /// Panics on empty, ragged, or oversized input; shape definitions are
    /// startup constants, not untrusted data.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        assert!(
            !rows.is_empty() && rows.len() <= MAX_SHAPE_DIM,
            "shape height must be 1..={}",
            MAX_SHAPE_DIM
        );
        let width = rows[0].len();
        assert!(
            width >= 1 && width <= MAX_SHAPE_DIM,
            "shape width must be 1..={}",
            MAX_SHAPE_DIM
        );

        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), width, "ragged shape rows");
            for (x, &v) in row.iter().enumerate() {
                cells[y][x] = v != 0;
            }
        }

        Self {
            cells,
            width,
            height: rows.len(),
        }
    }

    /// Width of the bounding box in columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the bounding box in rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the cell at (row, col) is occupied. Out of range reads as empty.
    pub fn filled(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width && self.cells[row][col]
    }

    /// Occupied cells as (row, col) pairs within the bounding box.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.height).flat_map(move |r| {
            (0..self.width).filter_map(move |c| self.cells[r][c].then_some((r, c)))
        })
    }

    /// Clockwise 90-degree rotation.
    ///
    /// New row `i` is built by reading the `i`-th cell of each original row,
    /// last row first. Width and height swap.
    pub fn rotated(&self) -> Self {
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for i in 0..self.width {
            for j in 0..self.height {
                cells[i][j] = self.cells[self.height - 1 - j][i];
            }
        }
        Self {
            cells,
            width: self.height,
            height: self.width,
        }
    }
}

/// The fixed set of base shapes, immutable for the process lifetime.
#[derive(Debug, Clone)]
pub struct ShapeCatalog {
    shapes: Vec<Shape>,
}

impl ShapeCatalog {
    /// Build a catalog from explicit shapes (for tests and variants).
    pub fn new(shapes: Vec<Shape>) -> Self {
        assert!(!shapes.is_empty(), "shape catalog must not be empty");
        Self { shapes }
    }

    /// The standard five: line, square, T, S, Z.
    pub fn standard() -> Self {
        Self::new(vec![
            Shape::from_rows(&[&[1, 1, 1, 1]]),
            Shape::from_rows(&[&[1, 1], &[1, 1]]),
            Shape::from_rows(&[&[1, 1, 1], &[0, 1, 0]]),
            Shape::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
            Shape::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
        ])
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn get(&self, index: usize) -> Shape {
        self.shapes[index]
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }
}

impl Default for ShapeCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
