//! Read-only snapshot of the game state for rendering.
//!
//! The renderer never touches `GameState` directly; it observes a snapshot
//! taken after a mutation has fully committed, so it can never see a
//! partially applied move.

use crate::game_state::{GameState, Piece};
use crate::shape::Shape;

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameSnapshot {
    pub rows: usize,
    pub cols: usize,
    /// Committed cells, row-major `(y * cols + x)`.
    pub board: Vec<bool>,
    pub active: Option<Piece>,
    /// Upcoming shapes in draw order, `lookahead` entries.
    pub queue: Vec<Shape>,
    pub game_over: bool,
}

impl GameSnapshot {
    /// Whether the committed cell at (x, y) is occupied.
    pub fn occupied(&self, x: usize, y: usize) -> bool {
        x < self.cols && y < self.rows && self.board[y * self.cols + x]
    }

    /// Whether an active-piece cell covers (x, y).
    pub fn active_at(&self, x: usize, y: usize) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        let rel_x = x as i32 - active.x;
        let rel_y = y as i32 - active.y;
        rel_x >= 0 && rel_y >= 0 && active.shape.filled(rel_y as usize, rel_x as usize)
    }
}

impl GameState {
    /// Fill `out` with the current state, reusing its buffers.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.rows = self.board().rows();
        out.cols = self.board().cols();
        out.board.clear();
        out.board.extend_from_slice(self.board().cells());
        out.active = self.active();
        out.queue.clear();
        out.queue.extend(self.queue().preview().copied());
        out.game_over = self.game_over();
    }

    /// Convenience allocation of a fresh snapshot.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut out = GameSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }
}
