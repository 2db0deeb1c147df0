//! Game state module - the active piece and the simulation aggregate
//!
//! `GameState` owns the board, the active piece, the piece queue, and the
//! tick counter. All mutation goes through `tick` and `apply_action`; there
//! are no free-standing mutable globals. Whoever owns the `GameState` owns
//! the critical section.

use blockfall_types::{GameAction, GameConfig};

use crate::board::Board;
use crate::rng::PieceQueue;
use crate::shape::{Shape, ShapeCatalog};

/// The currently falling, player-controllable piece.
///
/// (x, y) is the top-left anchor of the shape's bounding box in board
/// coordinates; y may be negative only transiently at spawn checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub shape: Shape,
    pub x: i32,
    pub y: i32,
}

impl Piece {
    /// Construct a piece at the fixed spawn anchor.
    ///
    /// The anchor is `cols/2 - 1` regardless of shape width; the design does
    /// not re-center per shape, so asymmetric shapes spawn slightly off
    /// center. Observable behavior, kept as-is.
    pub fn spawn(shape: Shape, cols: usize) -> Self {
        Self {
            shape,
            x: cols as i32 / 2 - 1,
            y: 0,
        }
    }

    /// Whether the piece can move by (dx, dy) on the given board.
    ///
    /// Every occupied cell's target must lie within the columns, above the
    /// floor, and on an empty board cell. Target rows above the grid are
    /// always legal so placement can be tested before the piece fully enters.
    pub fn can_move(&self, board: &Board, dx: i32, dy: i32) -> bool {
        self.shape.cells().all(|(r, c)| {
            let x = self.x + c as i32 + dx;
            let y = self.y + r as i32 + dy;
            x >= 0 && x < board.cols() as i32 && y < board.rows() as i32 && !board.occupied(x, y)
        })
    }

    /// Candidate piece with the shape rotated clockwise, position unchanged.
    ///
    /// Callers must test `can_move(board, 0, 0)` before committing it.
    pub fn rotated(&self) -> Self {
        Self {
            shape: self.shape.rotated(),
            ..*self
        }
    }
}

/// Complete game state.
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    queue: PieceQueue,
    active: Option<Piece>,
    tick_count: u32,
    game_over: bool,
    started: bool,
}

impl GameState {
    /// Create a new game with the standard shape catalog.
    pub fn new(config: GameConfig, seed: u32) -> Self {
        Self::with_catalog(config, ShapeCatalog::standard(), seed)
    }

    /// Create a new game drawing pieces from an explicit catalog.
    pub fn with_catalog(config: GameConfig, catalog: ShapeCatalog, seed: u32) -> Self {
        assert!(config.drop_interval >= 1, "drop interval must be >= 1");
        let board = Board::new(config.rows, config.cols);
        let queue = PieceQueue::new(catalog, config.lookahead, seed);
        Self {
            config,
            board,
            queue,
            active: None,
            tick_count: 0,
            game_over: false,
            started: false,
        }
    }

    /// Start the game and spawn the first piece from the queue.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn_piece();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn queue(&self) -> &PieceQueue {
        &self.queue
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn tick_count(&self) -> u32 {
        self.tick_count
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Pull the next shape from the queue and spawn it.
    ///
    /// A blocked spawn position is the game-over condition: the piece stays
    /// where it collided and no further ticks or actions are processed.
    fn spawn_piece(&mut self) {
        let shape = self.queue.next();
        let piece = Piece::spawn(shape, self.config.cols);

        if !piece.can_move(&self.board, 0, 0) {
            self.game_over = true;
        }
        self.active = Some(piece);
    }

    /// Commit the active piece, clear full rows, and respawn.
    fn lock_active(&mut self) {
        let Some(active) = self.active else {
            return;
        };

        self.board.place(&active.shape, active.x, active.y);
        self.board.clear_lines();
        self.active = None;
        self.spawn_piece();
    }

    /// One firing of the game clock.
    ///
    /// Increments the tick counter; when it reaches the drop interval a
    /// gravity step occurs - the piece falls one row or, if it cannot, locks
    /// into the board. Returns true when gravity fired.
    pub fn tick(&mut self) -> bool {
        if self.game_over || !self.started {
            return false;
        }

        self.tick_count += 1;
        if self.tick_count < self.config.drop_interval {
            return false;
        }
        self.tick_count = 0;

        let Some(mut active) = self.active else {
            return false;
        };

        if active.can_move(&self.board, 0, 1) {
            active.y += 1;
            self.active = Some(active);
        } else {
            self.lock_active();
        }
        true
    }

    /// Apply a player command to the active piece.
    ///
    /// Illegal moves and rotations are silently rejected; that is the
    /// expected outcome of collision testing, not an error. Returns whether
    /// the piece changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if self.game_over || !self.started {
            return false;
        }
        let Some(mut active) = self.active else {
            return false;
        };

        let changed = match action {
            GameAction::MoveLeft => {
                if active.can_move(&self.board, -1, 0) {
                    active.x -= 1;
                    true
                } else {
                    false
                }
            }
            GameAction::MoveRight => {
                if active.can_move(&self.board, 1, 0) {
                    active.x += 1;
                    true
                } else {
                    false
                }
            }
            // Soft drop advances gravity by hand; it does not reset the
            // tick counter.
            GameAction::SoftDrop => {
                if active.can_move(&self.board, 0, 1) {
                    active.y += 1;
                    true
                } else {
                    false
                }
            }
            GameAction::Rotate => {
                let candidate = active.rotated();
                if candidate.can_move(&self.board, 0, 0) {
                    active = candidate;
                    true
                } else {
                    false
                }
            }
        };

        if changed {
            self.active = Some(active);
        }
        changed
    }
}
