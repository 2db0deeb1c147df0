//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the simulation rules and state management. It has
//! **zero dependencies** on UI, timers, or I/O, making it:
//!
//! - **Deterministic**: same seed produces identical piece sequences
//! - **Testable**: every rule is exercised without a terminal
//! - **Portable**: runs headless or behind any frontend
//!
//! # Module Structure
//!
//! - [`board`]: fixed-size occupancy grid with placement and line clearing
//! - [`shape`]: immutable piece matrices, rotation, and the shape catalog
//! - [`rng`]: seedable LCG and the lookahead piece queue
//! - [`game_state`]: the active piece and the `GameState` aggregate
//! - [`snapshot`]: read-only render view
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::{GameAction, GameConfig};
//!
//! let mut game = GameState::new(GameConfig::default(), 12345);
//! game.start();
//!
//! game.apply_action(GameAction::MoveLeft);
//! game.apply_action(GameAction::Rotate);
//! game.tick(); // one clock fire; gravity per the drop interval
//!
//! assert!(!game.game_over());
//! ```

pub mod board;
pub mod game_state;
pub mod rng;
pub mod shape;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{GameState, Piece};
pub use rng::{PieceQueue, SimpleRng};
pub use shape::{Shape, ShapeCatalog};
pub use snapshot::GameSnapshot;
