//! Shared types module - tunable parameters, actions, and events
//!
//! Pure data structures with no external dependencies, usable from the
//! simulation core, the terminal layer, and the gameplay binary alike.
//!
//! # Defaults
//!
//! | Parameter | Value | Description |
//! |-----------|-------|-------------|
//! | `BOARD_ROWS` | 20 | Grid rows (indexed 0-19, top to bottom) |
//! | `BOARD_COLS` | 10 | Grid columns (indexed 0-9, left to right) |
//! | `QUEUE_LOOKAHEAD` | 3 | Upcoming shapes kept in the piece queue |
//! | `TICK_MS` | 500 | Physical timer period |
//! | `DROP_INTERVAL_TICKS` | 1 | Timer fires per gravity step |
//!
//! The drop interval is a tick multiplier, not the timer period itself, so
//! drop speed can vary independently of the physical timer.

use std::time::Duration;

/// Default board dimensions
pub const BOARD_ROWS: usize = 20;
pub const BOARD_COLS: usize = 10;

/// Default piece queue lookahead depth
pub const QUEUE_LOOKAHEAD: usize = 3;

/// Default physical timer period (milliseconds)
pub const TICK_MS: u64 = 500;

/// Default gravity interval in timer fires
pub const DROP_INTERVAL_TICKS: u32 = 1;

/// Tunable game parameters.
///
/// All values are fixed for a given game; they exist as configuration so
/// tests can run small boards, fast clocks, and deep queues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Grid rows (R)
    pub rows: usize,
    /// Grid columns (C)
    pub cols: usize,
    /// Minimum piece queue length (N)
    pub lookahead: usize,
    /// Physical timer period
    pub tick_period: Duration,
    /// Timer fires per gravity step (>= 1)
    pub drop_interval: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: BOARD_ROWS,
            cols: BOARD_COLS,
            lookahead: QUEUE_LOOKAHEAD,
            tick_period: Duration::from_millis(TICK_MS),
            drop_interval: DROP_INTERVAL_TICKS,
        }
    }
}

/// Player commands applied to the active piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
}

/// Events funneled through the command channel into the game loop.
///
/// The timer thread produces `Tick`, the input thread produces `Action` and
/// `Quit`. The game-state-owning consumer applies each event to completion
/// before reading the next, which is the whole mutual-exclusion story.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Tick,
    Action(GameAction),
    Quit,
}
