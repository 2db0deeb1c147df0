//! Terminal input module.
//!
//! Maps `crossterm` key events into [`blockfall_types::GameAction`] values.
//! The mapping layer knows nothing about the game loop; the binary decides
//! when and on which thread events are read.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
