//! Terminal layer: pure frame construction plus raw-mode I/O.
//!
//! [`GameView`] turns a [`blockfall_core::GameSnapshot`] into a text frame
//! and is unit-testable; [`TerminalRenderer`] owns the raw-mode session and
//! flushes frames to the real terminal.

pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use game_view::GameView;
pub use renderer::TerminalRenderer;
