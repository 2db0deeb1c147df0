//! GameView: maps a `GameSnapshot` into a text frame.
//!
//! This module is pure (no I/O). It can be unit-tested.

use blockfall_core::shape::MAX_SHAPE_DIM;
use blockfall_core::GameSnapshot;

/// Glyph for a committed board cell.
const LOCKED: char = '█';
/// Glyph for an active-piece cell.
const ACTIVE: char = '■';
/// Glyph for an empty board cell.
const EMPTY: char = '·';
/// Glyph for an occupied cell in the queue sidebar.
const QUEUE_FILLED: char = '■';

/// Gap between the board and the queue sidebar.
const GUTTER: &str = "    ";
/// Vertical rows reserved per queued shape in the sidebar.
const QUEUE_SLOT_ROWS: usize = MAX_SHAPE_DIM;

/// Renders snapshots into frames; never mutates game state.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    /// Render one frame: the board with distinguishable locked/active/empty
    /// cells, and the upcoming queue stacked beside it in draw order.
    pub fn render(&self, snap: &GameSnapshot) -> String {
        let mut frame = String::with_capacity((snap.cols + 24) * (snap.rows + 1));

        // Header row carries the sidebar label past the board edge.
        for _ in 0..snap.cols {
            frame.push(' ');
        }
        frame.push_str(GUTTER);
        frame.push_str("Next shapes:");
        frame.push('\n');

        for y in 0..snap.rows {
            for x in 0..snap.cols {
                frame.push(if snap.occupied(x, y) {
                    LOCKED
                } else if snap.active_at(x, y) {
                    ACTIVE
                } else {
                    EMPTY
                });
            }

            // Queue sidebar: each queued shape gets a fixed block of rows.
            let slot = y / QUEUE_SLOT_ROWS;
            let slot_row = y % QUEUE_SLOT_ROWS;
            if let Some(shape) = snap.queue.get(slot) {
                if slot_row < shape.height() {
                    frame.push_str(GUTTER);
                    for col in 0..shape.width() {
                        frame.push(if shape.filled(slot_row, col) {
                            QUEUE_FILLED
                        } else {
                            ' '
                        });
                    }
                }
            }

            frame.push('\n');
        }

        frame
    }
}
