//! RNG module - seedable randomness and the lookahead piece queue
//!
//! Upcoming pieces are drawn uniformly at random from the shape catalog into
//! a bounded lookahead buffer. The RNG is a simple seedable LCG so queue
//! behavior is reproducible in tests.

use std::collections::VecDeque;

use crate::shape::{Shape, ShapeCatalog};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Current internal state (for replaying a game).
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Bounded-lookahead supply of upcoming shapes.
///
/// Invariant: immediately after any queue operation, `len() >= lookahead`.
/// The head is the next piece to spawn; `next()` removes it and restores the
/// lookahead before returning.
#[derive(Debug, Clone)]
pub struct PieceQueue {
    queue: VecDeque<Shape>,
    catalog: ShapeCatalog,
    lookahead: usize,
    rng: SimpleRng,
}

impl PieceQueue {
    /// Create a filled queue drawing from `catalog` with the given seed.
    pub fn new(catalog: ShapeCatalog, lookahead: usize, seed: u32) -> Self {
        assert!(lookahead > 0, "queue lookahead must be positive");
        let mut queue = Self {
            queue: VecDeque::with_capacity(lookahead),
            catalog,
            lookahead,
            rng: SimpleRng::new(seed),
        };
        queue.refill();
        queue
    }

    /// Top the queue up to the lookahead depth. Idempotent once full.
    pub fn refill(&mut self) {
        while self.queue.len() < self.lookahead {
            let index = self.rng.next_range(self.catalog.len() as u32) as usize;
            self.queue.push_back(self.catalog.get(index));
        }
    }

    /// Remove and return the head shape, restoring the lookahead invariant.
    ///
    /// An empty queue here is an internal-consistency failure; refill
    /// discipline makes it unreachable through the public API.
    pub fn next(&mut self) -> Shape {
        let shape = self
            .queue
            .pop_front()
            .expect("piece queue empty: lookahead invariant violated");
        self.refill();
        shape
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Upcoming shapes in draw order.
    pub fn preview(&self) -> impl Iterator<Item = &Shape> {
        self.queue.iter()
    }

    /// Current RNG state (for restarting with the same sequence).
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }

    pub fn catalog(&self) -> &ShapeCatalog {
        &self.catalog
    }
}
