//! RNG module - deterministic color supply
//!
//! A simple LCG seeds the color queue; each spawn draws two colors
//! independently and uniformly from the palette. Same seed, same game.

use crate::types::{PuyoColor, PALETTE_SIZE};

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
}

/// Color supplier for spawns: two uniform palette colors per pair,
/// with a one-pair lookahead for the NEXT preview.
#[derive(Debug, Clone)]
pub struct ColorQueue {
    rng: SimpleRng,
    next: (PuyoColor, PuyoColor),
}

impl ColorQueue {
    /// Create a new color queue with the given seed
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let next = (Self::draw_color(&mut rng), Self::draw_color(&mut rng));
        Self { rng, next }
    }

    fn draw_color(rng: &mut SimpleRng) -> PuyoColor {
        PuyoColor::ALL[rng.next_range(PALETTE_SIZE) as usize]
    }

    /// Peek at the upcoming pair without consuming it
    pub fn peek_pair(&self) -> (PuyoColor, PuyoColor) {
        self.next
    }

    /// Draw the next (satellite, pivot) pair
    pub fn draw_pair(&mut self) -> (PuyoColor, PuyoColor) {
        let pair = self.next;
        self.next = (
            Self::draw_color(&mut self.rng),
            Self::draw_color(&mut self.rng),
        );
        pair
    }

    /// Get the current RNG state (for reseeding a fresh game)
    pub fn seed(&self) -> u32 {
        self.rng.state
    }
}

impl Default for ColorQueue {
    fn default() -> Self {
        Self::new(1)
    }
}
