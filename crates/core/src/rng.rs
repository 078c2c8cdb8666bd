//! RNG module - seeded generator for reproducible piece draws
//!
//! The simulation owns an explicit generator instance instead of reaching for
//! a process-wide one, so a given seed reproduces the identical sequence of
//! refill draws and power orientations. Draw order is fixed by the resolve
//! cycle (power orientation first, then refills column by column), which makes
//! whole games replayable from `(config, seed, selections)`.

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
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}
