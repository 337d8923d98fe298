//! RNG module - deterministic deck shuffling.
//!
//! A small LCG (Numerical Recipes constants) plus Fisher-Yates. The same
//! seed always produces the same deal, which the test suites rely on.

/// Linear congruential generator for deck shuffles.
#[derive(Debug, Clone)]
pub struct DeckRng {
    state: u32,
}

impl DeckRng {
    /// Create a new RNG with the given seed.
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate the next random u32.
    pub fn next_u32(&mut self) -> u32 {
        // LCG: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Random value in `[0, max)`.
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Shuffle a slice with Fisher-Yates.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

impl Default for DeckRng {
    fn default() -> Self {
        Self::new(1)
    }
}
