//! Park-Miller Linear Congruential Generator (MINSTD)
//!
//! Seeded carving must produce the same maze on every platform, so the
//! generator uses pure integer arithmetic and no platform entropy.
//!
//! Constants:
//! - Multiplier (a): 48271
//! - Modulus (m): 2^31 - 1 = 2147483647
//!
//! Reference: https://en.wikipedia.org/wiki/Lehmer_random_number_generator

/// Deterministic pseudo-random stream: the same seed always yields the
/// same sequence.
pub struct SimpleLcg {
    state: u32,
}

impl SimpleLcg {
    const A: u64 = 48271;
    const M: u64 = 2147483647; // 2^31 - 1

    /// Creates a generator from a seed.
    ///
    /// Seed 0 is replaced with 1: the Lehmer sequence is stuck at zero.
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn advance(&mut self) {
        // u64 intermediate so the multiplication cannot overflow
        self.state = ((self.state as u64 * Self::A) % Self::M) as u32;
    }

    /// Uniform index into a non-empty set of `len` choices.
    pub fn choice_index(&mut self, len: usize) -> usize {
        self.advance();
        ((self.state as u64 * len as u64) / Self::M) as usize
    }

    /// Uniform integer in `[a, b]`, inclusive on both ends.
    pub fn randint(&mut self, a: usize, b: usize) -> usize {
        self.advance();
        let range = (b - a + 1) as u64;
        a + ((self.state as u64 * range) / Self::M) as usize
    }
}
