//! PCG32 pseudorandom number generator (PCG-XSH-RR).
//!
//! Drives the random fallback. A run is reproducible from its
//! `(seed, seq)` pair; when no seed is supplied one is taken from the
//! clock and reported back with the result.

use std::time::{SystemTime, UNIX_EPOCH};

const MULTIPLIER: u64 = 6_364_136_223_846_793_005;

#[derive(Debug, Clone)]
pub struct Pcg32 {
    state: u64,
    inc: u64,
}

impl Pcg32 {
    pub fn new(seed: u64, seq: u64) -> Self {
        let inc = (seq << 1) | 1;
        let mut rng = Pcg32 { state: 0, inc };
        rng.advance();
        rng.state = rng.state.wrapping_add(seed);
        rng.advance();
        rng
    }

    fn advance(&mut self) {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(self.inc);
    }

    pub fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.advance();
        let xorshifted = (((old >> 18) ^ old) >> 27) as u32;
        let rot = (old >> 59) as u32;
        (xorshifted >> rot) | (xorshifted << (rot.wrapping_neg() & 31))
    }

    /// Value in `0..bound`. Plain modulo, so very slightly biased for
    /// bounds that do not divide 2^32; fine for grid sides <= 1000.
    pub fn next_below(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0);
        self.next_u32() as usize % bound
    }
}

/// Seed derived from the wall clock, taken once per run.
pub fn clock_seed() -> u64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(d) => d.as_secs() ^ (d.subsec_nanos() as u64).rotate_left(32),
        // Clock before 1970; any fixed value will do.
        Err(_) => 0x853c_49e6_748f_ea9b,
    }
}
