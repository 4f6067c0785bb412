//! Linear congruential generator kernel
//!
//! `x = (a * x + c) mod 2^32`, with the Numerical Recipes constants.

/// Multiplier `a`
pub const LCG_MULTIPLIER: u32 = 1_664_525;

/// Increment `c`
pub const LCG_INCREMENT: u32 = 1_013_904_223;

/// Advance the generator by one step
#[inline(always)]
pub fn step(x: u32) -> u32 {
    LCG_MULTIPLIER.wrapping_mul(x).wrapping_add(LCG_INCREMENT)
}

/// Final state after `n` steps starting from `x = 0`.
///
/// ```
/// use microbench::kernels::lcg::lcg;
///
/// assert_eq!(lcg(0), 0);
/// assert_eq!(lcg(1), 1013904223);
/// ```
pub fn lcg(n: u64) -> u32 {
    let mut x: u32 = 0;
    for _ in 0..n {
        x = step(x);
    }
    x
}

/// Infinite stream of generator states, excluding the seed
#[derive(Debug, Clone)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Current state without advancing
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for Lcg {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Iterator for Lcg {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        self.state = step(self.state);
        Some(self.state)
    }
}
