//! Seedable randomness for kickoffs and spin

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// The only random draws the simulation makes
pub trait RandomSource {
    /// +1 or -1 with equal probability
    fn sign(&mut self) -> i32;
    /// Uniform integer in `[-max, max]`
    fn spin(&mut self, max: i32) -> i32;
}

impl RandomSource for Pcg32 {
    fn sign(&mut self) -> i32 {
        if self.random_bool(0.5) { 1 } else { -1 }
    }

    fn spin(&mut self, max: i32) -> i32 {
        self.random_range(-max..=max)
    }
}

/// RNG seed wrapper, logged at startup so a run can be replayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Replays fixed draws; lets tests pin kickoff signs and spin
#[cfg(test)]
#[derive(Debug, Clone)]
pub(crate) struct ScriptedRng {
    pub sign: i32,
    pub spin: i32,
}

#[cfg(test)]
impl RandomSource for ScriptedRng {
    fn sign(&mut self) -> i32 {
        self.sign
    }

    fn spin(&mut self, max: i32) -> i32 {
        self.spin.clamp(-max, max)
    }
}
