//! Single simulated draw: six main numbers plus a bonus, sampled
//! uniformly without replacement from 1-45.

use crate::{
    rng::RandomSource,
    types::{NUMBERS_PER_SET, POOL_SIZE},
};
use serde::{Deserialize, Serialize};

const DRAW_POOL: usize = NUMBERS_PER_SET + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulatedDraw {
    /// Sorted ascending.
    pub numbers: [u8; NUMBERS_PER_SET],
    pub bonus: u8,
}

impl SimulatedDraw {
    /// Bit n is set for each main number n.
    pub fn mask(&self) -> u64 {
        self.numbers.iter().fold(0u64, |m, &n| m | (1u64 << n))
    }
}

/// Partial Fisher-Yates: swap seven random elements into the tail
/// of [1..45]; the first six of the tail are the main numbers and
/// the seventh is the bonus.
pub fn simulate_draw<R: RandomSource + ?Sized>(rng: &mut R) -> SimulatedDraw {
    let mut pool = [0u8; POOL_SIZE];
    for (i, slot) in pool.iter_mut().enumerate() {
        *slot = i as u8 + 1;
    }

    for i in ((POOL_SIZE - DRAW_POOL)..POOL_SIZE).rev() {
        let j = rng.below(i + 1);
        pool.swap(i, j);
    }

    let tail = &pool[POOL_SIZE - DRAW_POOL..];
    let mut numbers = [0u8; NUMBERS_PER_SET];
    numbers.copy_from_slice(&tail[..NUMBERS_PER_SET]);
    numbers.sort_unstable();

    SimulatedDraw {
        numbers,
        bonus: tail[NUMBERS_PER_SET],
    }
}
