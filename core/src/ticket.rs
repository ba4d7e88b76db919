//! A player's six-number ticket.

use crate::{
    error::{CoreError, CoreResult},
    rng::RandomSource,
    types::{in_range, NUMBERS_PER_SET, POOL_SIZE},
};
use serde::{Deserialize, Serialize};

/// Exactly six distinct numbers in 1-45, kept sorted ascending.
/// A `Ticket` can only be built through validation, so everything
/// downstream may assume a well-formed game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct Ticket {
    numbers: [u8; NUMBERS_PER_SET],
}

impl Ticket {
    pub fn new(numbers: &[u8]) -> CoreResult<Self> {
        if numbers.len() != NUMBERS_PER_SET {
            return Err(CoreError::InvalidTicket {
                reason: format!("expected {NUMBERS_PER_SET} numbers, got {}", numbers.len()),
            });
        }
        if let Some(&bad) = numbers.iter().find(|&&n| !in_range(n)) {
            return Err(CoreError::InvalidNumber { value: bad as i64 });
        }
        let mut sorted = [0u8; NUMBERS_PER_SET];
        sorted.copy_from_slice(numbers);
        sorted.sort_unstable();
        if sorted.windows(2).any(|w| w[0] == w[1]) {
            return Err(CoreError::InvalidTicket {
                reason: format!("duplicate numbers in {numbers:?}"),
            });
        }
        Ok(Self { numbers: sorted })
    }

    /// Parse wider integers, reporting the first out-of-range value.
    pub fn from_i64s(values: &[i64]) -> CoreResult<Self> {
        let numbers = values
            .iter()
            .map(|&v| {
                u8::try_from(v)
                    .ok()
                    .filter(|&n| in_range(n))
                    .ok_or(CoreError::InvalidNumber { value: v })
            })
            .collect::<CoreResult<Vec<u8>>>()?;
        Self::new(&numbers)
    }

    /// A random ticket, drawn by partial Fisher-Yates over 1-45.
    pub fn quick_pick<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        let mut pool: Vec<u8> = (1..=POOL_SIZE as u8).collect();
        let len = pool.len();
        for i in ((len - NUMBERS_PER_SET)..len).rev() {
            let j = rng.below(i + 1);
            pool.swap(i, j);
        }
        let mut numbers = [0u8; NUMBERS_PER_SET];
        numbers.copy_from_slice(&pool[len - NUMBERS_PER_SET..]);
        numbers.sort_unstable();
        Self { numbers }
    }

    pub fn numbers(&self) -> &[u8; NUMBERS_PER_SET] {
        &self.numbers
    }

    pub fn contains(&self, n: u8) -> bool {
        self.numbers.contains(&n)
    }

    /// Bit n is set for each number n on the ticket.
    pub fn mask(&self) -> u64 {
        self.numbers.iter().fold(0u64, |m, &n| m | (1u64 << n))
    }
}

impl TryFrom<Vec<u8>> for Ticket {
    type Error = CoreError;

    fn try_from(numbers: Vec<u8>) -> CoreResult<Self> {
        Self::new(&numbers)
    }
}

impl From<Ticket> for Vec<u8> {
    fn from(ticket: Ticket) -> Self {
        ticket.numbers.to_vec()
    }
}

impl std::fmt::Display for Ticket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.numbers.iter().map(|n| n.to_string()).collect();
        write!(f, "{}", parts.join(", "))
    }
}
