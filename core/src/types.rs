//! Shared primitive types and game constants used across the crate.

/// A draw round number. Round 1 was drawn on 2002-12-07.
pub type Round = u32;

/// A monetary amount in won. All money is integral.
pub type Won = i64;

/// Smallest number in the 6/45 pool.
pub const MIN_NUMBER: u8 = 1;

/// Largest number in the 6/45 pool.
pub const MAX_NUMBER: u8 = 45;

/// Size of the number pool.
pub const POOL_SIZE: usize = MAX_NUMBER as usize;

/// Main numbers per ticket and per draw.
pub const NUMBERS_PER_SET: usize = 6;

/// Numbers strictly above this count as "high".
pub const HIGH_LOW_THRESHOLD: u8 = 22;

/// Number sections used for balanced picks.
pub const SECTIONS: [(u8, u8); 5] = [(1, 9), (10, 18), (19, 27), (28, 36), (37, 45)];

pub fn in_range(n: u8) -> bool {
    (MIN_NUMBER..=MAX_NUMBER).contains(&n)
}
