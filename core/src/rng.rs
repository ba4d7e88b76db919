//! Deterministic random number generation.
//!
//! RULE: Nothing in the crate calls a platform RNG directly.
//! All randomness flows through a `RandomSource`, so every caller
//! can inject a seeded stream and every run can be reproduced.
//!
//! `RngBank` derives one stream per `StreamSlot` from a single
//! master seed, seeded from (master_seed XOR slot_index * golden).
//!   - Adding a new slot never changes existing slots' streams.
//!   - Each stream is fully reproducible in isolation.

use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

/// A source of uniform floats in [0.0, 1.0).
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;

    /// Roll an index in [0, n). Panics if n is zero.
    fn below(&mut self, n: usize) -> usize {
        assert!(n > 0, "n must be > 0");
        ((self.next_f64() * n as f64) as usize).min(n - 1)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// Adapts any closure yielding floats in [0, 1) into a `RandomSource`.
/// Mostly useful in tests to script exact rolls.
pub struct FnSource<F>(pub F);

impl<F: FnMut() -> f64> RandomSource for FnSource<F> {
    fn next_f64(&mut self) -> f64 {
        (self.0)()
    }
}

/// A named, deterministic PCG stream.
pub struct SeededRng {
    pub name: &'static str,
    inner: Pcg64Mcg,
}

impl SeededRng {
    /// Create a stream from the master seed and a stable slot index.
    /// The index must never change once assigned.
    pub fn new(master_seed: u64, slot_index: u64) -> Self {
        let derived_seed = master_seed ^ (slot_index.wrapping_mul(0x9e37_79b9_7f4a_7c15));
        Self {
            name: "unnamed",
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    /// A stream seeded directly, with no slot derivation.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            name: "seeded",
            inner: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    /// An unseeded stream for interactive use. Not reproducible.
    pub fn from_entropy() -> Self {
        Self {
            name: "entropy",
            inner: Pcg64Mcg::from_entropy(),
        }
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Draw a raw u64 (full range).
    pub fn next_u64(&mut self) -> u64 {
        use rand::RngCore;
        self.inner.next_u64()
    }
}

impl RandomSource for SeededRng {
    fn next_f64(&mut self) -> f64 {
        let bits = self.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }
}

/// Every stream for a single run, indexed by stable slot.
pub struct RngBank {
    master_seed: u64,
}

impl RngBank {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    pub fn for_slot(&self, slot: StreamSlot) -> SeededRng {
        SeededRng::new(self.master_seed, slot as u64).with_name(slot.name())
    }
}

/// Stable stream slot assignments.
/// NEVER reorder or remove entries, only append.
/// Reordering changes every stream's seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum StreamSlot {
    Simulator = 0,
    QuickPick = 1,
    Recommend = 2,
    Lucky = 3,
}

impl StreamSlot {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Simulator => "simulator",
            Self::QuickPick => "quick_pick",
            Self::Recommend => "recommend",
            Self::Lucky => "lucky",
        }
    }
}
