//! Occurrence counts of each number over a window of draws.
//!
//! Only the six main numbers count; bonus numbers are excluded.
//! Ties in rankings break by ascending number value.

use crate::{
    draw::Draw,
    types::{in_range, MAX_NUMBER, MIN_NUMBER, NUMBERS_PER_SET},
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberFrequency {
    pub number: u8,
    pub count: u32,
    /// count / draws counted * 100.
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrequencyTable {
    /// Every number 1-45 is present, zero counts included.
    pub counts: BTreeMap<u8, u32>,
    pub draws_counted: usize,
    /// Draws in the window dropped for out-of-range or repeated numbers.
    pub skipped_draws: usize,
}

impl FrequencyTable {
    fn empty() -> Self {
        Self {
            counts: (MIN_NUMBER..=MAX_NUMBER).map(|n| (n, 0)).collect(),
            draws_counted: 0,
            skipped_draws: 0,
        }
    }

    pub fn count(&self, number: u8) -> u32 {
        self.counts.get(&number).copied().unwrap_or(0)
    }

    pub fn percentage(&self, number: u8) -> f64 {
        if self.draws_counted == 0 {
            return 0.0;
        }
        self.count(number) as f64 / self.draws_counted as f64 * 100.0
    }

    /// All numbers, most frequent first.
    pub fn ranked(&self) -> Vec<NumberFrequency> {
        let mut entries = self.entries();
        entries.sort_by(|a, b| b.count.cmp(&a.count).then(a.number.cmp(&b.number)));
        entries
    }

    /// All numbers in ascending number order.
    pub fn entries(&self) -> Vec<NumberFrequency> {
        self.counts
            .iter()
            .map(|(&number, &count)| NumberFrequency {
                number,
                count,
                percentage: self.percentage(number),
            })
            .collect()
    }

    /// The `k` most frequent numbers.
    pub fn top(&self, k: usize) -> Vec<u8> {
        self.ranked().into_iter().take(k).map(|f| f.number).collect()
    }

    /// The `k` least frequent numbers.
    pub fn bottom(&self, k: usize) -> Vec<u8> {
        let mut entries = self.entries();
        entries.sort_by(|a, b| a.count.cmp(&b.count).then(a.number.cmp(&b.number)));
        entries.into_iter().take(k).map(|f| f.number).collect()
    }
}

/// The six main numbers of a draw, or None if any is out of range or repeated.
pub(crate) fn usable_numbers(draw: &Draw) -> Option<[u8; NUMBERS_PER_SET]> {
    let mut out = [0u8; NUMBERS_PER_SET];
    let mut seen = HashSet::with_capacity(NUMBERS_PER_SET);
    for (slot, n) in out.iter_mut().zip(draw.numbers()) {
        let n = u8::try_from(n).ok().filter(|&n| in_range(n))?;
        if !seen.insert(n) {
            return None;
        }
        *slot = n;
    }
    Some(out)
}

/// Count main-number occurrences over `draws` (most recent first).
/// `window` limits the count to the most recent N draws; None means all.
pub fn compute_frequencies(draws: &[Draw], window: Option<usize>) -> FrequencyTable {
    let window = window.map_or(draws.len(), |w| w.min(draws.len()));
    let mut table = FrequencyTable::empty();

    for draw in &draws[..window] {
        match usable_numbers(draw) {
            Some(numbers) => {
                for n in numbers {
                    *table.counts.entry(n).or_insert(0) += 1;
                }
                table.draws_counted += 1;
            }
            None => {
                log::warn!("round {}: skipping malformed numbers {:?}", draw.round, draw.numbers());
                table.skipped_draws += 1;
            }
        }
    }

    table
}
