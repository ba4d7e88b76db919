//! Summary statistics shown alongside results: all-time and recent
//! frequencies, hot/cold numbers, odd/even and high/low balance.

use crate::{
    draw::Draw,
    frequency::{compute_frequencies, usable_numbers, NumberFrequency},
    types::{HIGH_LOW_THRESHOLD, NUMBERS_PER_SET},
};
use serde::{Deserialize, Serialize};

/// Default recent window for hot/cold numbers.
pub const DEFAULT_RECENT_DRAWS: usize = 20;

/// How many numbers the most/least common and hot/cold lists hold.
pub const HIGHLIGHT_COUNT: usize = NUMBERS_PER_SET;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OddEven {
    pub odd: u32,
    pub even: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighLow {
    pub high: u32,
    pub low: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LottoStats {
    pub total_draws: usize,
    pub frequencies: Vec<NumberFrequency>,
    pub recent_frequencies: Vec<NumberFrequency>,
    pub odd_even_ratio: OddEven,
    pub high_low_ratio: HighLow,
    pub most_common: Vec<u8>,
    pub least_common: Vec<u8>,
    pub hottest_numbers: Vec<u8>,
    pub coldest_numbers: Vec<u8>,
}

/// `draws` must be most recent first. All-time figures cover every
/// draw; hot/cold and the odd/even and high/low balance cover the
/// most recent `recent_count` draws. Malformed draws are left out of
/// every figure, the same way frequency counting skips them.
pub fn calculate_stats(draws: &[Draw], recent_count: usize) -> LottoStats {
    let all_time = compute_frequencies(draws, None);
    let recent = compute_frequencies(draws, Some(recent_count));

    let mut odd_even = OddEven::default();
    let mut high_low = HighLow::default();
    let recent_numbers = draws
        .iter()
        .take(recent_count)
        .filter_map(usable_numbers)
        .flatten();
    for n in recent_numbers {
        if n % 2 == 1 {
            odd_even.odd += 1;
        } else {
            odd_even.even += 1;
        }
        if n > HIGH_LOW_THRESHOLD {
            high_low.high += 1;
        } else {
            high_low.low += 1;
        }
    }

    LottoStats {
        total_draws: draws.len(),
        frequencies: all_time.entries(),
        recent_frequencies: recent.entries(),
        odd_even_ratio: odd_even,
        high_low_ratio: high_low,
        most_common: all_time.top(HIGHLIGHT_COUNT),
        least_common: all_time.bottom(HIGHLIGHT_COUNT),
        hottest_numbers: recent.top(HIGHLIGHT_COUNT),
        coldest_numbers: recent.bottom(HIGHLIGHT_COUNT),
    }
}
