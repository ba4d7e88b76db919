//! Number recommendation: random, frequency-weighted, hot, cold and
//! section-balanced picks, plus the three weekly prediction sets.

use crate::{
    draw::Draw,
    error::{CoreError, CoreResult},
    frequency::{compute_frequencies, FrequencyTable},
    rng::RandomSource,
    stats::DEFAULT_RECENT_DRAWS,
    ticket::Ticket,
    types::{NUMBERS_PER_SET, POOL_SIZE, SECTIONS},
};
use serde::{Deserialize, Serialize};

/// Size of the hot and cold pools.
pub const HOT_COLD_POOL: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendMethod {
    Random,
    Statistics,
    Hot,
    Cold,
    Balanced,
}

impl std::str::FromStr for RecommendMethod {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "random" => Ok(Self::Random),
            "statistics" => Ok(Self::Statistics),
            "hot" => Ok(Self::Hot),
            "cold" => Ok(Self::Cold),
            "balanced" => Ok(Self::Balanced),
            other => Err(anyhow::anyhow!("unknown recommend method '{other}'").into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendedSet {
    pub label: String,
    pub numbers: Ticket,
}

fn random_number<R: RandomSource + ?Sized>(rng: &mut R) -> u8 {
    rng.below(POOL_SIZE) as u8 + 1
}

fn top_up<R: RandomSource + ?Sized>(picked: &mut Vec<u8>, count: usize, rng: &mut R) {
    while picked.len() < count {
        let n = random_number(rng);
        if !picked.contains(&n) {
            picked.push(n);
        }
    }
}

/// Pick `count` distinct numbers uniformly from `pool`, filling with
/// uniform random numbers when the pool runs short.
pub fn pick_from_pool<R: RandomSource + ?Sized>(pool: &[u8], count: usize, rng: &mut R) -> Vec<u8> {
    let mut available: Vec<u8> = Vec::with_capacity(pool.len());
    for &n in pool {
        if !available.contains(&n) {
            available.push(n);
        }
    }
    let mut picked = Vec::with_capacity(count);
    while picked.len() < count && !available.is_empty() {
        let idx = rng.below(available.len());
        picked.push(available.remove(idx));
    }
    top_up(&mut picked, count, rng);
    picked
}

/// One number per section, preferring cold numbers that fall in the
/// section, then a sixth distinct random number.
pub fn pick_balanced<R: RandomSource + ?Sized>(cold: &[u8], rng: &mut R) -> Vec<u8> {
    let mut picked = Vec::with_capacity(NUMBERS_PER_SET);
    for &(min, max) in &SECTIONS {
        let in_section: Vec<u8> = cold.iter().copied().filter(|n| (min..=max).contains(n)).collect();
        let n = if in_section.is_empty() {
            min + rng.below((max - min + 1) as usize) as u8
        } else {
            in_section[rng.below(in_section.len())]
        };
        picked.push(n);
    }
    top_up(&mut picked, NUMBERS_PER_SET, rng);
    picked
}

/// Weighted draw without replacement; weight is count + 1 so numbers
/// never seen in the window stay eligible.
pub fn pick_weighted<R: RandomSource + ?Sized>(table: &FrequencyTable, rng: &mut R) -> Vec<u8> {
    let mut available: Vec<(u8, f64)> = table
        .counts
        .iter()
        .map(|(&n, &c)| (n, c as f64 + 1.0))
        .collect();
    let mut picked = Vec::with_capacity(NUMBERS_PER_SET);
    while picked.len() < NUMBERS_PER_SET {
        let total: f64 = available.iter().map(|(_, w)| w).sum();
        let mut target = rng.next_f64() * total;
        let mut idx = available.len() - 1;
        for (i, (_, w)) in available.iter().enumerate() {
            if target < *w {
                idx = i;
                break;
            }
            target -= w;
        }
        picked.push(available.remove(idx).0);
    }
    picked
}

/// One recommended ticket. `draws` is most recent first. With no
/// draws every method degrades to a uniform quick pick.
pub fn recommend<R: RandomSource + ?Sized>(
    method: RecommendMethod,
    draws: &[Draw],
    rng: &mut R,
) -> CoreResult<Ticket> {
    if draws.is_empty() && method != RecommendMethod::Random {
        log::warn!("no draws available for {method:?}, using a random pick");
    }
    let picked = match method {
        _ if draws.is_empty() => return Ok(Ticket::quick_pick(rng)),
        RecommendMethod::Random => return Ok(Ticket::quick_pick(rng)),
        RecommendMethod::Statistics => pick_weighted(&compute_frequencies(draws, None), rng),
        RecommendMethod::Hot => {
            let recent = compute_frequencies(draws, Some(DEFAULT_RECENT_DRAWS));
            pick_from_pool(&recent.top(HOT_COLD_POOL), NUMBERS_PER_SET, rng)
        }
        RecommendMethod::Cold => {
            let recent = compute_frequencies(draws, Some(DEFAULT_RECENT_DRAWS));
            pick_from_pool(&recent.bottom(HOT_COLD_POOL), NUMBERS_PER_SET, rng)
        }
        RecommendMethod::Balanced => {
            let recent = compute_frequencies(draws, Some(DEFAULT_RECENT_DRAWS));
            pick_balanced(&recent.bottom(HOT_COLD_POOL), rng)
        }
    };
    log::debug!("recommend {method:?}: {picked:?}");
    Ticket::new(&picked)
}

/// The weekly A/B/C sets:
///   A: hot numbers of the last 20 draws,
///   B: top hot numbers mixed with the all-time most common,
///   C: section-balanced over the cold numbers of the last 20 draws.
pub fn prediction_sets<R: RandomSource + ?Sized>(
    draws: &[Draw],
    rng: &mut R,
) -> CoreResult<Vec<RecommendedSet>> {
    let recent = compute_frequencies(draws, Some(DEFAULT_RECENT_DRAWS));
    let all_time = compute_frequencies(draws, None);

    let hot = recent.top(HOT_COLD_POOL);
    let cold = recent.bottom(HOT_COLD_POOL);
    let all_time_top = all_time.top(15);

    let set_a = pick_from_pool(&hot, NUMBERS_PER_SET, rng);

    let mut mixed: Vec<u8> = hot.iter().take(5).copied().collect();
    for &n in all_time_top.iter().take(5) {
        if !mixed.contains(&n) {
            mixed.push(n);
        }
    }
    let set_b = pick_from_pool(&mixed, NUMBERS_PER_SET, rng);

    let set_c = pick_balanced(&cold, rng);

    Ok(vec![
        RecommendedSet { label: "A (hot numbers)".into(), numbers: Ticket::new(&set_a)? },
        RecommendedSet { label: "B (combined analysis)".into(), numbers: Ticket::new(&set_b)? },
        RecommendedSet { label: "C (balanced)".into(), numbers: Ticket::new(&set_c)? },
    ])
}
