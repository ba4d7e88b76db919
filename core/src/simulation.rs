//! The purchase simulator: buy the same ticket for N draws and
//! tally what it would have won.
//!
//! RULES:
//!   - One trial = one simulated draw + one tier match.
//!   - total_spent is always trials * ticket_price.
//!   - total_won is always the sum of count * payout over tiers.
//!   - best_tier is the most valuable tier seen, or None.
//!
//! `Simulation` can be advanced in chunks so an interactive caller
//! can yield between them. There is no cancel or partial-result
//! contract beyond that: drop the runner to abandon a run.

use crate::{
    config::LottoConfig,
    rng::RandomSource,
    simulator::simulate_draw,
    ticket::Ticket,
    tier::{match_tier, WinTier},
    types::Won,
};
use serde::{Deserialize, Serialize};

/// Practical ceiling for interactive runs.
pub const MAX_INTERACTIVE_DRAWS: u64 = 100_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierWins {
    pub tier: WinTier,
    pub count: u64,
    pub total_prize: Won,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub total_spent: Won,
    pub total_won: Won,
    pub draw_count: u64,
    /// One entry per tier, First through Fifth.
    pub wins: Vec<TierWins>,
    pub best_tier: Option<WinTier>,
}

impl SimulationResult {
    pub fn empty() -> Self {
        Self {
            total_spent: 0,
            total_won: 0,
            draw_count: 0,
            wins: WinTier::ALL
                .iter()
                .map(|&tier| TierWins { tier, count: 0, total_prize: 0 })
                .collect(),
            best_tier: None,
        }
    }

    pub fn wins_for(&self, tier: WinTier) -> &TierWins {
        &self.wins[tier.index()]
    }

    /// Trials that won anything.
    pub fn winning_draws(&self) -> u64 {
        self.wins.iter().map(|w| w.count).sum()
    }

    pub fn net_profit(&self) -> Won {
        self.total_won - self.total_spent
    }

    /// Return on spend in percent, or None when nothing was spent.
    pub fn roi_percent(&self) -> Option<f64> {
        if self.total_spent == 0 {
            return None;
        }
        Some(self.net_profit() as f64 / self.total_spent as f64 * 100.0)
    }
}

/// A resumable simulation run over one ticket.
pub struct Simulation<'c, R: RandomSource> {
    ticket: Ticket,
    config: &'c LottoConfig,
    rng: R,
    counts: [u64; 5],
    draws: u64,
    best_tier: Option<WinTier>,
}

impl<'c, R: RandomSource> Simulation<'c, R> {
    pub fn new(ticket: Ticket, config: &'c LottoConfig, rng: R) -> Self {
        Self {
            ticket,
            config,
            rng,
            counts: [0; 5],
            draws: 0,
            best_tier: None,
        }
    }

    pub fn ticket(&self) -> &Ticket {
        &self.ticket
    }

    pub fn draws_done(&self) -> u64 {
        self.draws
    }

    /// Run `n` more trials.
    pub fn advance(&mut self, n: u64) {
        for _ in 0..n {
            let draw = simulate_draw(&mut self.rng);
            if let Some(tier) = match_tier(&self.ticket, &draw) {
                self.counts[tier.index()] += 1;
                if self.best_tier.map_or(true, |best| tier < best) {
                    log::debug!("draw {} new best {tier}: {:?}", self.draws + 1, draw.numbers);
                    self.best_tier = Some(tier);
                }
            }
            self.draws += 1;
        }
    }

    /// Aggregate everything run so far.
    pub fn result(&self) -> SimulationResult {
        let wins: Vec<TierWins> = WinTier::ALL
            .iter()
            .map(|&tier| {
                let count = self.counts[tier.index()];
                TierWins {
                    tier,
                    count,
                    total_prize: count as Won * self.config.prizes.payout(tier),
                }
            })
            .collect();
        let total_won = wins.iter().map(|w| w.total_prize).sum();

        SimulationResult {
            total_spent: self.draws as Won * self.config.ticket_price,
            total_won,
            draw_count: self.draws,
            wins,
            best_tier: self.best_tier,
        }
    }

    pub fn finish(self) -> SimulationResult {
        let result = self.result();
        log::info!(
            "simulation finished: ticket=[{}] draws={} spent={} won={} best={:?}",
            self.ticket,
            result.draw_count,
            result.total_spent,
            result.total_won,
            result.best_tier.map(WinTier::number)
        );
        result
    }
}

/// Run `draws` trials of `ticket` in one call.
/// Zero draws yields `SimulationResult::empty()`.
pub fn run_simulation<R: RandomSource>(
    ticket: &Ticket,
    draws: u64,
    config: &LottoConfig,
    rng: R,
) -> SimulationResult {
    if draws > MAX_INTERACTIVE_DRAWS {
        log::warn!("running {draws} draws, above the interactive ceiling of {MAX_INTERACTIVE_DRAWS}");
    }
    let mut sim = Simulation::new(*ticket, config, rng);
    sim.advance(draws);
    sim.finish()
}
