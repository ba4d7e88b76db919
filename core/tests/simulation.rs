//! Purchase simulator: accounting identities and tier ordering.

use lotto_core::{
    config::{LottoConfig, PrizeTable},
    rng::{FnSource, RngBank, SeededRng, StreamSlot},
    simulation::{run_simulation, Simulation, SimulationResult},
    ticket::Ticket,
    tier::WinTier,
};

fn ticket(numbers: [u8; 6]) -> Ticket {
    Ticket::new(&numbers).expect("valid ticket")
}

fn sim_rng(seed: u64) -> SeededRng {
    RngBank::new(seed).for_slot(StreamSlot::Simulator)
}

fn assert_identities(result: &SimulationResult, draws: u64, config: &LottoConfig) {
    assert_eq!(result.draw_count, draws);
    assert_eq!(result.total_spent, draws as i64 * config.ticket_price);

    let expected_won: i64 = result
        .wins
        .iter()
        .map(|w| w.count as i64 * config.prizes.payout(w.tier))
        .sum();
    assert_eq!(result.total_won, expected_won);

    for w in &result.wins {
        assert_eq!(w.total_prize, w.count as i64 * config.prizes.payout(w.tier));
    }

    let best = result.wins.iter().find(|w| w.count > 0).map(|w| w.tier);
    assert_eq!(result.best_tier, best, "best tier must be the most valuable tier with wins");
    assert!(result.winning_draws() <= draws);
}

#[test]
fn zero_draws_is_an_empty_result() {
    let config = LottoConfig::default();
    let result = run_simulation(&ticket([1, 2, 3, 4, 5, 6]), 0, &config, sim_rng(1));

    assert_eq!(result, SimulationResult::empty());
    assert_eq!(result.total_spent, 0);
    assert_eq!(result.total_won, 0);
    assert_eq!(result.best_tier, None);
    assert_eq!(result.wins.len(), 5);
    assert!(result.wins.iter().all(|w| w.count == 0 && w.total_prize == 0));
    assert_eq!(result.roi_percent(), None);
}

#[test]
fn accounting_identities_hold_across_draw_counts() {
    let config = LottoConfig::default();
    let t = ticket([3, 11, 19, 27, 35, 43]);
    for (seed, draws) in [(1u64, 1u64), (2, 10), (3, 999), (4, 20_000)] {
        let result = run_simulation(&t, draws, &config, sim_rng(seed));
        assert_identities(&result, draws, &config);
    }
}

#[test]
fn wins_are_listed_first_to_fifth() {
    let config = LottoConfig::default();
    let result = run_simulation(&ticket([1, 2, 3, 4, 5, 6]), 100, &config, sim_rng(8));
    let tiers: Vec<WinTier> = result.wins.iter().map(|w| w.tier).collect();
    assert_eq!(tiers, WinTier::ALL.to_vec());
}

#[test]
fn scripted_draw_hits_first_tier_every_time() {
    // Rolls of 0.0 always draw 40-45 with bonus 1.
    let config = LottoConfig::default();
    let result = run_simulation(&ticket([40, 41, 42, 43, 44, 45]), 25, &config, FnSource(|| 0.0));

    assert_eq!(result.wins_for(WinTier::First).count, 25);
    assert_eq!(result.total_won, 25 * 2_000_000_000);
    assert_eq!(result.best_tier, Some(WinTier::First));
    assert_identities(&result, 25, &config);
}

#[test]
fn five_plus_bonus_counts_as_second_tier() {
    let config = LottoConfig::default();
    let result = run_simulation(&ticket([1, 40, 41, 42, 43, 44]), 10, &config, FnSource(|| 0.0));

    assert_eq!(result.wins_for(WinTier::Second).count, 10);
    assert_eq!(result.wins_for(WinTier::Third).count, 0);
    assert_eq!(result.best_tier, Some(WinTier::Second));
}

#[test]
fn chunked_run_matches_single_run() {
    let config = LottoConfig::default();
    let t = ticket([7, 14, 21, 28, 35, 42]);

    let mut chunked = Simulation::new(t, &config, sim_rng(55));
    chunked.advance(300);
    chunked.advance(0);
    chunked.advance(700);
    assert_eq!(chunked.draws_done(), 1_000);
    let chunked = chunked.finish();

    let single = run_simulation(&t, 1_000, &config, sim_rng(55));
    assert_eq!(chunked, single);
}

#[test]
fn custom_prize_table_flows_into_totals() {
    let config = LottoConfig {
        ticket_price: 2_000,
        prizes: PrizeTable { fifth: 10_000, ..PrizeTable::default() },
        ..LottoConfig::default()
    };
    let result = run_simulation(&ticket([2, 9, 16, 23, 30, 37]), 5_000, &config, sim_rng(21));

    assert_eq!(result.total_spent, 10_000_000);
    assert_eq!(result.wins_for(WinTier::Fifth).total_prize, result.wins_for(WinTier::Fifth).count as i64 * 10_000);
    assert_identities(&result, 5_000, &config);
}

#[test]
fn fifth_tier_rate_is_plausible() {
    // P(exactly 3 of 6) = C(6,3) * C(39,3) / C(45,6) ~= 2.24%.
    let config = LottoConfig::default();
    let result = run_simulation(&ticket([5, 10, 15, 20, 25, 30]), 100_000, &config, sim_rng(2024));
    let fifth = result.wins_for(WinTier::Fifth).count;
    assert!(
        (1_900..=2_600).contains(&fifth),
        "fifth-tier count {fifth} far from the expected ~2,240 per 100,000"
    );
    let fourth = result.wins_for(WinTier::Fourth).count;
    assert!(fourth < 400, "fourth-tier count {fourth} implausibly high");
}

#[test]
fn roi_is_relative_to_spend() {
    let config = LottoConfig::default();
    let result = run_simulation(&ticket([40, 41, 42, 43, 44, 45]), 4, &config, FnSource(|| 0.0));
    let roi = result.roi_percent().expect("spent is non-zero");
    let expected = (result.total_won - result.total_spent) as f64 / result.total_spent as f64 * 100.0;
    assert!((roi - expected).abs() < 1e-9);
    assert_eq!(result.net_profit(), 8_000_000_000 - 4_000);
}

#[test]
fn result_serializes_in_camel_case() {
    let config = LottoConfig::default();
    let result = run_simulation(&ticket([40, 41, 42, 43, 44, 45]), 1, &config, FnSource(|| 0.0));
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["totalSpent"], 1_000);
    assert_eq!(json["drawCount"], 1);
    assert_eq!(json["bestTier"], 1);
    assert_eq!(json["wins"][0]["totalPrize"], 2_000_000_000i64);
}
