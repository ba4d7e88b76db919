//! lotto-runner: headless front end for lotto-core.
//!
//! Usage:
//!   lotto-runner simulate --numbers 1,7,13,22,34,45 --draws 10000 --seed 42
//!   lotto-runner simulate --quick-pick --draws 100000
//!   lotto-runner tax --amount 2000000000
//!   lotto-runner stats --data ./data/lotto.json --recent 20
//!   lotto-runner recommend --data ./data/lotto.json --method hot
//!   lotto-runner recommend --data ./data/lotto.json --method prediction
//!   lotto-runner lucky --date 2026-10-16
//!   lotto-runner validate --data ./data/lotto.json
//!   lotto-runner health --data ./data/lotto.json
//!
//! Add --json to any command for machine-readable output,
//! and --config <path> to override prizes or tax rates.

use anyhow::{bail, Result};
use chrono::{NaiveDate, Utc};
use lotto_core::{
    cache::DrawCache,
    config::LottoConfig,
    draw::{parse_canonical_date, LottoDataFile},
    health::{run_health_check, CheckStatus},
    lucky::{lucky_numbers, lucky_numbers_now, secs_until_kst_midnight},
    recommend::{prediction_sets, recommend, RecommendMethod, RecommendedSet},
    rng::{RngBank, SeededRng, StreamSlot},
    simulation::{run_simulation, SimulationResult},
    stats::{calculate_stats, DEFAULT_RECENT_DRAWS},
    tax::calculate_tax,
    ticket::Ticket,
    validation::validate_draws,
};
use std::env;

const DEFAULT_DATA: &str = "./data/lotto.json";

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let Some(command) = args.get(1).map(String::as_str) else {
        print_usage();
        bail!("missing command");
    };
    let json = args.iter().any(|a| a == "--json");
    let config = match arg_value(&args, "--config") {
        Some(path) => LottoConfig::load(path)?,
        None => LottoConfig::default(),
    };

    match command {
        "simulate" => cmd_simulate(&args, &config, json),
        "tax" => cmd_tax(&args, &config, json),
        "stats" => cmd_stats(&args, json),
        "recommend" => cmd_recommend(&args, json),
        "lucky" => cmd_lucky(&args, json),
        "validate" => cmd_validate(&args, json),
        "health" => cmd_health(&args, json),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            print_usage();
            bail!("unknown command '{other}'")
        }
    }
}

fn cmd_simulate(args: &[String], config: &LottoConfig, json: bool) -> Result<()> {
    let draws = parse_arg(args, "--draws", 1_000i64)?;
    let draws = if draws < 0 {
        log::warn!("negative draw count {draws}, running zero draws");
        0
    } else {
        draws as u64
    };

    let bank = match arg_value(args, "--seed") {
        Some(s) => RngBank::new(s.parse()?),
        None => RngBank::new(SeededRng::from_entropy().next_u64()),
    };

    let ticket = if args.iter().any(|a| a == "--quick-pick") {
        Ticket::quick_pick(&mut bank.for_slot(StreamSlot::QuickPick))
    } else {
        let Some(raw) = arg_value(args, "--numbers") else {
            bail!("simulate needs --numbers a,b,c,d,e,f or --quick-pick");
        };
        let values = raw
            .split(',')
            .map(|s| s.trim().parse::<i64>())
            .collect::<Result<Vec<_>, _>>()?;
        Ticket::from_i64s(&values)?
    };

    let result = run_simulation(&ticket, draws, config, bank.for_slot(StreamSlot::Simulator));

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_simulation(&ticket, bank.master_seed(), &result);
    }
    Ok(())
}

fn cmd_tax(args: &[String], config: &LottoConfig, json: bool) -> Result<()> {
    let Some(amount) = arg_value(args, "--amount") else {
        bail!("tax needs --amount <won>");
    };
    let amount: i64 = amount.replace(',', "").parse()?;
    let result = calculate_tax(amount, &config.tax);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("=== PRIZE TAX ===");
        println!("  prize:          {}", result.prize_amount);
        println!("  ticket cost:    {}", result.ticket_cost);
        println!("  taxable:        {}", result.taxable_amount);
        println!("  income tax:     {}", result.income_tax);
        println!("  local tax:      {}", result.local_tax);
        println!("  total tax:      {}", result.total_tax);
        println!("  net amount:     {}", result.net_amount);
        println!("  effective rate: {:.2}%", result.effective_rate);
    }
    Ok(())
}

fn cmd_stats(args: &[String], json: bool) -> Result<()> {
    let cache = DrawCache::load(data_path(args))?;
    let recent = parse_arg(args, "--recent", DEFAULT_RECENT_DRAWS)?;
    let stats = calculate_stats(cache.all(), recent);

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    let latest = cache.latest();
    println!("=== STATISTICS ===");
    println!("  total draws:    {}", stats.total_draws);
    println!("  latest round:   {} ({})", latest.round, latest.date);
    println!("  most common:    {:?}", stats.most_common);
    println!("  least common:   {:?}", stats.least_common);
    println!("  hot (last {recent}):  {:?}", stats.hottest_numbers);
    println!("  cold (last {recent}): {:?}", stats.coldest_numbers);
    println!(
        "  odd/even:       {}/{}",
        stats.odd_even_ratio.odd, stats.odd_even_ratio.even
    );
    println!(
        "  high/low:       {}/{}",
        stats.high_low_ratio.high, stats.high_low_ratio.low
    );
    Ok(())
}

fn cmd_recommend(args: &[String], json: bool) -> Result<()> {
    let method = arg_value(args, "--method").unwrap_or("random");
    let mut rng = match arg_value(args, "--seed") {
        Some(s) => RngBank::new(s.parse()?).for_slot(StreamSlot::Recommend),
        None => SeededRng::from_entropy(),
    };

    // Random picks need no history.
    let sets: Vec<RecommendedSet> = if method == "random" {
        vec![RecommendedSet {
            label: "random".into(),
            numbers: recommend(RecommendMethod::Random, &[], &mut rng)?,
        }]
    } else {
        let cache = DrawCache::load(data_path(args))?;
        if method == "prediction" {
            prediction_sets(cache.all(), &mut rng)?
        } else {
            let parsed: RecommendMethod = method.parse()?;
            vec![RecommendedSet {
                label: method.to_string(),
                numbers: recommend(parsed, cache.all(), &mut rng)?,
            }]
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&sets)?);
    } else {
        for set in &sets {
            println!("  {:<24} {}", set.label, set.numbers);
        }
    }
    Ok(())
}

fn cmd_lucky(args: &[String], json: bool) -> Result<()> {
    let now = Utc::now();
    let (date, ticket) = match arg_value(args, "--date") {
        Some(raw) => {
            let Some(date) = parse_canonical_date(raw) else {
                bail!("--date must be YYYY-MM-DD, got '{raw}'");
            };
            (date, lucky_numbers(date))
        }
        None => lucky_numbers_now(now),
    };

    if json {
        let out = serde_json::json!({ "date": date.to_string(), "numbers": ticket });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("Lucky numbers for {date}: {ticket}");
        if date == today_kst(now) {
            let secs = secs_until_kst_midnight(now);
            println!(
                "  next set in {:02}:{:02}:{:02}",
                secs / 3600,
                (secs % 3600) / 60,
                secs % 60
            );
        }
    }
    Ok(())
}

fn cmd_validate(args: &[String], json: bool) -> Result<()> {
    let path = data_path(args);
    let data = LottoDataFile::read(path)?;
    let report = validate_draws(&data.draws);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if report.is_valid() {
        println!("Data validation passed: {} draws in {path}", report.checked);
    } else {
        println!("Data validation failed:");
        for issue in &report.issues {
            println!("   - {issue}");
        }
    }

    if !report.is_valid() {
        std::process::exit(1);
    }
    Ok(())
}

fn cmd_health(args: &[String], json: bool) -> Result<()> {
    let report = run_health_check(data_path(args), Utc::now());

    if !json {
        for check in &report.checks {
            let tag = match check.status {
                CheckStatus::Pass => "PASS",
                CheckStatus::Warn => "WARN",
                CheckStatus::Fail => "FAIL",
            };
            println!("[{tag}] {}: {}", check.name, check.message);
        }
        println!();
        println!("Overall: {:?}", report.overall);
        println!();
    }
    println!("{}", serde_json::to_string_pretty(&report)?);

    if !report.is_healthy() {
        std::process::exit(1);
    }
    Ok(())
}

fn print_simulation(ticket: &Ticket, seed: u64, result: &SimulationResult) {
    println!("=== SIMULATION ===");
    println!("  ticket:     {ticket}");
    println!("  seed:       {seed}");
    println!("  draws:      {}", result.draw_count);
    println!("  spent:      {}", result.total_spent);
    println!("  won:        {}", result.total_won);
    println!("  net:        {}", result.net_profit());
    match result.roi_percent() {
        Some(roi) => println!("  roi:        {roi:.1}%"),
        None => println!("  roi:        n/a"),
    }
    match result.best_tier {
        Some(tier) => println!("  best:       {tier}"),
        None => println!("  best:       no win"),
    }
    println!();
    for w in &result.wins {
        println!("  {:<8} {:>8} wins  {:>16}", w.tier.to_string(), w.count, w.total_prize);
    }
}

fn today_kst(now: chrono::DateTime<Utc>) -> NaiveDate {
    lotto_core::schedule::kst_now(now).date_naive()
}

fn data_path(args: &[String]) -> &str {
    arg_value(args, "--data").unwrap_or(DEFAULT_DATA)
}

fn arg_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

/// `default` when the flag is absent; an error when its value does not parse.
fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> Result<T> {
    match arg_value(args, flag) {
        None => Ok(default),
        Some(raw) => match raw.parse() {
            Ok(value) => Ok(value),
            Err(_) => bail!("invalid value '{raw}' for {flag}"),
        },
    }
}

fn print_usage() {
    println!("lotto-runner <simulate|tax|stats|recommend|lucky|validate|health> [options] [--json]");
    println!("  simulate  --numbers a,b,c,d,e,f | --quick-pick  [--draws N] [--seed S]");
    println!("  tax       --amount WON");
    println!("  stats     [--data PATH] [--recent N]");
    println!("  recommend [--data PATH] [--method random|statistics|hot|cold|balanced|prediction] [--seed S]");
    println!("  lucky     [--date YYYY-MM-DD]");
    println!("  validate  [--data PATH]");
    println!("  health    [--data PATH]");
    println!("  --config PATH overrides ticket price, prizes and tax rates");
}
