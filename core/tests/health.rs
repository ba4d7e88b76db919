//! Health checks over the draw file.

use chrono::{Duration, TimeZone, Utc};
use lotto_core::{
    draw::{Draw, LottoDataFile},
    health::{check_freshness, check_integrity, run_health_check, CheckStatus, Overall, HealthReport},
};

fn data_updated(days_ago: i64) -> LottoDataFile {
    data_aged(Duration::days(days_ago))
}

fn data_aged(age: Duration) -> LottoDataFile {
    let draws = vec![
        Draw::new(2, "2002-12-14", [9, 13, 21, 25, 32, 42], 2),
        Draw::new(1, "2002-12-07", [10, 23, 29, 33, 37, 40], 16),
    ];
    LottoDataFile::new(draws, now() - age)
}

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 16, 0, 0, 0).unwrap()
}

#[test]
fn freshness_thresholds() {
    assert_eq!(check_freshness(&data_updated(1), now()).status, CheckStatus::Pass);
    assert_eq!(check_freshness(&data_updated(7), now()).status, CheckStatus::Pass);
    assert_eq!(check_freshness(&data_updated(8), now()).status, CheckStatus::Warn);
    assert_eq!(check_freshness(&data_updated(10), now()).status, CheckStatus::Warn);
    assert_eq!(check_freshness(&data_updated(11), now()).status, CheckStatus::Fail);
}

#[test]
fn freshness_compares_partial_days() {
    let stale = data_aged(Duration::days(10) + Duration::hours(12));
    let check = check_freshness(&stale, now());
    assert_eq!(check.status, CheckStatus::Fail);
    assert!(check.message.contains("10 days old"), "{}", check.message);

    let aging = data_aged(Duration::days(7) + Duration::hours(20));
    assert_eq!(check_freshness(&aging, now()).status, CheckStatus::Warn);

    let exact = data_aged(Duration::days(7) + Duration::seconds(1));
    assert_eq!(check_freshness(&exact, now()).status, CheckStatus::Warn);
}

#[test]
fn unparseable_timestamp_fails_freshness() {
    let mut data = data_updated(0);
    data.last_updated = "last tuesday".into();
    assert_eq!(check_freshness(&data, now()).status, CheckStatus::Fail);
}

#[test]
fn integrity_pass_and_fail() {
    let data = data_updated(0);
    let check = check_integrity(&data);
    assert_eq!(check.status, CheckStatus::Pass);
    assert!(check.message.contains("rounds 1-2"), "{}", check.message);

    let mut bad = data.clone();
    bad.draws[0].n3 = 77;
    let check = check_integrity(&bad);
    assert_eq!(check.status, CheckStatus::Fail);
    assert!(check.message.contains("number 77 out of range"), "{}", check.message);

    let mut empty = data;
    empty.draws.clear();
    assert_eq!(check_integrity(&empty).status, CheckStatus::Fail);
}

#[test]
fn warnings_do_not_make_the_report_unhealthy() {
    let data = data_updated(9);
    let report = HealthReport::from_checks(vec![check_freshness(&data, now()), check_integrity(&data)], now());
    assert_eq!(report.overall, Overall::Healthy);

    let stale = data_updated(30);
    let report = HealthReport::from_checks(vec![check_freshness(&stale, now()), check_integrity(&stale)], now());
    assert_eq!(report.overall, Overall::Unhealthy);
    assert!(!report.is_healthy());

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["overall"], "unhealthy");
    assert_eq!(json["checks"][0]["status"], "fail");
}

#[test]
fn missing_file_is_unhealthy() {
    let _ = env_logger::builder().is_test(true).try_init();
    let report = run_health_check("/nonexistent/lotto.json", now());
    assert_eq!(report.overall, Overall::Unhealthy);
    assert_eq!(report.checks.len(), 2);
    assert!(report.checks.iter().all(|c| c.status == CheckStatus::Fail));
}
