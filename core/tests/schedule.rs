//! KST draw calendar, countdown phases and daily lucky numbers.

use chrono::{NaiveDate, TimeZone, Utc};
use lotto_core::{
    lucky::{date_seed, lucky_numbers, lucky_numbers_now, secs_until_kst_midnight},
    schedule::{countdown, draw_date_for_round, draw_time, latest_round_on, results_time, CountdownPhase},
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn rounds_map_to_saturdays() {
    assert_eq!(draw_date_for_round(1), Some(date(2002, 12, 7)));
    assert_eq!(draw_date_for_round(2), Some(date(2002, 12, 14)));
    assert_eq!(draw_date_for_round(1205), Some(date(2026, 1, 3)));
}

#[test]
fn rounds_past_the_calendar_have_no_date() {
    assert_eq!(draw_date_for_round(u32::MAX), None);
    assert_eq!(draw_time(u32::MAX), None);
    assert_eq!(results_time(u32::MAX), None);

    let c = countdown(u32::MAX, false, Utc.with_ymd_and_hms(2026, 1, 3, 3, 0, 0).unwrap());
    assert_eq!(c.phase, CountdownPhase::Hidden);
    assert_eq!(c.remaining_secs, 0);
}

#[test]
fn latest_round_on_a_date() {
    assert_eq!(latest_round_on(date(2002, 12, 6)), None);
    assert_eq!(latest_round_on(date(2002, 12, 7)), Some(1));
    assert_eq!(latest_round_on(date(2002, 12, 13)), Some(1));
    assert_eq!(latest_round_on(date(2026, 1, 3)), Some(1205));
    assert_eq!(latest_round_on(date(2026, 1, 9)), Some(1205));
}

#[test]
fn draw_and_results_times_are_kst() {
    let draw = draw_time(1205).unwrap();
    assert_eq!(draw.with_timezone(&Utc), Utc.with_ymd_and_hms(2026, 1, 3, 11, 45, 0).unwrap());
    let results = results_time(1205).unwrap();
    assert_eq!(results.with_timezone(&Utc), Utc.with_ymd_and_hms(2026, 1, 3, 15, 15, 0).unwrap());
}

#[test]
fn countdown_phases() {
    // Saturday 12:00 KST: 8h45m to the draw.
    let c = countdown(1205, false, Utc.with_ymd_and_hms(2026, 1, 3, 3, 0, 0).unwrap());
    assert_eq!(c.phase, CountdownPhase::BeforeDraw);
    assert_eq!(c.remaining_secs, 8 * 3600 + 45 * 60);
    assert_eq!(c.split(), (0, 8, 45, 0));

    // Saturday 21:00 KST: 3h15m until results.
    let c = countdown(1205, false, Utc.with_ymd_and_hms(2026, 1, 3, 12, 0, 0).unwrap());
    assert_eq!(c.phase, CountdownPhase::AfterDraw);
    assert_eq!(c.remaining_secs, 3 * 3600 + 15 * 60);

    // Friday: nothing to show yet.
    let c = countdown(1205, false, Utc.with_ymd_and_hms(2026, 1, 2, 3, 0, 0).unwrap());
    assert_eq!(c.phase, CountdownPhase::Hidden);

    // Sunday 01:00 KST.
    let c = countdown(1205, false, Utc.with_ymd_and_hms(2026, 1, 3, 16, 0, 0).unwrap());
    assert_eq!(c.phase, CountdownPhase::ResultsAvailable);

    // Already have the result.
    let c = countdown(1205, true, Utc.with_ymd_and_hms(2026, 1, 3, 3, 0, 0).unwrap());
    assert_eq!(c.phase, CountdownPhase::ResultsAvailable);
    assert_eq!(c.remaining_secs, 0);
}

#[test]
fn lucky_numbers_are_stable_per_day() {
    assert_eq!(date_seed(date(2026, 10, 16)), 20_261_016);

    let a = lucky_numbers(date(2026, 10, 16));
    let b = lucky_numbers(date(2026, 10, 16));
    assert_eq!(a, b);
    assert!(a.numbers().windows(2).all(|w| w[0] < w[1]));

    let week: Vec<_> = (10..17).map(|d| lucky_numbers(date(2026, 10, d))).collect();
    assert!(week.windows(2).any(|w| w[0] != w[1]), "lucky numbers never change");
}

#[test]
fn lucky_day_follows_kst_not_utc() {
    // 2026-10-15 16:00 UTC is already 2026-10-16 in Seoul.
    let (day, ticket) = lucky_numbers_now(Utc.with_ymd_and_hms(2026, 10, 15, 16, 0, 0).unwrap());
    assert_eq!(day, date(2026, 10, 16));
    assert_eq!(ticket, lucky_numbers(date(2026, 10, 16)));
}

#[test]
fn seconds_until_kst_midnight() {
    assert_eq!(secs_until_kst_midnight(Utc.with_ymd_and_hms(2026, 10, 16, 14, 59, 59).unwrap()), 1);
    assert_eq!(secs_until_kst_midnight(Utc.with_ymd_and_hms(2026, 10, 16, 15, 0, 0).unwrap()), 86_400);
    assert_eq!(secs_until_kst_midnight(Utc.with_ymd_and_hms(2026, 10, 16, 3, 0, 0).unwrap()), 12 * 3600);
}
