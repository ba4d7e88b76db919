//! Draw calendar in Korea Standard Time (UTC+9).
//!
//! Round 1 was drawn Saturday 2002-12-07; every round is seven days
//! after the previous one. Draws happen at 20:45 KST and results are
//! treated as available from 00:15 KST the next day.

use crate::types::Round;
use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, NaiveTime, TimeZone, Utc, Weekday};
use serde::{Deserialize, Serialize};

pub const KST_OFFSET_SECS: i32 = 9 * 3600;
pub const DRAW_HOUR: u32 = 20;
pub const DRAW_MINUTE: u32 = 45;
pub const RESULTS_DELAY_MINUTES: u32 = 15;

pub fn kst() -> FixedOffset {
    FixedOffset::east_opt(KST_OFFSET_SECS).expect("UTC+9 is a valid offset")
}

pub fn first_draw_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2002, 12, 7).expect("valid first draw date")
}

pub fn kst_now(utc: DateTime<Utc>) -> DateTime<FixedOffset> {
    utc.with_timezone(&kst())
}

/// Calendar date of `round`. Round 0 is treated as round 1. None when
/// the date falls past the end of the calendar.
pub fn draw_date_for_round(round: Round) -> Option<NaiveDate> {
    first_draw_date().checked_add_signed(Duration::weeks(round.saturating_sub(1) as i64))
}

/// The most recent round drawn on or before `date`, if any.
pub fn latest_round_on(date: NaiveDate) -> Option<Round> {
    let days = (date - first_draw_date()).num_days();
    (days >= 0).then(|| (days / 7) as Round + 1)
}

fn kst_at(date: NaiveDate, hour: u32, minute: u32) -> Option<DateTime<FixedOffset>> {
    let time = NaiveTime::from_hms_opt(hour, minute, 0)?;
    kst().from_local_datetime(&date.and_time(time)).single()
}

pub fn draw_time(round: Round) -> Option<DateTime<FixedOffset>> {
    kst_at(draw_date_for_round(round)?, DRAW_HOUR, DRAW_MINUTE)
}

pub fn results_time(round: Round) -> Option<DateTime<FixedOffset>> {
    let next_day = draw_date_for_round(round)?.succ_opt()?;
    kst_at(next_day, 0, RESULTS_DELAY_MINUTES)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CountdownPhase {
    /// Draw day, before the draw.
    BeforeDraw,
    /// Drawn, results not yet published.
    AfterDraw,
    ResultsAvailable,
    /// Not draw day yet; nothing to count down to.
    Hidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    pub phase: CountdownPhase,
    pub remaining_secs: i64,
}

impl Countdown {
    fn idle(phase: CountdownPhase) -> Self {
        Self { phase, remaining_secs: 0 }
    }

    /// (days, hours, minutes, seconds)
    pub fn split(&self) -> (i64, i64, i64, i64) {
        let s = self.remaining_secs.max(0);
        (s / 86_400, (s % 86_400) / 3_600, (s % 3_600) / 60, s % 60)
    }
}

/// Where `now` sits relative to `round`'s draw. A round whose date cannot
/// be represented has nothing to count down to.
pub fn countdown(round: Round, has_result: bool, now: DateTime<Utc>) -> Countdown {
    if has_result {
        return Countdown::idle(CountdownPhase::ResultsAvailable);
    }

    let (Some(draw_at), Some(results_at)) = (draw_time(round), results_time(round)) else {
        log::warn!("round {round} has no representable draw date");
        return Countdown::idle(CountdownPhase::Hidden);
    };
    let now = kst_now(now);

    if now < draw_at {
        if now.weekday() != Weekday::Sat {
            return Countdown::idle(CountdownPhase::Hidden);
        }
        Countdown {
            phase: CountdownPhase::BeforeDraw,
            remaining_secs: (draw_at - now).num_seconds().max(0),
        }
    } else if now < results_at {
        Countdown {
            phase: CountdownPhase::AfterDraw,
            remaining_secs: (results_at - now).num_seconds().max(0),
        }
    } else {
        Countdown::idle(CountdownPhase::ResultsAvailable)
    }
}
