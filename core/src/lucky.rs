//! Today's lucky numbers: one set per KST calendar day, the same for
//! every caller on that day.

use crate::{
    rng::{RngBank, StreamSlot},
    schedule::kst_now,
    ticket::Ticket,
};
use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};

/// yyyymmdd as an integer, e.g. 20261016.
pub fn date_seed(date: NaiveDate) -> u64 {
    date.year() as u64 * 10_000 + date.month() as u64 * 100 + date.day() as u64
}

/// A quick pick drawn from the day's own stream.
pub fn lucky_numbers(date: NaiveDate) -> Ticket {
    let mut rng = RngBank::new(date_seed(date)).for_slot(StreamSlot::Lucky);
    Ticket::quick_pick(&mut rng)
}

pub fn lucky_numbers_now(now: DateTime<Utc>) -> (NaiveDate, Ticket) {
    let today = kst_now(now).date_naive();
    (today, lucky_numbers(today))
}

/// Seconds until the next KST midnight, when the lucky set changes.
pub fn secs_until_kst_midnight(now: DateTime<Utc>) -> u32 {
    86_400 - kst_now(now).num_seconds_from_midnight()
}
