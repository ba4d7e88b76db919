//! Historical draw records and the flat JSON file that holds them.
//!
//! Field names follow the upstream results feed so the file can be
//! read as-is. Number fields are kept wide so malformed records still
//! load and can be reported by validation instead of failing parse.

use crate::{
    error::CoreResult,
    types::{Round, Won, NUMBERS_PER_SET},
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Draw {
    #[serde(rename = "drwNo")]
    pub round: Round,
    #[serde(rename = "drwNoDate")]
    pub date: String,
    #[serde(rename = "drwtNo1")]
    pub n1: i32,
    #[serde(rename = "drwtNo2")]
    pub n2: i32,
    #[serde(rename = "drwtNo3")]
    pub n3: i32,
    #[serde(rename = "drwtNo4")]
    pub n4: i32,
    #[serde(rename = "drwtNo5")]
    pub n5: i32,
    #[serde(rename = "drwtNo6")]
    pub n6: i32,
    #[serde(rename = "bnusNo")]
    pub bonus: i32,
    #[serde(rename = "firstWinamnt", default)]
    pub first_prize: Won,
    #[serde(rename = "firstPrzwnerCo", default)]
    pub first_winners: u32,
    #[serde(rename = "totSellamnt", default)]
    pub total_sales: Won,
    #[serde(rename = "returnValue", default = "default_return_value")]
    pub return_value: String,
}

fn default_return_value() -> String {
    "success".into()
}

impl Draw {
    pub fn new(round: Round, date: &str, numbers: [i32; NUMBERS_PER_SET], bonus: i32) -> Self {
        Self {
            round,
            date: date.to_string(),
            n1: numbers[0],
            n2: numbers[1],
            n3: numbers[2],
            n4: numbers[3],
            n5: numbers[4],
            n6: numbers[5],
            bonus,
            first_prize: 0,
            first_winners: 0,
            total_sales: 0,
            return_value: default_return_value(),
        }
    }

    pub fn with_first_prize(mut self, amount: Won, winners: u32) -> Self {
        self.first_prize = amount;
        self.first_winners = winners;
        self
    }

    pub fn numbers(&self) -> [i32; NUMBERS_PER_SET] {
        [self.n1, self.n2, self.n3, self.n4, self.n5, self.n6]
    }

    /// The draw date, if the stored string is a canonical YYYY-MM-DD date.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_canonical_date(&self.date)
    }
}

/// Parse strictly: zero-padded, exactly YYYY-MM-DD, a real calendar day.
pub fn parse_canonical_date(s: &str) -> Option<NaiveDate> {
    let date = NaiveDate::parse_from_str(s, DATE_FORMAT).ok()?;
    (date.format(DATE_FORMAT).to_string() == s).then_some(date)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LottoDataFile {
    pub lottery: String,
    /// RFC 3339 timestamp of the last successful update.
    pub last_updated: String,
    pub latest_round: Round,
    /// Most recent first.
    pub draws: Vec<Draw>,
}

impl LottoDataFile {
    pub fn new(draws: Vec<Draw>, updated_at: DateTime<Utc>) -> Self {
        let mut file = Self {
            lottery: "lotto645".into(),
            last_updated: updated_at.to_rfc3339(),
            latest_round: 0,
            draws: Vec::new(),
        };
        file.merge(draws);
        file
    }

    pub fn read(path: &str) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let file: LottoDataFile = serde_json::from_str(&content)?;
        log::debug!("read {} draws from {path}", file.draws.len());
        Ok(file)
    }

    pub fn write(&self, path: &str) -> CoreResult<()> {
        if let Some(dir) = std::path::Path::new(path).parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir)?;
            }
        }
        std::fs::write(path, serde_json::to_string(self)?)?;
        log::info!("wrote {} draws to {path}", self.draws.len());
        Ok(())
    }

    pub fn last_updated_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.last_updated)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Append draws for rounds not already present. Existing records are
    /// never replaced. Returns how many draws were added.
    pub fn merge(&mut self, new_draws: Vec<Draw>) -> usize {
        let mut known: HashSet<Round> = self.draws.iter().map(|d| d.round).collect();
        let before = self.draws.len();
        for draw in new_draws {
            if known.insert(draw.round) {
                self.draws.push(draw);
            } else {
                log::debug!("round {} already present, keeping stored record", draw.round);
            }
        }
        self.draws.sort_by(|a, b| b.round.cmp(&a.round));
        self.latest_round = self.draws.first().map_or(0, |d| d.round);
        self.draws.len() - before
    }

    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.last_updated = now.to_rfc3339();
    }
}
