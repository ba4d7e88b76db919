//! Integrity checks for historical draw data.
//!
//! RULE: validation never panics on a malformed record. Every issue
//! found is reported; callers decide whether to reject the dataset.

use crate::{
    draw::{parse_canonical_date, Draw},
    error::{CoreError, CoreResult},
    types::{Round, MAX_NUMBER, MIN_NUMBER},
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// How many draws from each end the sampled check looks at.
pub const SAMPLE_EDGE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IntegrityIssue {
    NumberOutOfRange { round: Round, number: i32 },
    BonusOutOfRange { round: Round, bonus: i32 },
    DuplicateNumbers { round: Round, numbers: Vec<i32> },
    BonusDuplicatesMain { round: Round, bonus: i32 },
    InvalidDate { round: Round, date: String },
    MissingRounds { after: Round, before: Round },
    DuplicateRound { round: Round },
    EmptyDataset,
}

impl std::fmt::Display for IntegrityIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NumberOutOfRange { round, number } => {
                write!(f, "Round {round}: number {number} out of range {MIN_NUMBER}-{MAX_NUMBER}")
            }
            Self::BonusOutOfRange { round, bonus } => {
                write!(f, "Round {round}: bonus {bonus} out of range {MIN_NUMBER}-{MAX_NUMBER}")
            }
            Self::DuplicateNumbers { round, numbers } => {
                write!(f, "Round {round}: duplicate numbers found in {numbers:?}")
            }
            Self::BonusDuplicatesMain { round, bonus } => {
                write!(f, "Round {round}: bonus {bonus} repeats a main number")
            }
            Self::InvalidDate { round, date } => {
                write!(f, "Round {round}: invalid date format \"{date}\"")
            }
            Self::MissingRounds { after, before } => {
                write!(f, "Missing round(s) between {after} and {before}")
            }
            Self::DuplicateRound { round } => write!(f, "Round {round} appears more than once"),
            Self::EmptyDataset => write!(f, "No draws found"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub checked: usize,
    pub issues: Vec<IntegrityIssue>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn into_result(self) -> CoreResult<()> {
        match self.issues.first() {
            None => Ok(()),
            Some(first) => Err(CoreError::IntegrityFailed {
                count: self.issues.len(),
                first: first.to_string(),
            }),
        }
    }
}

fn number_in_range(n: i32) -> bool {
    (MIN_NUMBER as i32..=MAX_NUMBER as i32).contains(&n)
}

/// Per-record checks: ranges, duplicates, bonus overlap, date shape.
pub fn validate_draw(draw: &Draw) -> Vec<IntegrityIssue> {
    let mut issues = Vec::new();
    let numbers = draw.numbers();

    for &n in &numbers {
        if !number_in_range(n) {
            issues.push(IntegrityIssue::NumberOutOfRange { round: draw.round, number: n });
        }
    }
    if !number_in_range(draw.bonus) {
        issues.push(IntegrityIssue::BonusOutOfRange { round: draw.round, bonus: draw.bonus });
    }

    let distinct: HashSet<i32> = numbers.iter().copied().collect();
    if distinct.len() != numbers.len() {
        issues.push(IntegrityIssue::DuplicateNumbers {
            round: draw.round,
            numbers: numbers.to_vec(),
        });
    }
    if distinct.contains(&draw.bonus) {
        issues.push(IntegrityIssue::BonusDuplicatesMain { round: draw.round, bonus: draw.bonus });
    }

    if parse_canonical_date(&draw.date).is_none() {
        issues.push(IntegrityIssue::InvalidDate { round: draw.round, date: draw.date.clone() });
    }

    issues
}

/// Full validation: every record plus round continuity.
pub fn validate_draws(draws: &[Draw]) -> ValidationReport {
    if draws.is_empty() {
        return ValidationReport {
            checked: 0,
            issues: vec![IntegrityIssue::EmptyDataset],
        };
    }

    let mut issues: Vec<IntegrityIssue> = draws.iter().flat_map(validate_draw).collect();

    let mut rounds: Vec<Round> = draws.iter().map(|d| d.round).collect();
    rounds.sort_unstable();
    for pair in rounds.windows(2) {
        if pair[1] == pair[0] {
            issues.push(IntegrityIssue::DuplicateRound { round: pair[0] });
        } else if pair[1] != pair[0] + 1 {
            issues.push(IntegrityIssue::MissingRounds { after: pair[0], before: pair[1] });
        }
    }

    if !issues.is_empty() {
        log::warn!("validation found {} issue(s) in {} draws", issues.len(), draws.len());
    }

    ValidationReport { checked: draws.len(), issues }
}

/// Record checks on the first and last `SAMPLE_EDGE` draws only.
/// Round continuity is not checked here.
pub fn sampled_integrity(draws: &[Draw]) -> ValidationReport {
    if draws.is_empty() {
        return validate_draws(draws);
    }
    let head = &draws[..draws.len().min(SAMPLE_EDGE)];
    let tail = &draws[draws.len().saturating_sub(SAMPLE_EDGE)..];
    let issues = head.iter().chain(tail).flat_map(validate_draw).collect();
    ValidationReport {
        checked: head.len() + tail.len(),
        issues,
    }
}
