//! Pipeline health checks over the persisted draw file.

use crate::{
    draw::LottoDataFile,
    validation::sampled_integrity,
};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Older than this many days is a warning.
pub const FRESHNESS_WARN_DAYS: i64 = 7;
/// Older than this many days is a failure.
pub const FRESHNESS_FAIL_DAYS: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    Pass,
    Warn,
    Fail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Overall {
    Healthy,
    Unhealthy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
}

impl CheckResult {
    fn new(name: &str, status: CheckStatus, message: String) -> Self {
        Self { name: name.into(), status, message }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    pub timestamp: String,
    pub overall: Overall,
    pub checks: Vec<CheckResult>,
}

impl HealthReport {
    pub fn from_checks(checks: Vec<CheckResult>, now: DateTime<Utc>) -> Self {
        let failed = checks.iter().any(|c| c.status == CheckStatus::Fail);
        Self {
            timestamp: now.to_rfc3339(),
            overall: if failed { Overall::Unhealthy } else { Overall::Healthy },
            checks,
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.overall == Overall::Healthy
    }
}

pub fn check_freshness(data: &LottoDataFile, now: DateTime<Utc>) -> CheckResult {
    const NAME: &str = "Data Freshness";
    let Some(updated) = data.last_updated_at() else {
        return CheckResult::new(
            NAME,
            CheckStatus::Fail,
            format!("Cannot parse lastUpdated \"{}\".", data.last_updated),
        );
    };

    let age = now - updated;
    let days = age.num_days();
    if age > Duration::days(FRESHNESS_FAIL_DAYS) {
        CheckResult::new(
            NAME,
            CheckStatus::Fail,
            format!(
                "Data is {days} days old (last updated: {}). Max allowed: {FRESHNESS_FAIL_DAYS} days.",
                data.last_updated
            ),
        )
    } else if age > Duration::days(FRESHNESS_WARN_DAYS) {
        CheckResult::new(
            NAME,
            CheckStatus::Warn,
            format!("Data is {days} days old (last updated: {}).", data.last_updated),
        )
    } else {
        CheckResult::new(
            NAME,
            CheckStatus::Pass,
            format!(
                "Data updated {days} days ago. Latest round: {}. Total draws: {}.",
                data.latest_round,
                data.draws.len()
            ),
        )
    }
}

pub fn check_integrity(data: &LottoDataFile) -> CheckResult {
    const NAME: &str = "Data Integrity";
    if data.draws.is_empty() {
        return CheckResult::new(NAME, CheckStatus::Fail, "No draws found in data file.".into());
    }

    let report = sampled_integrity(&data.draws);
    if report.is_valid() {
        CheckResult::new(
            NAME,
            CheckStatus::Pass,
            format!(
                "All sampled draws valid. {} total draws, rounds 1-{}.",
                data.draws.len(),
                data.latest_round
            ),
        )
    } else {
        let first: Vec<String> = report.issues.iter().take(3).map(|i| i.to_string()).collect();
        CheckResult::new(
            NAME,
            CheckStatus::Fail,
            format!("Found {} integrity issues: {}", report.issues.len(), first.join("; ")),
        )
    }
}

/// Run every data check. A file that cannot be read fails both.
pub fn run_health_check(data_path: &str, now: DateTime<Utc>) -> HealthReport {
    let checks = match LottoDataFile::read(data_path) {
        Ok(data) => vec![check_freshness(&data, now), check_integrity(&data)],
        Err(e) => {
            log::error!("cannot read {data_path}: {e}");
            vec![
                CheckResult::new("Data Freshness", CheckStatus::Fail, format!("Cannot read data file: {e}")),
                CheckResult::new("Data Integrity", CheckStatus::Fail, format!("Cannot validate data: {e}")),
            ]
        }
    };
    HealthReport::from_checks(checks, now)
}
