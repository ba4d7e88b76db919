//! Game configuration: ticket price, prize table and tax schedule.
//!
//! Tier 1-3 payouts are flat estimates, not derived from real prize
//! pools. Tier 4-5 are the statutory fixed prizes.

use crate::{tier::WinTier, types::Won};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LottoConfig {
    pub ticket_price: Won,
    pub prizes: PrizeTable,
    pub tax: TaxSchedule,
}

impl Default for LottoConfig {
    fn default() -> Self {
        Self {
            ticket_price: 1_000,
            prizes: PrizeTable::default(),
            tax: TaxSchedule::default(),
        }
    }
}

impl LottoConfig {
    /// Load overrides from a JSON file. Fields absent from the file
    /// keep their default values.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: LottoConfig = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Cannot parse {path}: {e}"))?;
        log::debug!("Loaded config from {path}: ticket_price={}", config.ticket_price);
        Ok(config)
    }
}

/// Payout per winning ticket, by tier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PrizeTable {
    pub first: Won,
    pub second: Won,
    pub third: Won,
    pub fourth: Won,
    pub fifth: Won,
}

impl Default for PrizeTable {
    fn default() -> Self {
        Self {
            first:  2_000_000_000,
            second: 50_000_000,
            third:  1_500_000,
            fourth: 50_000,
            fifth:  5_000,
        }
    }
}

impl PrizeTable {
    pub fn payout(&self, tier: WinTier) -> Won {
        match tier {
            WinTier::First  => self.first,
            WinTier::Second => self.second,
            WinTier::Third  => self.third,
            WinTier::Fourth => self.fourth,
            WinTier::Fifth  => self.fifth,
        }
    }
}

/// Two-bracket withholding schedule. Rates are in basis points.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TaxSchedule {
    pub ticket_cost: Won,
    pub tax_free_threshold: Won,
    pub lower_bracket_limit: Won,
    pub lower_income_bps: u32,
    pub lower_local_bps: u32,
    pub upper_income_bps: u32,
    pub upper_local_bps: u32,
}

impl Default for TaxSchedule {
    fn default() -> Self {
        Self {
            ticket_cost:         1_000,
            tax_free_threshold:  2_000_000,
            lower_bracket_limit: 300_000_000,
            lower_income_bps:    2_000,
            lower_local_bps:     200,
            upper_income_bps:    3_000,
            upper_local_bps:     300,
        }
    }
}
