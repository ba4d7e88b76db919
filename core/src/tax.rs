//! Withholding tax on a prize.
//!
//! The post-expense amount (prize minus one ticket) is either fully
//! exempt, when at or under the threshold, or fully taxable. The
//! threshold is a cliff, not a deduction. Taxable amounts are split
//! into a lower and an upper bracket; income and local tax are each
//! floored per bracket.

use crate::{config::TaxSchedule, types::Won};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxResult {
    pub prize_amount: Won,
    pub ticket_cost: Won,
    pub taxable_amount: Won,
    pub income_tax: Won,
    pub local_tax: Won,
    pub total_tax: Won,
    pub net_amount: Won,
    /// Total tax over the full prize amount (not the taxable base), in percent.
    pub effective_rate: f64,
}

impl TaxResult {
    pub fn zero() -> Self {
        Self {
            prize_amount: 0,
            ticket_cost: 0,
            taxable_amount: 0,
            income_tax: 0,
            local_tax: 0,
            total_tax: 0,
            net_amount: 0,
            effective_rate: 0.0,
        }
    }
}

/// floor(amount * bps / 10_000) for non-negative amounts.
fn apply_rate(amount: Won, bps: u32) -> Won {
    ((amount as i128 * bps as i128) / 10_000) as Won
}

pub fn calculate_tax(prize_amount: Won, schedule: &TaxSchedule) -> TaxResult {
    if prize_amount <= 0 {
        return TaxResult::zero();
    }

    let ticket_cost = schedule.ticket_cost;
    let after_expense = prize_amount - ticket_cost;

    if after_expense <= schedule.tax_free_threshold {
        return TaxResult {
            prize_amount,
            ticket_cost,
            net_amount: prize_amount,
            ..TaxResult::zero()
        };
    }

    let taxable_amount = after_expense;
    let limit = schedule.lower_bracket_limit;

    let (income_tax, local_tax) = if taxable_amount <= limit {
        (
            apply_rate(taxable_amount, schedule.lower_income_bps),
            apply_rate(taxable_amount, schedule.lower_local_bps),
        )
    } else {
        let excess = taxable_amount - limit;
        (
            apply_rate(limit, schedule.lower_income_bps)
                + apply_rate(excess, schedule.upper_income_bps),
            apply_rate(limit, schedule.lower_local_bps)
                + apply_rate(excess, schedule.upper_local_bps),
        )
    };

    let total_tax = income_tax + local_tax;
    let net_amount = prize_amount - total_tax;
    let effective_rate = total_tax as f64 / prize_amount as f64 * 100.0;

    log::debug!("tax: prize={prize_amount} taxable={taxable_amount} total={total_tax}");

    TaxResult {
        prize_amount,
        ticket_cost,
        taxable_amount,
        income_tax,
        local_tax,
        total_tax,
        net_amount,
        effective_rate,
    }
}
