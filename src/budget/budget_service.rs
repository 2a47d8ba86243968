use rust_decimal::Decimal;

use super::budget_model::BudgetSnapshot;
use crate::constants::{EXECUTION_STAGES, STAGE_SUBMITTED};
use crate::tenders::TenderRecord;

/// Buckets the full (unfiltered) record set against the configured total.
///
/// Submitted bids reserve their amount; tenders anywhere in the execution
/// pipeline count as spent. Non-numeric amount strings contribute zero.
pub fn compute_budget(records: &[TenderRecord], total_budget: Decimal) -> BudgetSnapshot {
    let reserved: Decimal = records
        .iter()
        .filter(|r| r.stage == STAGE_SUBMITTED)
        .map(|r| r.total_amount_decimal())
        .sum();

    let spent: Decimal = records
        .iter()
        .filter(|r| EXECUTION_STAGES.contains(&r.stage.as_str()))
        .map(|r| r.total_amount_decimal())
        .sum();

    BudgetSnapshot {
        available: total_budget - reserved - spent,
        reserved,
        spent,
    }
}
