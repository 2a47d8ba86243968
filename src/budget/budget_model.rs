use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Derived budget totals; never persisted apart from the records they
/// summarize. `available` may go negative, which is a display signal, not an error.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSnapshot {
    pub available: Decimal,
    pub reserved: Decimal,
    pub spent: Decimal,
}
