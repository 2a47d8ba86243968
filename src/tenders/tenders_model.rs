use chrono::NaiveDate;
use log::warn;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::COLOR_PALETTE;
use crate::tenders::tenders_errors::{Result, TenderError};

/// A procurement tender tracked through its pipeline stages.
///
/// The core schema is fixed; any additional named fields arriving from the
/// remote side are preserved verbatim in `extra` and round-trip untouched.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TenderRecord {
    pub id: i64,
    pub stage: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub law: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner_price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_security: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_fee: Option<String>,
    /// Serialized rich-text editor state; opaque to the core
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note_input: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_card: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TenderRecord {
    /// Total contract amount; non-numeric strings count as zero
    pub fn total_amount_decimal(&self) -> Decimal {
        parse_amount(self.total_amount.as_deref()).unwrap_or(Decimal::ZERO)
    }

    /// Start price parsed strictly; `None` when absent or non-numeric
    pub fn start_price_decimal(&self) -> Option<Decimal> {
        parse_amount(self.start_price.as_deref())
    }

    /// Deserialized note payload; malformed stored state degrades to `Null`
    pub fn note_document(&self) -> Value {
        match self.note.as_deref() {
            Some(raw) => serde_json::from_str(raw).unwrap_or_else(|e| {
                warn!("Tender {}: discarding malformed note payload: {}", self.id, e);
                Value::Null
            }),
            None => Value::Null,
        }
    }
}

fn parse_amount(value: Option<&str>) -> Option<Decimal> {
    value.and_then(|v| v.trim().parse().ok())
}

/// Input for creating a tender; the remote side assigns the id
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewTender {
    pub stage: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub law: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_security: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_fee: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note_input: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_card: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NewTender {
    pub fn validate(&self) -> Result<()> {
        if self.stage.trim().is_empty() {
            return Err(TenderError::InvalidData(
                "Stage is required".to_string(),
            ));
        }
        validate_amount("startPrice", self.start_price.as_deref())?;
        validate_amount("totalAmount", self.total_amount.as_deref())?;
        validate_amount("contractSecurity", self.contract_security.as_deref())?;
        validate_amount("platformFee", self.platform_fee.as_deref())?;
        validate_color_label(self.color_label.as_deref())?;
        Ok(())
    }
}

/// Partial update; `None` fields are left unchanged by the remote side
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct TenderUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub law: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner_price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_security: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_fee: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note_input: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_card: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TenderUpdate {
    pub fn validate(&self) -> Result<()> {
        if let Some(stage) = &self.stage {
            if stage.trim().is_empty() {
                return Err(TenderError::InvalidData(
                    "Stage cannot be empty".to_string(),
                ));
            }
        }
        validate_amount("startPrice", self.start_price.as_deref())?;
        validate_amount("winnerPrice", self.winner_price.as_deref())?;
        validate_amount("totalAmount", self.total_amount.as_deref())?;
        validate_amount("contractSecurity", self.contract_security.as_deref())?;
        validate_amount("platformFee", self.platform_fee.as_deref())?;
        validate_color_label(self.color_label.as_deref())?;
        Ok(())
    }
}

fn validate_amount(field: &str, value: Option<&str>) -> Result<()> {
    match value {
        Some(v) if !v.trim().is_empty() && v.trim().parse::<Decimal>().is_err() => Err(
            TenderError::InvalidData(format!("Field '{}' is not a valid amount: {}", field, v)),
        ),
        _ => Ok(()),
    }
}

fn validate_color_label(value: Option<&str>) -> Result<()> {
    match value {
        Some(color) if !color.is_empty() && !COLOR_PALETTE.contains(&color) => Err(
            TenderError::InvalidData(format!("Unknown color label: {}", color)),
        ),
        _ => Ok(()),
    }
}

/// Remote shape of a tender group's budget total
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BudgetTotal {
    pub available: String,
}

impl BudgetTotal {
    pub fn available_decimal(&self) -> Decimal {
        self.available.parse().unwrap_or(Decimal::ZERO)
    }
}

/// Remote shape of the dashboard header note
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct HeaderNote {
    pub content: String,
}
