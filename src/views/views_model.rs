use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Active filter constraints; an absent field means no constraint
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date_from: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date_to: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_price_min: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_price_max: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy, Default)]
#[serde(rename_all = "camelCase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SortEntry {
    pub key: String,
    pub direction: SortDirection,
}

/// Ordered multi-key sort specification; earlier entries dominate
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct SortSpec {
    pub entries: Vec<SortEntry>,
}

impl SortSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(key: impl Into<String>, direction: SortDirection) -> Self {
        SortSpec {
            entries: vec![SortEntry {
                key: key.into(),
                direction,
            }],
        }
    }

    /// Re-applying a key toggles its direction in place; a new key is
    /// appended ascending
    pub fn toggle(&mut self, key: &str) {
        match self.entries.iter_mut().find(|e| e.key == key) {
            Some(entry) => entry.direction = entry.direction.toggled(),
            None => self.entries.push(SortEntry {
                key: key.to_string(),
                direction: SortDirection::Asc,
            }),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// User-configurable column projection over tender fields
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ColumnConfig {
    pub id: String,
    pub label: String,
    pub visible: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_keeps_position_and_flips_direction() {
        let mut spec = SortSpec::new();
        spec.toggle("endDate");
        spec.toggle("startPrice");
        spec.toggle("endDate");

        assert_eq!(spec.entries.len(), 2);
        assert_eq!(spec.entries[0].key, "endDate");
        assert_eq!(spec.entries[0].direction, SortDirection::Desc);
        assert_eq!(spec.entries[1].key, "startPrice");
        assert_eq!(spec.entries[1].direction, SortDirection::Asc);
    }
}
