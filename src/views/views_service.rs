use std::cmp::Ordering;

use serde_json::Value;

use super::views_model::{FilterState, SortDirection, SortSpec};
use crate::tenders::TenderRecord;

/// Derives the render list: stage selection, then filters, then the stable
/// multi-key sort. Pure: the input records are never mutated, and records
/// surviving all filters with an empty sort keep their original order.
pub fn select_tenders(
    records: &[TenderRecord],
    selected_stages: &[String],
    filters: &FilterState,
    sort: &SortSpec,
) -> Vec<TenderRecord> {
    let mut rows: Vec<(TenderRecord, Value)> = records
        .iter()
        .filter(|r| matches_stages(r, selected_stages))
        .filter(|r| matches_filters(r, filters))
        .map(|r| {
            let flat = serde_json::to_value(r).unwrap_or(Value::Null);
            (r.clone(), flat)
        })
        .collect();

    if !sort.is_empty() {
        rows.sort_by(|(_, a), (_, b)| compare_rows(a, b, sort));
    }

    rows.into_iter().map(|(record, _)| record).collect()
}

fn matches_stages(record: &TenderRecord, selected_stages: &[String]) -> bool {
    selected_stages.is_empty() || selected_stages.iter().any(|s| *s == record.stage)
}

fn matches_filters(record: &TenderRecord, filters: &FilterState) -> bool {
    if let Some(term) = filters.search.as_deref().filter(|t| !t.is_empty()) {
        // Broad recall: the term may appear anywhere in the stringified record
        let haystack = serde_json::to_string(record)
            .unwrap_or_default()
            .to_lowercase();
        if !haystack.contains(&term.to_lowercase()) {
            return false;
        }
    }

    if let Some(from) = filters.end_date_from {
        match record.end_date {
            Some(date) if date >= from => {}
            _ => return false,
        }
    }
    if let Some(to) = filters.end_date_to {
        match record.end_date {
            Some(date) if date <= to => {}
            _ => return false,
        }
    }

    if let Some(min) = filters.start_price_min {
        match record.start_price_decimal() {
            Some(price) if price >= min => {}
            _ => return false,
        }
    }
    if let Some(max) = filters.start_price_max {
        match record.start_price_decimal() {
            Some(price) if price <= max => {}
            _ => return false,
        }
    }

    if !field_contains(record.customer_region.as_deref(), filters.customer_region.as_deref()) {
        return false;
    }
    if !field_contains(record.customer_name.as_deref(), filters.customer_name.as_deref()) {
        return false;
    }

    true
}

fn field_contains(field: Option<&str>, needle: Option<&str>) -> bool {
    match needle.filter(|n| !n.is_empty()) {
        None => true,
        Some(needle) => match field {
            Some(value) => value.to_lowercase().contains(&needle.to_lowercase()),
            None => false,
        },
    }
}

fn compare_rows(a: &Value, b: &Value, sort: &SortSpec) -> Ordering {
    for entry in &sort.entries {
        let left = non_null(a.get(entry.key.as_str()));
        let right = non_null(b.get(entry.key.as_str()));

        let ordering = match (left, right) {
            (None, None) => Ordering::Equal,
            // Missing values sort last regardless of direction
            (None, Some(_)) => return Ordering::Greater,
            (Some(_), None) => return Ordering::Less,
            (Some(x), Some(y)) => match entry.direction {
                SortDirection::Asc => compare_values(x, y),
                SortDirection::Desc => compare_values(x, y).reverse(),
            },
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

fn non_null(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Value::String(x), Value::String(y)) => natural_cmp(x, y),
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        _ => natural_cmp(&a.to_string(), &b.to_string()),
    }
}

/// Case-insensitive, numeric-aware string ordering: digit runs compare as
/// numbers, so "2" sorts before "10"
fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();

    loop {
        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let nx = take_number(&mut left);
                let ny = take_number(&mut right);
                match nx.cmp(&ny) {
                    Ordering::Equal => {}
                    other => return other,
                }
            }
            (Some(x), Some(y)) => {
                let (cx, cy) = (
                    x.to_lowercase().next().unwrap_or(x),
                    y.to_lowercase().next().unwrap_or(y),
                );
                match cx.cmp(&cy) {
                    Ordering::Equal => {
                        left.next();
                        right.next();
                    }
                    other => return other,
                }
            }
        }
    }
}

fn take_number(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> u128 {
    let mut value: u128 = 0;
    while let Some(c) = chars.peek().copied() {
        if let Some(digit) = c.to_digit(10) {
            value = value.saturating_mul(10).saturating_add(digit as u128);
            chars.next();
        } else {
            break;
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::views_model::SortEntry;
    use rust_decimal_macros::dec;

    fn record(id: i64, fields: serde_json::Value) -> TenderRecord {
        let mut value = fields;
        value["id"] = serde_json::json!(id);
        if value.get("stage").is_none() {
            value["stage"] = serde_json::json!("Новый");
        }
        serde_json::from_value(value).unwrap()
    }

    fn sample() -> Vec<TenderRecord> {
        vec![
            record(
                1,
                serde_json::json!({
                    "stage": "Подал ИП",
                    "subject": "Поставка серверов",
                    "customerName": "Администрация города",
                    "customerRegion": "Москва",
                    "startPrice": "500000",
                    "endDate": "2026-03-01",
                    "totalAmount": "500000"
                }),
            ),
            record(
                2,
                serde_json::json!({
                    "stage": "Победил ИП",
                    "subject": "Ремонт школы",
                    "customerName": "Школа №10",
                    "customerRegion": "Казань",
                    "startPrice": "280000",
                    "endDate": "2026-01-15",
                    "totalAmount": "280000"
                }),
            ),
            record(
                3,
                serde_json::json!({
                    "stage": "Новый",
                    "subject": "Уборка территории",
                    "customerRegion": "Москва",
                    "startPrice": "oops"
                }),
            ),
        ]
    }

    #[test]
    fn test_stage_filter() {
        let rows = select_tenders(
            &sample(),
            &["Победил ИП".to_string()],
            &FilterState::default(),
            &SortSpec::new(),
        );
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, 2);
    }

    #[test]
    fn test_search_matches_anywhere_in_record() {
        let filters = FilterState {
            search: Some("школ".to_string()),
            ..Default::default()
        };
        let rows = select_tenders(&sample(), &[], &filters, &SortSpec::new());
        // Matches id 2 in both subject and customerName
        assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_price_range_excludes_unparseable() {
        let filters = FilterState {
            start_price_min: Some(dec!(100000)),
            ..Default::default()
        };
        let rows = select_tenders(&sample(), &[], &filters, &SortSpec::new());
        // id 3 has a non-numeric startPrice and is excluded by the bound
        assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_date_range_inclusive() {
        let filters = FilterState {
            end_date_from: Some("2026-01-15".parse().unwrap()),
            end_date_to: Some("2026-03-01".parse().unwrap()),
            ..Default::default()
        };
        let rows = select_tenders(&sample(), &[], &filters, &SortSpec::new());
        assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_filters_compose_as_intersection() {
        let region = FilterState {
            customer_region: Some("москва".to_string()),
            ..Default::default()
        };
        let price = FilterState {
            start_price_min: Some(dec!(1)),
            ..Default::default()
        };
        let both = FilterState {
            customer_region: region.customer_region.clone(),
            start_price_min: price.start_price_min,
            ..Default::default()
        };

        let ids = |filters: &FilterState| {
            select_tenders(&sample(), &[], filters, &SortSpec::new())
                .iter()
                .map(|r| r.id)
                .collect::<Vec<_>>()
        };

        let intersection: Vec<i64> = ids(&region)
            .into_iter()
            .filter(|id| ids(&price).contains(id))
            .collect();
        assert_eq!(ids(&both), intersection);
    }

    #[test]
    fn test_sort_missing_values_last_regardless_of_direction() {
        for direction in [SortDirection::Asc, SortDirection::Desc] {
            let rows = select_tenders(
                &sample(),
                &[],
                &FilterState::default(),
                &SortSpec::single("endDate", direction),
            );
            assert_eq!(rows.last().unwrap().id, 3, "direction {:?}", direction);
        }
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let records = vec![
            record(10, serde_json::json!({ "stage": "Новый", "law": "44-ФЗ" })),
            record(11, serde_json::json!({ "stage": "Новый", "law": "44-ФЗ" })),
            record(12, serde_json::json!({ "stage": "Новый", "law": "44-ФЗ" })),
        ];
        let rows = select_tenders(
            &records,
            &[],
            &FilterState::default(),
            &SortSpec::single("law", SortDirection::Asc),
        );
        assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![10, 11, 12]);
    }

    #[test]
    fn test_multi_key_sort_falls_through_on_ties() {
        let records = vec![
            record(1, serde_json::json!({ "stage": "Новый", "law": "44-ФЗ", "subject": "Б" })),
            record(2, serde_json::json!({ "stage": "Новый", "law": "44-ФЗ", "subject": "А" })),
            record(3, serde_json::json!({ "stage": "Новый", "law": "223-ФЗ", "subject": "В" })),
        ];
        let sort = SortSpec {
            entries: vec![
                SortEntry {
                    key: "law".to_string(),
                    direction: SortDirection::Asc,
                },
                SortEntry {
                    key: "subject".to_string(),
                    direction: SortDirection::Asc,
                },
            ],
        };
        let rows = select_tenders(&records, &[], &FilterState::default(), &sort);
        // Numeric-aware ordering puts "44-ФЗ" before "223-ФЗ"; subject breaks the tie
        assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2, 1, 3]);
    }

    #[test]
    fn test_natural_ordering_of_numeric_strings() {
        assert_eq!(natural_cmp("2", "10"), Ordering::Less);
        assert_eq!(natural_cmp("Лот 2", "Лот 10"), Ordering::Less);
        assert_eq!(natural_cmp("abc", "ABD"), Ordering::Less);
        assert_eq!(natural_cmp("44-ФЗ", "223-ФЗ"), Ordering::Less);
    }
}
