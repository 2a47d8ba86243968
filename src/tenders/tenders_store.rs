use std::collections::HashMap;

use crate::tenders::tenders_model::TenderRecord;

/// Normalized tender collection: id-keyed rows plus an insertion-ordered id list.
///
/// `all_ids` never holds duplicates and always matches `by_id`'s key set; the
/// order of `all_ids` is the base order before any view-level sorting.
#[derive(Debug, Default, Clone)]
pub struct TenderTable {
    by_id: HashMap<i64, TenderRecord>,
    all_ids: Vec<i64>,
}

impl TenderTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the record, appending to the order, or replaces it in place
    pub fn upsert(&mut self, record: TenderRecord) {
        let id = record.id;
        if self.by_id.insert(id, record).is_none() {
            self.all_ids.push(id);
        }
    }

    /// Removes the record; absent ids are a no-op
    pub fn remove(&mut self, id: i64) {
        if self.by_id.remove(&id).is_some() {
            self.all_ids.retain(|&existing| existing != id);
        }
    }

    /// Wholesale rebuild from a bulk load; prior content is discarded.
    /// Selection referencing old ids is not reconciled here.
    pub fn replace_all(&mut self, records: Vec<TenderRecord>) {
        self.by_id.clear();
        self.all_ids.clear();
        for record in records {
            self.upsert(record);
        }
    }

    pub fn get(&self, id: i64) -> Option<&TenderRecord> {
        self.by_id.get(&id)
    }

    pub fn contains(&self, id: i64) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Records in insertion order
    pub fn all(&self) -> Vec<TenderRecord> {
        self.all_ids
            .iter()
            .filter_map(|id| self.by_id.get(id))
            .cloned()
            .collect()
    }

    pub fn ids(&self) -> &[i64] {
        &self.all_ids
    }

    pub fn len(&self) -> usize {
        self.all_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all_ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn record(id: i64, stage: &str) -> TenderRecord {
        serde_json::from_value(serde_json::json!({ "id": id, "stage": stage })).unwrap()
    }

    fn assert_consistent(table: &TenderTable) {
        let ids: HashSet<i64> = table.ids().iter().copied().collect();
        assert_eq!(ids.len(), table.ids().len(), "duplicate id in order list");
        assert_eq!(ids.len(), table.len());
        for id in table.ids() {
            assert!(table.get(*id).is_some(), "orphan id {} in order list", id);
        }
    }

    #[test]
    fn test_upsert_appends_then_replaces_in_place() {
        let mut table = TenderTable::new();
        table.upsert(record(1, "Новый"));
        table.upsert(record(2, "Новый"));
        table.upsert(record(1, "Подал ИП"));

        assert_consistent(&table);
        assert_eq!(table.ids(), &[1, 2]);
        assert_eq!(table.get(1).unwrap().stage, "Подал ИП");
    }

    #[test]
    fn test_upsert_is_idempotent() {
        let mut table = TenderTable::new();
        table.upsert(record(1, "Новый"));
        let once = table.clone();
        table.upsert(record(1, "Новый"));

        assert_eq!(table.ids(), once.ids());
        assert_eq!(table.all(), once.all());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut table = TenderTable::new();
        table.upsert(record(1, "Новый"));
        table.remove(99);
        assert_consistent(&table);
        assert_eq!(table.len(), 1);

        table.remove(1);
        assert_consistent(&table);
        assert!(table.is_empty());
    }

    #[test]
    fn test_replace_all_preserves_input_order() {
        let mut table = TenderTable::new();
        table.upsert(record(5, "Отказ"));

        table.replace_all(vec![record(1, "Подал ИП"), record(2, "Победил ИП")]);
        assert_consistent(&table);
        assert_eq!(table.ids(), &[1, 2]);
        assert!(table.get(5).is_none());
    }

    #[test]
    fn test_replace_all_with_duplicate_ids_keeps_last_record_once() {
        let mut table = TenderTable::new();
        table.replace_all(vec![
            record(1, "Новый"),
            record(2, "Расчет"),
            record(1, "Подал ИП"),
        ]);

        assert_consistent(&table);
        assert_eq!(table.ids(), &[1, 2]);
        assert_eq!(table.get(1).unwrap().stage, "Подал ИП");
    }

    #[test]
    fn test_random_interleaving_keeps_invariants() {
        let mut table = TenderTable::new();
        for step in 0..200i64 {
            match step % 4 {
                0 | 1 => table.upsert(record(step % 17, "Новый")),
                2 => table.remove((step * 7) % 17),
                _ => table.upsert(record((step * 3) % 17, "Расчет")),
            }
            assert_consistent(&table);
        }
    }
}
