use chrono::Utc;

use crate::metrics::EntityMetrics;

use super::record::{IdSequence, Record, RecordId};

// ============================================================================
// Generic Record Store
// ============================================================================
//
// Ordered, in-memory collection of one entity type.
//
// - Records keep insertion order; nothing is ever sorted implicitly
// - Upsert replaces on an exact natural-key match, otherwise appends
// - A draft missing its required field is rejected without side effects
// - Every operation is synchronous and cannot fail
//
// ============================================================================

/// What an [`RecordStore::upsert`] did with the draft
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted(RecordId),
    Replaced(RecordId),
    Rejected,
}

impl UpsertOutcome {
    pub fn id(&self) -> Option<RecordId> {
        match self {
            Self::Inserted(id) | Self::Replaced(id) => Some(*id),
            Self::Rejected => None,
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected)
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Inserted(_) => "inserted",
            Self::Replaced(_) => "replaced",
            Self::Rejected => "rejected",
        }
    }
}

#[derive(Debug)]
pub struct RecordStore<R: Record> {
    records: Vec<R>,
    ids: IdSequence,
    metrics: Option<EntityMetrics>,
}

impl<R: Record> Default for RecordStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> RecordStore<R> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            ids: IdSequence::default(),
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: EntityMetrics) -> Self {
        metrics.records.set(self.records.len() as i64);
        self.metrics = Some(metrics);
        self
    }

    /// Insert the draft, or replace the record sharing its natural key.
    ///
    /// Key matching is exact string equality: no case folding, no trimming.
    /// A later draft with an existing key silently wins over the stored one.
    pub fn upsert(&mut self, draft: R::Draft) -> UpsertOutcome {
        let outcome = if !R::has_required_fields(&draft) {
            UpsertOutcome::Rejected
        } else {
            let existing = R::draft_key(&draft).and_then(|key| {
                self.records
                    .iter()
                    .position(|record| record.natural_key() == Some(key))
            });

            match existing {
                Some(index) => {
                    let record = &mut self.records[index];
                    record.apply_draft(draft);
                    UpsertOutcome::Replaced(record.id())
                }
                None => {
                    let id = self.ids.next_id();
                    self.records.push(R::from_draft(id, Utc::now(), draft));
                    UpsertOutcome::Inserted(id)
                }
            }
        };

        tracing::debug!(
            entity = R::ENTITY,
            outcome = outcome.label(),
            id = ?outcome.id(),
            "Upsert applied"
        );
        if let Some(metrics) = &self.metrics {
            match outcome {
                UpsertOutcome::Inserted(_) => metrics.inserted.inc(),
                UpsertOutcome::Replaced(_) => metrics.replaced.inc(),
                UpsertOutcome::Rejected => metrics.rejected.inc(),
            }
            metrics.records.set(self.records.len() as i64);
        }

        outcome
    }

    /// Delete by surrogate id. Absent ids are a no-op.
    pub fn remove(&mut self, id: RecordId) -> Option<R> {
        let index = self.position(id)?;
        let removed = self.records.remove(index);

        tracing::debug!(entity = R::ENTITY, %id, "Record removed");
        if let Some(metrics) = &self.metrics {
            metrics.removed.inc();
            metrics.records.set(self.records.len() as i64);
        }

        Some(removed)
    }

    /// Flip one boolean field of a record in place.
    ///
    /// Returns the new value, or `None` when no record has that id.
    pub fn toggle<F>(&mut self, id: RecordId, field: F) -> Option<bool>
    where
        F: FnOnce(&mut R) -> &mut bool,
    {
        let record = self.records.iter_mut().find(|record| record.id() == id)?;
        let flag = field(record);
        *flag = !*flag;
        let value = *flag;

        tracing::debug!(entity = R::ENTITY, %id, value, "Record toggled");
        Some(value)
    }

    /// Run `f` against the record with this id
    pub fn update<T, F>(&mut self, id: RecordId, f: F) -> Option<T>
    where
        F: FnOnce(&mut R) -> T,
    {
        let record = self.records.iter_mut().find(|record| record.id() == id)?;
        let result = f(record);

        tracing::debug!(entity = R::ENTITY, %id, "Record updated");
        Some(result)
    }

    pub fn get(&self, id: RecordId) -> Option<&R> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn find_by_key(&self, key: &str) -> Option<&R> {
        self.records
            .iter()
            .find(|record| record.natural_key() == Some(key))
    }

    /// Records in insertion order
    pub fn list(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Left fold over every record, in list order
    pub fn aggregate<T, F>(&self, init: T, f: F) -> T
    where
        F: FnMut(T, &R) -> T,
    {
        self.records.iter().fold(init, f)
    }

    fn position(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }
}

impl<R: Record> Drop for RecordStore<R> {
    fn drop(&mut self) {
        if let Some(metrics) = &self.metrics {
            metrics.records.set(0);
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::Metrics;
    use chrono::{DateTime, Utc};
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[derive(Debug, Clone)]
    struct Entry {
        id: RecordId,
        key: String,
        label: String,
        flag: bool,
        created_at: DateTime<Utc>,
    }

    #[derive(Debug, Clone, Default)]
    struct EntryDraft {
        key: String,
        label: String,
    }

    impl Record for Entry {
        type Draft = EntryDraft;
        const ENTITY: &'static str = "entry";

        fn id(&self) -> RecordId {
            self.id
        }

        fn from_draft(id: RecordId, created_at: DateTime<Utc>, draft: EntryDraft) -> Self {
            Self {
                id,
                key: draft.key,
                label: draft.label,
                flag: false,
                created_at,
            }
        }

        fn apply_draft(&mut self, draft: EntryDraft) {
            self.key = draft.key;
            self.label = draft.label;
        }

        fn has_required_fields(draft: &EntryDraft) -> bool {
            !draft.key.is_empty()
        }

        fn natural_key(&self) -> Option<&str> {
            Some(&self.key)
        }

        fn draft_key(draft: &EntryDraft) -> Option<&str> {
            Some(&draft.key)
        }
    }

    fn draft(key: &str, label: &str) -> EntryDraft {
        EntryDraft {
            key: key.to_string(),
            label: label.to_string(),
        }
    }

    #[test]
    fn test_upsert_appends_new_keys_in_order() {
        let mut store = RecordStore::<Entry>::new();
        store.upsert(draft("a", "first"));
        store.upsert(draft("b", "second"));
        store.upsert(draft("c", "third"));

        let keys: Vec<&str> = store.list().iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_upsert_replaces_matching_key_and_keeps_id() {
        let mut store = RecordStore::<Entry>::new();
        let first = store.upsert(draft("a", "old"));
        store.upsert(draft("b", "other"));
        let created_at = store.list()[0].created_at;

        let second = store.upsert(draft("a", "new"));

        assert!(matches!(first, UpsertOutcome::Inserted(_)));
        assert_eq!(second, UpsertOutcome::Replaced(first.id().unwrap()));
        assert_eq!(store.len(), 2);
        assert_eq!(store.list()[0].label, "new");
        assert_eq!(store.list()[0].created_at, created_at);
        assert_eq!(store.list()[1].key, "b");
    }

    #[test]
    fn test_upsert_key_match_is_exact() {
        let mut store = RecordStore::<Entry>::new();
        store.upsert(draft("Code", "one"));
        store.upsert(draft("code", "two"));
        store.upsert(draft("code ", "three"));

        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_upsert_rejects_missing_required_field() {
        let mut store = RecordStore::<Entry>::new();
        let outcome = store.upsert(draft("", "no key"));

        assert!(outcome.is_rejected());
        assert_eq!(outcome.id(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_ids_unique_under_rapid_inserts() {
        let mut store = RecordStore::<Entry>::new();
        for i in 0..1000 {
            store.upsert(draft(&format!("k{i}"), ""));
        }

        let ids: HashSet<RecordId> = store.list().iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_ids_not_reused_after_remove() {
        let mut store = RecordStore::<Entry>::new();
        let first = store.upsert(draft("a", "")).id().unwrap();
        store.remove(first);
        let second = store.upsert(draft("a", "")).id().unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut store = RecordStore::<Entry>::new();
        let id = store.upsert(draft("a", "")).id().unwrap();
        store.upsert(draft("b", ""));

        assert!(store.remove(id).is_some());
        assert!(store.remove(id).is_none());
        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].key, "b");
    }

    #[test]
    fn test_toggle_flips_only_that_field() {
        let mut store = RecordStore::<Entry>::new();
        let id = store.upsert(draft("a", "label")).id().unwrap();
        let other = store.upsert(draft("b", "label")).id().unwrap();

        assert_eq!(store.toggle(id, |entry| &mut entry.flag), Some(true));
        assert!(store.get(id).unwrap().flag);
        assert_eq!(store.get(id).unwrap().label, "label");
        assert!(!store.get(other).unwrap().flag);

        assert_eq!(store.toggle(id, |entry| &mut entry.flag), Some(false));
        assert_eq!(store.toggle(RecordId(99), |entry| &mut entry.flag), None);
    }

    #[test]
    fn test_update_missing_record_returns_none() {
        let mut store = RecordStore::<Entry>::new();
        assert_eq!(store.update(RecordId(1), |entry| entry.label.len()), None);
    }

    #[test]
    fn test_find_by_key() {
        let mut store = RecordStore::<Entry>::new();
        store.upsert(draft("a", "x"));

        assert_eq!(store.find_by_key("a").unwrap().label, "x");
        assert!(store.find_by_key("A").is_none());
    }

    #[test]
    fn test_aggregate_folds_in_order() {
        let mut store = RecordStore::<Entry>::new();
        store.upsert(draft("a", "1"));
        store.upsert(draft("b", "2"));

        let joined = store.aggregate(String::new(), |mut acc, entry| {
            acc.push_str(&entry.label);
            acc
        });
        assert_eq!(joined, "12");
    }

    #[test]
    fn test_metrics_track_outcomes() {
        let metrics = Metrics::new().unwrap();
        let mut store = RecordStore::<Entry>::new().with_metrics(metrics.entity("entry"));
        store.upsert(draft("a", ""));
        store.upsert(draft("a", "again"));
        store.upsert(draft("", ""));
        let id = store.list()[0].id;
        store.remove(id);

        let text = metrics.render().unwrap();
        assert!(text.contains(r#"records_written_total{entity="entry",outcome="inserted"} 1"#));
        assert!(text.contains(r#"records_written_total{entity="entry",outcome="replaced"} 1"#));
        assert!(text.contains(r#"records_written_total{entity="entry",outcome="rejected"} 1"#));
        assert!(text.contains(r#"records_removed_total{entity="entry"} 1"#));
        assert!(text.contains(r#"records{entity="entry"} 0"#));
    }

    proptest! {
        #[test]
        fn prop_last_write_wins(labels in prop::collection::vec("[a-z]{0,6}", 1..20)) {
            let mut store = RecordStore::<Entry>::new();
            store.upsert(draft("other", "x"));
            for label in &labels {
                store.upsert(draft("key", label));
            }

            let matching: Vec<&Entry> = store.list().iter().filter(|e| e.key == "key").collect();
            prop_assert_eq!(matching.len(), 1);
            prop_assert_eq!(&matching[0].label, labels.last().unwrap());
            prop_assert_eq!(store.len(), 2);
        }

        #[test]
        fn prop_distinct_keys_keep_insertion_order(keys in prop::collection::btree_set("[a-z]{1,6}", 0..30)) {
            let keys: Vec<String> = keys.into_iter().collect();
            let mut store = RecordStore::<Entry>::new();
            for key in &keys {
                store.upsert(draft(key, ""));
            }

            let listed: Vec<String> = store.list().iter().map(|e| e.key.clone()).collect();
            prop_assert_eq!(listed, keys);
        }

        #[test]
        fn prop_double_remove_is_noop(count in 1usize..15, pick in any::<prop::sample::Index>()) {
            let mut store = RecordStore::<Entry>::new();
            for i in 0..count {
                store.upsert(draft(&format!("k{i}"), ""));
            }
            let id = store.list()[pick.index(count)].id;

            store.remove(id);
            let after_first: Vec<RecordId> = store.list().iter().map(|e| e.id).collect();
            prop_assert!(store.remove(id).is_none());
            let after_second: Vec<RecordId> = store.list().iter().map(|e| e.id).collect();
            prop_assert_eq!(after_first, after_second);
        }
    }
}
