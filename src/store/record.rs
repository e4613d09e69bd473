use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Surrogate identity of a stored record, unique within its store
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic id source owned by a single store.
///
/// Ids are never reused, even after the record holding one is removed.
#[derive(Debug, Clone, Default)]
pub(crate) struct IdSequence {
    last: u64,
}

impl IdSequence {
    pub(crate) fn next_id(&mut self) -> RecordId {
        self.last += 1;
        RecordId(self.last)
    }
}

/// An entity type that can live in a [`RecordStore`](super::RecordStore).
///
/// Each entity pairs a committed record with a `Draft`: the form values a
/// view collects before handing them to the store. The entity decides which
/// draft field is required and whether it has a natural key.
pub trait Record: Clone + fmt::Debug {
    type Draft: Clone + Default + fmt::Debug;

    /// Label used in logs and metrics
    const ENTITY: &'static str;

    fn id(&self) -> RecordId;

    /// Build a fresh record from a draft
    fn from_draft(id: RecordId, created_at: DateTime<Utc>, draft: Self::Draft) -> Self;

    /// Replace every draft-backed field, keeping id and creation time
    fn apply_draft(&mut self, draft: Self::Draft);

    /// Whether the draft's required field is filled in
    fn has_required_fields(draft: &Self::Draft) -> bool;

    /// Natural key of a committed record, for entities that have one
    fn natural_key(&self) -> Option<&str> {
        None
    }

    /// Natural key carried by a draft, for entities that have one
    fn draft_key(_draft: &Self::Draft) -> Option<&str> {
        None
    }
}
