// ============================================================================
// Record Store - generic in-memory CRUD collection
// ============================================================================
//
// One store per entity type. The entity implements `Record` to describe its
// draft, its required field and (optionally) its natural key; the store does
// the rest.
//
// ============================================================================

pub mod record;
pub mod record_store;

pub use record::{Record, RecordId};
pub use record_store::{RecordStore, UpsertOutcome};
