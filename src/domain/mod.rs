// ============================================================================
// Domain Layer - the four record-keeping views
// ============================================================================
//
// Each entity has its own subdirectory with:
// - Model (record, draft, `Record` impl)
// - Commands (typed view actions)
// - View (binding of a `RecordStore` to form + table)
//
// ============================================================================

pub mod errors;

pub mod task;
pub mod client;
pub mod product;
pub mod visit;

pub use errors::DomainError;
