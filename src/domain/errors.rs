use crate::store::RecordId;

// ============================================================================
// Form and View Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    #[error("{field} must be a whole number, got {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("{field} must be a decimal number, got {value:?}")]
    InvalidDecimal { field: &'static str, value: String },

    #[error("{field} cannot be negative")]
    NegativeValue { field: &'static str },

    #[error("Invalid date/time {0:?}, expected YYYY-MM-DDTHH:MM")]
    InvalidDateTime(String),

    #[error("Unknown field {field:?} in {view}")]
    UnknownField { view: &'static str, field: String },

    #[error("Unknown view: {0}")]
    UnknownView(String),

    #[error("'{action}' is not available in {view}")]
    Unsupported { view: &'static str, action: &'static str },

    #[error("Record not found: {0}")]
    RecordNotFound(RecordId),

    #[error("Visit {0} is already completed")]
    VisitAlreadyCompleted(RecordId),

    #[error("Finish or cancel the visit notes first")]
    CompletionPending,

    #[error("No visit notes are being edited")]
    NoCompletionPending,
}
