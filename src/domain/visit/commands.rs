use chrono::NaiveDateTime;

use crate::domain::DomainError;
use crate::store::RecordId;
use crate::view::Intent;

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

#[derive(Debug, Clone, PartialEq)]
pub enum VisitCommand {
    /// `None` clears the picker
    SetDateTime(Option<NaiveDateTime>),
    Submit,
    /// Open the notes form for a planned visit
    Complete(RecordId),
    SetNotes(String),
    ConfirmNotes,
    CancelNotes,
    Remove(RecordId),
    ToggleCalendar,
}

/// Parse a local date-time picker value
pub fn parse_datetime(value: &str) -> Result<Option<NaiveDateTime>, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .map(Some)
        .ok_or_else(|| DomainError::InvalidDateTime(value.to_string()))
}

impl TryFrom<Intent> for VisitCommand {
    type Error = DomainError;

    fn try_from(intent: Intent) -> Result<Self, Self::Error> {
        match intent {
            Intent::SetField { field, value } if field == "datetime" => {
                Ok(Self::SetDateTime(parse_datetime(&value)?))
            }
            Intent::SetField { field, .. } => Err(DomainError::UnknownField { view: "visits", field }),
            Intent::Submit => Ok(Self::Submit),
            Intent::Complete(id) => Ok(Self::Complete(id)),
            Intent::SetNotes(notes) => Ok(Self::SetNotes(notes)),
            Intent::ConfirmNotes => Ok(Self::ConfirmNotes),
            Intent::CancelNotes => Ok(Self::CancelNotes),
            Intent::Remove(id) => Ok(Self::Remove(id)),
            Intent::ToggleCalendar => Ok(Self::ToggleCalendar),
            other => Err(DomainError::Unsupported {
                view: "visits",
                action: other.action(),
            }),
        }
    }
}
