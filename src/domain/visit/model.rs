use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;
use crate::store::{Record, RecordId};

/// Lifecycle of a visit. Completion is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisitStatus {
    Planned,
    Completed,
}

impl VisitStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Planned => "Pianificato",
            Self::Completed => "Completato",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visit {
    pub id: RecordId,
    #[serde(rename = "datetime")]
    pub scheduled_at: NaiveDateTime,
    pub status: VisitStatus,
    /// Filled in when the visit is completed
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

impl Visit {
    pub fn is_completed(&self) -> bool {
        self.status == VisitStatus::Completed
    }

    pub fn complete(&mut self, notes: String) -> Result<(), DomainError> {
        if self.is_completed() {
            return Err(DomainError::VisitAlreadyCompleted(self.id));
        }
        self.status = VisitStatus::Completed;
        self.notes = notes;
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VisitDraft {
    pub datetime: Option<NaiveDateTime>,
}

impl Record for Visit {
    type Draft = VisitDraft;
    const ENTITY: &'static str = "visit";

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, created_at: DateTime<Utc>, draft: VisitDraft) -> Self {
        Self {
            id,
            scheduled_at: draft.datetime.unwrap_or_else(|| created_at.naive_utc()),
            status: VisitStatus::Planned,
            notes: String::new(),
            created_at,
        }
    }

    fn apply_draft(&mut self, draft: VisitDraft) {
        if let Some(datetime) = draft.datetime {
            self.scheduled_at = datetime;
        }
    }

    fn has_required_fields(draft: &VisitDraft) -> bool {
        draft.datetime.is_some()
    }
}
