use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::{Record, RecordId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: RecordId,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Task {
    pub fn completed_mut(&mut self) -> &mut bool {
        &mut self.completed
    }
}

/// Form state for a new task
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskDraft {
    pub title: String,
}

impl TaskDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into() }
    }
}

impl Record for Task {
    type Draft = TaskDraft;
    const ENTITY: &'static str = "task";

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, created_at: DateTime<Utc>, draft: TaskDraft) -> Self {
        Self {
            id,
            title: draft.title,
            completed: false,
            created_at,
        }
    }

    fn apply_draft(&mut self, draft: TaskDraft) {
        self.title = draft.title;
    }

    fn has_required_fields(draft: &TaskDraft) -> bool {
        !draft.title.is_empty()
    }
}
