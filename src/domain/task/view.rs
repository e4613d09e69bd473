use crate::domain::DomainError;
use crate::store::{RecordStore, UpsertOutcome};
use crate::view::{Form, FormField, Intent, RowAction, Table, TableRow, View, ViewKind};

use super::commands::TaskCommand;
use super::model::{Task, TaskDraft};

/// Task list: one title input, toggle and delete per row
#[derive(Debug, Default)]
pub struct TasksView {
    store: RecordStore<Task>,
    draft: TaskDraft,
}

impl TasksView {
    pub fn new(store: RecordStore<Task>) -> Self {
        Self {
            store,
            draft: TaskDraft::default(),
        }
    }

    pub fn store(&self) -> &RecordStore<Task> {
        &self.store
    }

    pub fn draft(&self) -> &TaskDraft {
        &self.draft
    }

    pub fn handle(&mut self, command: TaskCommand) -> Result<(), DomainError> {
        match command {
            TaskCommand::SetTitle(title) => self.draft.title = title,
            TaskCommand::Submit => {
                self.submit();
            }
            TaskCommand::Toggle(id) => {
                self.store.toggle(id, Task::completed_mut);
            }
            TaskCommand::Remove(id) => {
                self.store.remove(id);
            }
        }
        Ok(())
    }

    /// Commit the draft; it is cleared unless the title was empty
    pub fn submit(&mut self) -> UpsertOutcome {
        let outcome = self.store.upsert(self.draft.clone());
        if !outcome.is_rejected() {
            self.draft = TaskDraft::default();
        }
        outcome
    }
}

impl View for TasksView {
    fn kind(&self) -> ViewKind {
        ViewKind::Tasks
    }

    fn dispatch(&mut self, intent: Intent) -> Result<(), DomainError> {
        let command = TaskCommand::try_from(intent)?;
        self.handle(command)
    }

    fn form(&self) -> Form {
        Form {
            fields: vec![FormField::new("title", "Nuova Task", self.draft.title.as_str())],
            submit_label: "+",
        }
    }

    fn table(&self) -> Table {
        let rows = self
            .store
            .list()
            .iter()
            .map(|task| {
                TableRow::new(
                    task.id,
                    vec![task.title.clone()],
                    vec![RowAction::Toggle, RowAction::Remove],
                )
                .struck(task.completed)
            })
            .collect();

        Table::new("Tasks", vec!["Titolo", "Azioni"], rows)
    }

    fn records_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self.store.list())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
