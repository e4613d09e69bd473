use chrono::{Local, NaiveDate};

use crate::domain::DomainError;
use crate::store::{RecordId, RecordStore, UpsertOutcome};
use crate::view::{Form, FormField, Intent, RowAction, Table, TableRow, View, ViewKind};

use super::calendar::MonthCalendar;
use super::commands::VisitCommand;
use super::model::{Visit, VisitDraft};

const DISPLAY_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

/// Notes sub-form opened by the complete action.
///
/// The store is only touched when the sub-form is confirmed.
#[derive(Debug, Clone, PartialEq)]
pub struct NotesDialog {
    pub visit_id: RecordId,
    pub notes: String,
}

#[derive(Debug, Default)]
pub struct VisitsView {
    store: RecordStore<Visit>,
    draft: VisitDraft,
    completion: Option<NotesDialog>,
    calendar_open: bool,
}

impl VisitsView {
    pub fn new(store: RecordStore<Visit>) -> Self {
        Self {
            store,
            ..Default::default()
        }
    }

    pub fn store(&self) -> &RecordStore<Visit> {
        &self.store
    }

    pub fn draft(&self) -> &VisitDraft {
        &self.draft
    }

    pub fn completion(&self) -> Option<&NotesDialog> {
        self.completion.as_ref()
    }

    pub fn calendar_open(&self) -> bool {
        self.calendar_open
    }

    pub fn handle(&mut self, command: VisitCommand) -> Result<(), DomainError> {
        match command {
            VisitCommand::SetNotes(notes) => {
                let dialog = self
                    .completion
                    .as_mut()
                    .ok_or(DomainError::NoCompletionPending)?;
                dialog.notes = notes;
                Ok(())
            }
            VisitCommand::ConfirmNotes => self.confirm_completion(),
            VisitCommand::CancelNotes => {
                self.completion
                    .take()
                    .map(|_| ())
                    .ok_or(DomainError::NoCompletionPending)
            }
            _ if self.completion.is_some() => Err(DomainError::CompletionPending),
            VisitCommand::SetDateTime(datetime) => {
                self.draft.datetime = datetime;
                Ok(())
            }
            VisitCommand::Submit => {
                self.submit();
                Ok(())
            }
            VisitCommand::Complete(id) => self.begin_completion(id),
            VisitCommand::Remove(id) => {
                self.store.remove(id);
                Ok(())
            }
            VisitCommand::ToggleCalendar => {
                self.calendar_open = !self.calendar_open;
                Ok(())
            }
        }
    }

    /// Schedule the drafted date; nothing happens while no date is picked
    pub fn submit(&mut self) -> UpsertOutcome {
        let outcome = self.store.upsert(self.draft.clone());
        if !outcome.is_rejected() {
            self.draft = VisitDraft::default();
        }
        outcome
    }

    fn begin_completion(&mut self, id: RecordId) -> Result<(), DomainError> {
        let visit = self.store.get(id).ok_or(DomainError::RecordNotFound(id))?;
        if visit.is_completed() {
            return Err(DomainError::VisitAlreadyCompleted(id));
        }
        self.completion = Some(NotesDialog {
            visit_id: id,
            notes: String::new(),
        });
        Ok(())
    }

    fn confirm_completion(&mut self) -> Result<(), DomainError> {
        let dialog = self
            .completion
            .take()
            .ok_or(DomainError::NoCompletionPending)?;

        match self
            .store
            .update(dialog.visit_id, |visit| visit.complete(dialog.notes))
        {
            Some(result) => result,
            None => {
                tracing::debug!(id = %dialog.visit_id, "Visit vanished before notes were saved");
                Ok(())
            }
        }
    }

    pub fn calendar(&self, reference: NaiveDate) -> MonthCalendar {
        MonthCalendar::build(reference, self.store.list())
    }
}

impl View for VisitsView {
    fn kind(&self) -> ViewKind {
        ViewKind::Visits
    }

    fn dispatch(&mut self, intent: Intent) -> Result<(), DomainError> {
        let command = VisitCommand::try_from(intent)?;
        self.handle(command)
    }

    fn form(&self) -> Form {
        let value = self
            .draft
            .datetime
            .map(|datetime| datetime.format("%Y-%m-%dT%H:%M").to_string())
            .unwrap_or_default();

        Form {
            fields: vec![FormField::new("datetime", "Data/Ora", value)],
            submit_label: "+",
        }
    }

    fn table(&self) -> Table {
        let rows = self
            .store
            .list()
            .iter()
            .map(|visit| {
                let mut actions = Vec::with_capacity(2);
                if !visit.is_completed() {
                    actions.push(RowAction::Complete);
                }
                actions.push(RowAction::Remove);

                TableRow::new(
                    visit.id,
                    vec![
                        visit.scheduled_at.format(DISPLAY_FORMAT).to_string(),
                        visit.status.label().to_string(),
                        visit.notes.clone(),
                    ],
                    actions,
                )
            })
            .collect();

        Table::new("Visite Clienti", vec!["Data/Ora", "Stato", "Note", "Azioni"], rows)
    }

    fn records_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self.store.list())
    }

    fn render(&self) -> String {
        let mut out = self.form().to_string();
        if let Some(dialog) = &self.completion {
            out.push_str(&format!(
                "\nNote per la visita {}: {}\n  [confirm | cancel]\n",
                dialog.visit_id, dialog.notes
            ));
        }
        if self.calendar_open {
            out.push('\n');
            out.push_str(&self.calendar(Local::now().date_naive()).to_string());
        }
        out.push('\n');
        out.push_str(&self.table().to_string());
        out
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
