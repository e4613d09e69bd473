use crate::domain::DomainError;
use crate::store::{RecordId, RecordStore, UpsertOutcome};
use crate::view::{Form, FormField, Intent, RowAction, Table, TableRow, View, ViewKind};

use super::commands::{ClientCommand, ClientField};
use super::model::{Client, ClientDraft};

/// Client registry keyed by email
#[derive(Debug, Default)]
pub struct ClientsView {
    store: RecordStore<Client>,
    draft: ClientDraft,
}

impl ClientsView {
    pub fn new(store: RecordStore<Client>) -> Self {
        Self {
            store,
            draft: ClientDraft::default(),
        }
    }

    pub fn store(&self) -> &RecordStore<Client> {
        &self.store
    }

    pub fn draft(&self) -> &ClientDraft {
        &self.draft
    }

    pub fn handle(&mut self, command: ClientCommand) -> Result<(), DomainError> {
        match command {
            ClientCommand::Set(field, value) => {
                let slot = match field {
                    ClientField::Name => &mut self.draft.name,
                    ClientField::Email => &mut self.draft.email,
                    ClientField::Phone => &mut self.draft.phone,
                    ClientField::Vat => &mut self.draft.vat,
                    ClientField::Location => &mut self.draft.location,
                };
                *slot = value;
            }
            ClientCommand::Submit => {
                self.submit();
            }
            ClientCommand::Edit(id) => self.edit(id)?,
            ClientCommand::Remove(id) => {
                self.store.remove(id);
            }
        }
        Ok(())
    }

    /// Save the draft, replacing any client with the same email
    pub fn submit(&mut self) -> UpsertOutcome {
        let outcome = self.store.upsert(self.draft.clone());
        if !outcome.is_rejected() {
            self.draft = ClientDraft::default();
        }
        outcome
    }

    /// Load a client into the form; saving it again replaces the record
    pub fn edit(&mut self, id: RecordId) -> Result<(), DomainError> {
        let client = self.store.get(id).ok_or(DomainError::RecordNotFound(id))?;
        self.draft = ClientDraft::from_client(client);
        Ok(())
    }
}

impl View for ClientsView {
    fn kind(&self) -> ViewKind {
        ViewKind::Clients
    }

    fn dispatch(&mut self, intent: Intent) -> Result<(), DomainError> {
        let command = ClientCommand::try_from(intent)?;
        self.handle(command)
    }

    fn form(&self) -> Form {
        Form {
            fields: vec![
                FormField::new("name", "Nome", self.draft.name.as_str()),
                FormField::new("email", "Email", self.draft.email.as_str()),
                FormField::new("phone", "Telefono", self.draft.phone.as_str()),
                FormField::new("vat", "P.IVA", self.draft.vat.as_str()),
                FormField::new("location", "Località", self.draft.location.as_str()),
            ],
            submit_label: "Salva",
        }
    }

    fn table(&self) -> Table {
        let rows = self
            .store
            .list()
            .iter()
            .map(|client| {
                TableRow::new(
                    client.id,
                    vec![
                        client.name.clone(),
                        client.email.as_str().to_string(),
                        client.phone.as_str().to_string(),
                        client.vat.clone(),
                        client.location.clone(),
                    ],
                    vec![RowAction::Edit, RowAction::Remove],
                )
            })
            .collect();

        Table::new(
            "Clienti",
            vec!["Nome", "Email", "Telefono", "P.IVA", "Località", "Azioni"],
            rows,
        )
    }

    fn records_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self.store.list())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn set(view: &mut ClientsView, field: &str, value: &str) {
        view.dispatch(Intent::SetField {
            field: field.to_string(),
            value: value.to_string(),
        })
        .unwrap();
    }

    fn save(view: &mut ClientsView, email: &str, name: &str) -> UpsertOutcome {
        set(view, "email", email);
        set(view, "name", name);
        view.submit()
    }

    #[test]
    fn test_upsert_by_email_keeps_single_record() {
        let mut view = ClientsView::default();
        let first = save(&mut view, "a@x.com", "Ana");
        let second = save(&mut view, "a@x.com", "Ana2");

        assert_eq!(second, UpsertOutcome::Replaced(first.id().unwrap()));
        assert_eq!(view.store().len(), 1);
        assert_eq!(view.store().list()[0].name, "Ana2");
    }

    #[test]
    fn test_email_match_is_case_sensitive() {
        let mut view = ClientsView::default();
        save(&mut view, "a@x.com", "Ana");
        save(&mut view, "A@x.com", "Ana");

        assert_eq!(view.store().len(), 2);
    }

    #[test]
    fn test_submit_without_email_is_ignored() {
        let mut view = ClientsView::default();
        set(&mut view, "name", "Senza email");
        view.dispatch(Intent::Submit).unwrap();

        assert!(view.store().is_empty());
        assert_eq!(view.draft().name, "Senza email");
    }

    #[test]
    fn test_edit_copies_record_into_draft() {
        let mut view = ClientsView::default();
        set(&mut view, "phone", "06 555");
        set(&mut view, "vat", "IT0001");
        set(&mut view, "location", "Milano");
        let id = save(&mut view, "b@x.com", "Bruno").id().unwrap();
        assert_eq!(view.draft(), &ClientDraft::default());

        view.dispatch(Intent::Edit(id)).unwrap();

        let form = view.form();
        assert_eq!(form.field("name").unwrap().value, "Bruno");
        assert_eq!(form.field("email").unwrap().value, "b@x.com");
        assert_eq!(form.field("phone").unwrap().value, "06 555");
        assert_eq!(form.field("vat").unwrap().value, "IT0001");
        assert_eq!(form.field("location").unwrap().value, "Milano");
    }

    #[test]
    fn test_edit_then_save_replaces_in_place() {
        let mut view = ClientsView::default();
        save(&mut view, "a@x.com", "Ana");
        let id = save(&mut view, "b@x.com", "Bruno").id().unwrap();
        save(&mut view, "c@x.com", "Carla");

        view.dispatch(Intent::Edit(id)).unwrap();
        set(&mut view, "location", "Torino");
        view.dispatch(Intent::Submit).unwrap();

        let names: Vec<&str> = view.store().list().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Ana", "Bruno", "Carla"]);
        assert_eq!(view.store().get(id).unwrap().location, "Torino");
    }

    #[test]
    fn test_edit_missing_client_fails() {
        let mut view = ClientsView::default();
        let result = view.dispatch(Intent::Edit(RecordId(3)));
        assert_eq!(result, Err(DomainError::RecordNotFound(RecordId(3))));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let mut view = ClientsView::default();
        let result = view.dispatch(Intent::SetField {
            field: "fax".into(),
            value: "1".into(),
        });
        assert!(matches!(result, Err(DomainError::UnknownField { .. })));
    }

    #[test]
    fn test_rows_offer_edit_and_delete() {
        let mut view = ClientsView::default();
        let id = save(&mut view, "a@x.com", "Ana").id().unwrap();

        let table = view.table();
        let row = table.row(id).unwrap();
        assert!(row.offers(RowAction::Edit));
        assert!(row.offers(RowAction::Remove));
        assert_eq!(row.cells[1], "a@x.com");
    }
}
