use crate::domain::DomainError;
use crate::store::{RecordStore, UpsertOutcome};
use crate::view::{Form, FormField, Intent, RowAction, Table, TableRow, View, ViewKind};

use super::commands::ProductCommand;
use super::model::{inventory_value, Product, ProductDraft};

/// Inventory keyed by product code, with a running stock value
#[derive(Debug, Default)]
pub struct InventoryView {
    store: RecordStore<Product>,
    draft: ProductDraft,
}

impl InventoryView {
    pub fn new(store: RecordStore<Product>) -> Self {
        Self {
            store,
            draft: ProductDraft::default(),
        }
    }

    pub fn store(&self) -> &RecordStore<Product> {
        &self.store
    }

    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    pub fn handle(&mut self, command: ProductCommand) -> Result<(), DomainError> {
        match command {
            ProductCommand::SetCode(code) => self.draft.code = code,
            ProductCommand::SetName(name) => self.draft.name = name,
            ProductCommand::SetQuantity(quantity) => self.draft.quantity = quantity,
            ProductCommand::SetPackaging(packaging) => self.draft.packaging = packaging,
            ProductCommand::SetPrice(price) => self.draft.price = price,
            ProductCommand::Submit => {
                self.submit();
            }
            ProductCommand::Remove(id) => {
                self.store.remove(id);
            }
        }
        Ok(())
    }

    /// Add the draft, or overwrite the product with the same code
    pub fn submit(&mut self) -> UpsertOutcome {
        let outcome = self.store.upsert(self.draft.clone());
        if !outcome.is_rejected() {
            self.draft = ProductDraft::default();
        }
        outcome
    }

    pub fn total(&self) -> f64 {
        inventory_value(&self.store)
    }
}

impl View for InventoryView {
    fn kind(&self) -> ViewKind {
        ViewKind::Inventory
    }

    fn dispatch(&mut self, intent: Intent) -> Result<(), DomainError> {
        let command = ProductCommand::try_from(intent)?;
        self.handle(command)
    }

    fn form(&self) -> Form {
        Form {
            fields: vec![
                FormField::new("code", "Codice Prodotto", self.draft.code.as_str()),
                FormField::new("name", "Nome Prodotto", self.draft.name.as_str()),
                FormField::new("quantity", "Quantità", self.draft.quantity.to_string()),
                FormField::new("packaging", "Confezione", self.draft.packaging.as_str()),
                FormField::new("price", "Prezzo", self.draft.price.to_string()),
            ],
            submit_label: "Aggiungi",
        }
    }

    fn table(&self) -> Table {
        let rows = self
            .store
            .list()
            .iter()
            .map(|product| {
                TableRow::new(
                    product.id,
                    vec![
                        product.code.clone(),
                        product.name.clone(),
                        product.quantity.to_string(),
                        product.packaging.clone(),
                        format!("€{:.2}", product.price),
                    ],
                    vec![RowAction::Remove],
                )
            })
            .collect();

        Table::new(
            "Inventario",
            vec!["Codice", "Nome", "Quantità", "Confezione", "Prezzo", "Azioni"],
            rows,
        )
        .with_footer(format!("Totale: € {:.2}", self.total()))
    }

    fn records_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self.store.list())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
