use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::{Record, RecordId, RecordStore};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: RecordId,
    pub code: String,
    pub name: String,
    pub quantity: u32,
    pub packaging: String,
    /// Unit price in euro
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

impl Product {
    pub fn line_value(&self) -> f64 {
        f64::from(self.quantity) * self.price
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub code: String,
    pub name: String,
    pub quantity: u32,
    pub packaging: String,
    pub price: f64,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            code: String::new(),
            name: String::new(),
            quantity: 1,
            packaging: String::new(),
            price: 0.0,
        }
    }
}

impl Record for Product {
    type Draft = ProductDraft;
    const ENTITY: &'static str = "product";

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, created_at: DateTime<Utc>, draft: ProductDraft) -> Self {
        Self {
            id,
            code: draft.code,
            name: draft.name,
            quantity: draft.quantity,
            packaging: draft.packaging,
            price: draft.price,
            created_at,
        }
    }

    fn apply_draft(&mut self, draft: ProductDraft) {
        self.code = draft.code;
        self.name = draft.name;
        self.quantity = draft.quantity;
        self.packaging = draft.packaging;
        self.price = draft.price;
    }

    fn has_required_fields(draft: &ProductDraft) -> bool {
        !draft.code.is_empty()
    }

    fn natural_key(&self) -> Option<&str> {
        Some(&self.code)
    }

    fn draft_key(draft: &ProductDraft) -> Option<&str> {
        Some(&draft.code)
    }
}

/// Sum of quantity × price over every product in the store
pub fn inventory_value(store: &RecordStore<Product>) -> f64 {
    store.aggregate(0.0, |total, product| total + product.line_value())
}
