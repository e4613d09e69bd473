use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::{Record, RecordId};

// ============================================================================
// Client Value Objects
// ============================================================================

/// Client email address, the natural key of a client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(pub String);

impl Email {
    pub fn new(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhoneNumber(pub String);

impl PhoneNumber {
    pub fn new(phone: impl Into<String>) -> Self {
        Self(phone.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// Client Record
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: RecordId,
    pub name: String,
    pub email: Email,
    pub phone: PhoneNumber,
    /// Partita IVA
    pub vat: String,
    pub location: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub vat: String,
    pub location: String,
}

impl ClientDraft {
    /// Copy a committed client back into form state for re-editing
    pub fn from_client(client: &Client) -> Self {
        Self {
            name: client.name.clone(),
            email: client.email.as_str().to_string(),
            phone: client.phone.as_str().to_string(),
            vat: client.vat.clone(),
            location: client.location.clone(),
        }
    }
}

impl Record for Client {
    type Draft = ClientDraft;
    const ENTITY: &'static str = "client";

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, created_at: DateTime<Utc>, draft: ClientDraft) -> Self {
        Self {
            id,
            name: draft.name,
            email: Email::new(draft.email),
            phone: PhoneNumber::new(draft.phone),
            vat: draft.vat,
            location: draft.location,
            created_at,
        }
    }

    fn apply_draft(&mut self, draft: ClientDraft) {
        self.name = draft.name;
        self.email = Email::new(draft.email);
        self.phone = PhoneNumber::new(draft.phone);
        self.vat = draft.vat;
        self.location = draft.location;
    }

    fn has_required_fields(draft: &ClientDraft) -> bool {
        !draft.email.is_empty()
    }

    fn natural_key(&self) -> Option<&str> {
        Some(self.email.as_str())
    }

    fn draft_key(draft: &ClientDraft) -> Option<&str> {
        Some(&draft.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_round_trips_through_client() {
        let draft = ClientDraft {
            name: "Ana".into(),
            email: "a@x.com".into(),
            phone: "555".into(),
            vat: "IT123".into(),
            location: "Roma".into(),
        };
        let client = Client::from_draft(RecordId(1), Utc::now(), draft.clone());

        assert_eq!(ClientDraft::from_client(&client), draft);
        assert_eq!(client.natural_key(), Some("a@x.com"));
    }

    #[test]
    fn test_value_objects_serialize_transparently() {
        let client = Client::from_draft(
            RecordId(7),
            Utc::now(),
            ClientDraft {
                email: "a@x.com".into(),
                phone: "555".into(),
                ..Default::default()
            },
        );

        let json = serde_json::to_value(&client).unwrap();
        assert_eq!(json["email"], "a@x.com");
        assert_eq!(json["phone"], "555");
    }
}
