use std::str::FromStr;

use crate::domain::DomainError;
use crate::store::RecordId;
use crate::view::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientField {
    Name,
    Email,
    Phone,
    Vat,
    Location,
}

impl FromStr for ClientField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "phone" => Ok(Self::Phone),
            "vat" => Ok(Self::Vat),
            "location" => Ok(Self::Location),
            other => Err(DomainError::UnknownField {
                view: "clients",
                field: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClientCommand {
    Set(ClientField, String),
    Submit,
    Edit(RecordId),
    Remove(RecordId),
}

impl TryFrom<Intent> for ClientCommand {
    type Error = DomainError;

    fn try_from(intent: Intent) -> Result<Self, Self::Error> {
        match intent {
            Intent::SetField { field, value } => Ok(Self::Set(field.parse()?, value)),
            Intent::Submit => Ok(Self::Submit),
            Intent::Edit(id) => Ok(Self::Edit(id)),
            Intent::Remove(id) => Ok(Self::Remove(id)),
            other => Err(DomainError::Unsupported {
                view: "clients",
                action: other.action(),
            }),
        }
    }
}
