use crate::domain::DomainError;
use crate::store::RecordId;
use crate::view::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum TaskCommand {
    SetTitle(String),
    Submit,
    Toggle(RecordId),
    Remove(RecordId),
}

impl TryFrom<Intent> for TaskCommand {
    type Error = DomainError;

    fn try_from(intent: Intent) -> Result<Self, Self::Error> {
        match intent {
            Intent::SetField { field, value } if field == "title" => Ok(Self::SetTitle(value)),
            Intent::SetField { field, .. } => Err(DomainError::UnknownField { view: "tasks", field }),
            Intent::Submit => Ok(Self::Submit),
            Intent::Toggle(id) => Ok(Self::Toggle(id)),
            Intent::Remove(id) => Ok(Self::Remove(id)),
            other => Err(DomainError::Unsupported {
                view: "tasks",
                action: other.action(),
            }),
        }
    }
}
