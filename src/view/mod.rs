// ============================================================================
// View Layer - contract between a record store and its presentation
// ============================================================================
//
// A view binding owns one store and one draft. The host forwards discrete
// intents to it and renders the form/table view models it derives; nothing
// is cached between renders.
//
// ============================================================================

pub mod form;
pub mod table;

use std::fmt;
use std::str::FromStr;

use crate::domain::DomainError;
use crate::store::RecordId;

pub use form::{Form, FormField};
pub use table::{RowAction, Table, TableRow};

/// The four views the workspace can mount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    Tasks,
    Clients,
    Inventory,
    Visits,
}

impl ViewKind {
    pub const ALL: [ViewKind; 4] = [Self::Tasks, Self::Clients, Self::Inventory, Self::Visits];

    pub fn path(&self) -> &'static str {
        match self {
            Self::Tasks => "tasks",
            Self::Clients => "clients",
            Self::Inventory => "inventory",
            Self::Visits => "visits",
        }
    }

    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Tasks => "Tasks",
            Self::Clients => "Clienti",
            Self::Inventory => "Inventario",
            Self::Visits => "Visite Clienti",
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for ViewKind {
    type Err = DomainError;

    /// Accepts `tasks` or `/tasks`; the root path lands on tasks.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let path = s.trim().trim_start_matches('/');
        if path.is_empty() {
            return Ok(Self::Tasks);
        }
        Self::ALL
            .into_iter()
            .find(|kind| kind.path() == path)
            .ok_or_else(|| DomainError::UnknownView(s.to_string()))
    }
}

/// A discrete user action forwarded by the host
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    SetField { field: String, value: String },
    Submit,
    Edit(RecordId),
    Toggle(RecordId),
    Complete(RecordId),
    SetNotes(String),
    ConfirmNotes,
    CancelNotes,
    Remove(RecordId),
    ToggleCalendar,
}

impl Intent {
    pub fn action(&self) -> &'static str {
        match self {
            Self::SetField { .. } => "set",
            Self::Submit => "submit",
            Self::Edit(_) => "edit",
            Self::Toggle(_) => "toggle",
            Self::Complete(_) => "complete",
            Self::SetNotes(_) => "notes",
            Self::ConfirmNotes => "confirm",
            Self::CancelNotes => "cancel",
            Self::Remove(_) => "delete",
            Self::ToggleCalendar => "calendar",
        }
    }
}

/// One record store bound to a form and a table
pub trait View {
    fn kind(&self) -> ViewKind;

    fn dispatch(&mut self, intent: Intent) -> Result<(), DomainError>;

    fn form(&self) -> Form;

    fn table(&self) -> Table;

    /// Committed records as JSON, in list order
    fn records_json(&self) -> serde_json::Result<serde_json::Value>;

    /// Full text rendering: form, then table
    fn render(&self) -> String {
        format!("{}\n{}", self.form(), self.table())
    }
}
