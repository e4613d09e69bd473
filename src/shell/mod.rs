pub mod commands;

use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::app::Workspace;
use crate::store::RecordId;
use crate::view::Intent;

pub use commands::{raw_tail, ShellCommand, ShellLine};

/// Result of one shell line
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Output(String),
    Quit,
}

/// Interactive front end for a [`Workspace`]
pub struct Shell {
    workspace: Workspace,
}

impl Shell {
    pub fn new(workspace: Workspace) -> Self {
        Self { workspace }
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn run(mut self) -> anyhow::Result<()> {
        let mut editor = DefaultEditor::new()?;
        println!("{}\n", self.workspace.nav_line());
        print!("{}", self.workspace.view().render());

        loop {
            let prompt = format!("{}> ", self.workspace.active());
            match editor.readline(&prompt) {
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    editor.add_history_entry(line.as_str())?;

                    match self.execute(&line) {
                        Ok(Reply::Output(text)) => print!("{text}"),
                        Ok(Reply::Quit) => break,
                        Err(err) => {
                            tracing::debug!(error = %err, line = %line, "Command refused");
                            println!("errore: {err}");
                        }
                    }
                }
                Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
                Err(err) => return Err(err.into()),
            }
        }

        tracing::info!("Shell closed");
        Ok(())
    }

    /// Parse and apply one line.
    ///
    /// Free-text values of `set` and `notes` are taken from the raw line.
    pub fn execute(&mut self, line: &str) -> anyhow::Result<Reply> {
        let parsed = match ShellLine::try_parse_from(line.split_whitespace()) {
            Ok(parsed) => parsed,
            Err(err) => return Ok(Reply::Output(err.render().to_string())),
        };

        let intent = match parsed.command {
            ShellCommand::Go { view } => {
                self.workspace.navigate_to(&view)?;
                let text = format!("{}\n\n{}", self.workspace.nav_line(), self.workspace.view().render());
                return Ok(Reply::Output(text));
            }
            ShellCommand::Nav => return Ok(Reply::Output(format!("{}\n", self.workspace.nav_line()))),
            ShellCommand::Show => return Ok(Reply::Output(self.workspace.view().render())),
            ShellCommand::Json => {
                let records = self.workspace.view().records_json()?;
                return Ok(Reply::Output(format!("{}\n", serde_json::to_string_pretty(&records)?)));
            }
            ShellCommand::Metrics => return Ok(Reply::Output(self.workspace.metrics().render()?)),
            ShellCommand::Quit => return Ok(Reply::Quit),

            ShellCommand::Set { field, .. } => Intent::SetField {
                field,
                value: raw_tail(line, 2).to_string(),
            },
            ShellCommand::Submit => Intent::Submit,
            ShellCommand::Edit { id } => Intent::Edit(RecordId(id)),
            ShellCommand::Toggle { id } => Intent::Toggle(RecordId(id)),
            ShellCommand::Complete { id } => Intent::Complete(RecordId(id)),
            ShellCommand::Notes { .. } => Intent::SetNotes(raw_tail(line, 1).to_string()),
            ShellCommand::Confirm => Intent::ConfirmNotes,
            ShellCommand::Cancel => Intent::CancelNotes,
            ShellCommand::Delete { id } => Intent::Remove(RecordId(id)),
            ShellCommand::Calendar => Intent::ToggleCalendar,
        };

        self.workspace.dispatch(intent)?;
        Ok(Reply::Output(self.workspace.view().render()))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
