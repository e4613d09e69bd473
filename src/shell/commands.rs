use clap::{Parser, Subcommand};

/// One line typed at the prompt
#[derive(Debug, Parser)]
#[command(multicall = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Debug, Subcommand)]
pub enum ShellCommand {
    /// Open a view: tasks, clients, inventory, visits
    Go { view: String },
    /// Show the navigation menu
    Nav,
    /// Render the active view
    Show,
    /// Edit a form field of the active view
    Set {
        field: String,
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },
    /// Submit the form
    Submit,
    /// Load a client into the form
    Edit { id: u64 },
    /// Mark a task done or not done
    Toggle { id: u64 },
    /// Start completing a visit
    Complete { id: u64 },
    /// Type the notes of the visit being completed
    Notes {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Save the visit notes
    Confirm,
    /// Close the visit notes without saving
    Cancel,
    /// Delete a row
    Delete { id: u64 },
    /// Show or hide the visits calendar
    Calendar,
    /// Print the active view's records as JSON
    Json,
    /// Print Prometheus metrics
    Metrics,
    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

/// Text of `line` after its first `skip` words, verbatim.
///
/// Only the single separator after the last skipped word is dropped, so
/// padding and inner runs of whitespace in free-text values survive.
pub fn raw_tail(line: &str, skip: usize) -> &str {
    let mut rest = line;
    for _ in 0..skip {
        rest = rest.trim_start();
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        rest = &rest[end..];
    }
    let mut chars = rest.chars();
    match chars.next() {
        Some(separator) if separator.is_whitespace() => chars.as_str(),
        _ => rest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> ShellCommand {
        ShellLine::try_parse_from(line.split_whitespace()).unwrap().command
    }

    #[test]
    fn test_parse_set_with_spaces() {
        match parse("set location San Donato Milanese") {
            ShellCommand::Set { field, value } => {
                assert_eq!(field, "location");
                assert_eq!(value.join(" "), "San Donato Milanese");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_parse_negative_value() {
        match parse("set price -3") {
            ShellCommand::Set { value, .. } => assert_eq!(value, vec!["-3"]),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_parse_ids() {
        assert!(matches!(parse("delete 4"), ShellCommand::Delete { id: 4 }));
        assert!(ShellLine::try_parse_from(["delete", "x"]).is_err());
    }

    #[test]
    fn test_exit_alias() {
        assert!(matches!(parse("exit"), ShellCommand::Quit));
    }

    #[test]
    fn test_raw_tail_keeps_whitespace() {
        assert_eq!(raw_tail("set name Ana    Maria", 2), "Ana    Maria");
        assert_eq!(raw_tail("set email a@x.com ", 2), "a@x.com ");
        assert_eq!(raw_tail("  set   name  Ana", 2), " Ana");
        assert_eq!(raw_tail("notes tutto  ok", 1), "tutto  ok");
        assert_eq!(raw_tail("set title", 2), "");
    }
}
