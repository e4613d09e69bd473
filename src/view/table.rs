use std::fmt;

use crate::store::RecordId;

/// Per-row buttons a view offers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Toggle,
    Edit,
    Complete,
    Remove,
}

impl RowAction {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Toggle => "toggle",
            Self::Edit => "edit",
            Self::Complete => "complete",
            Self::Remove => "delete",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub id: RecordId,
    pub cells: Vec<String>,
    /// Rendered struck through (completed tasks)
    pub struck: bool,
    pub actions: Vec<RowAction>,
}

impl TableRow {
    pub fn new(id: RecordId, cells: Vec<String>, actions: Vec<RowAction>) -> Self {
        Self {
            id,
            cells,
            struck: false,
            actions,
        }
    }

    pub fn struck(mut self, struck: bool) -> Self {
        self.struck = struck;
        self
    }

    pub fn offers(&self, action: RowAction) -> bool {
        self.actions.contains(&action)
    }
}

/// Rows derived from a store listing, plus an optional footer line
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub title: &'static str,
    pub headers: Vec<&'static str>,
    pub rows: Vec<TableRow>,
    pub footer: Option<String>,
}

impl Table {
    pub fn new(title: &'static str, headers: Vec<&'static str>, rows: Vec<TableRow>) -> Self {
        Self {
            title,
            headers,
            rows,
            footer: None,
        }
    }

    pub fn with_footer(mut self, footer: String) -> Self {
        self.footer = Some(footer);
        self
    }

    pub fn row(&self, id: RecordId) -> Option<&TableRow> {
        self.rows.iter().find(|row| row.id == id)
    }

    fn grid(&self) -> Vec<Vec<String>> {
        let mut grid = Vec::with_capacity(self.rows.len() + 1);

        let mut header = vec!["#".to_string()];
        header.extend(self.headers.iter().map(|h| h.to_string()));
        grid.push(header);

        for row in &self.rows {
            let mut line = vec![row.id.to_string()];
            line.extend(row.cells.iter().map(|cell| {
                if row.struck {
                    format!("~~{cell}~~")
                } else {
                    cell.clone()
                }
            }));
            let actions: Vec<&str> = row.actions.iter().map(RowAction::label).collect();
            line.push(actions.join(" "));
            grid.push(line);
        }

        grid
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;

        let grid = self.grid();
        let columns = grid.iter().map(Vec::len).max().unwrap_or(0);
        let widths: Vec<usize> = (0..columns)
            .map(|col| {
                grid.iter()
                    .filter_map(|line| line.get(col))
                    .map(|cell| cell.chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        for (index, line) in grid.iter().enumerate() {
            let padded: Vec<String> = line
                .iter()
                .zip(&widths)
                .map(|(cell, width)| {
                    let fill = width.saturating_sub(cell.chars().count());
                    format!("{cell}{}", " ".repeat(fill))
                })
                .collect();
            writeln!(f, "{}", padded.join(" | ").trim_end())?;

            if index == 0 {
                let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
                writeln!(f, "{}", rule.join("-+-"))?;
            }
        }

        if let Some(footer) = &self.footer {
            writeln!(f, "{footer}")?;
        }
        Ok(())
    }
}
