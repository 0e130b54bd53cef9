//! The content store: header cells and body rows, in insertion order.

use crate::LayoutError;
use serde::{Deserialize, Deserializer, Serialize};

/// A single header or body cell.
///
/// `content` may carry inline markup; it is stripped before measuring and
/// emitted verbatim when rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub content: String,
    pub class: String,
}

impl Cell {
    pub fn new(content: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            class: class.into(),
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::new(content, "")
    }
}

impl From<&str> for Cell {
    fn from(content: &str) -> Self {
        Cell::text(content)
    }
}

impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum CellDef {
            Text(String),
            Styled {
                content: String,
                #[serde(default)]
                class: String,
            },
        }

        Ok(match CellDef::deserialize(deserializer)? {
            CellDef::Text(content) => Cell::text(content),
            CellDef::Styled { content, class } => Cell::new(content, class),
        })
    }
}

pub type Row = Vec<Cell>;

/// Header and body rows of one table.
///
/// Built incrementally: add header cells, then for each body row call
/// `start_data_row`, add its cells, and `end_data_row`. The header defines
/// the column count; `validate` checks every body row against it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableContent {
    header: Row,
    body: Vec<Row>,
    current_row: Row,
}

impl TableContent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_header_cell(&mut self, content: impl Into<String>, class: impl Into<String>) {
        self.header.push(Cell::new(content, class));
    }

    /// Discards any cells added since the last `end_data_row`.
    pub fn start_data_row(&mut self) {
        self.current_row.clear();
    }

    pub fn add_data_row_cell(&mut self, content: impl Into<String>, class: impl Into<String>) {
        self.current_row.push(Cell::new(content, class));
    }

    pub fn end_data_row(&mut self) {
        let row = std::mem::take(&mut self.current_row);
        self.body.push(row);
    }

    /// Appends a complete body row.
    pub fn push_row(&mut self, cells: impl IntoIterator<Item = Cell>) {
        self.body.push(cells.into_iter().collect());
    }

    /// Clears header, body, and any half-built row.
    pub fn reset_data(&mut self) {
        self.header.clear();
        self.body.clear();
        self.current_row.clear();
    }

    pub fn header(&self) -> &[Cell] {
        &self.header
    }

    pub fn body(&self) -> &[Row] {
        &self.body
    }

    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// The header followed by every body row.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        std::iter::once(self.header.as_slice()).chain(self.body.iter().map(Vec::as_slice))
    }

    /// Checks that there is at least one column and that every body row has one cell per column.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let expected = self.column_count();
        if expected == 0 {
            return Err(LayoutError::NoColumns);
        }
        if let Some((row, cells)) = self
            .body
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != expected)
        {
            return Err(LayoutError::RowLengthMismatch {
                row,
                expected,
                found: cells.len(),
            });
        }
        Ok(())
    }
}
