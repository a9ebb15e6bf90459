//! FILENAME: dataset/src/schema.rs
//! Schema - which columns a loaded table actually carries.
//!
//! Collaborators query the schema once at load time to decide which
//! charts are available; it is never re-checked per request.

use serde::{Deserialize, Serialize};

use crate::column::ColumnId;

/// The set of columns present in a loaded table.
///
/// The nine required columns are always present; `Month` is present only
/// when every row carries a period label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    columns: Vec<ColumnId>,
}

impl Schema {
    /// Schema with the required columns only.
    pub fn base() -> Self {
        Schema {
            columns: ColumnId::REQUIRED.to_vec(),
        }
    }

    /// Schema with the required columns plus the Month period label.
    pub fn with_month() -> Self {
        let mut columns = ColumnId::REQUIRED.to_vec();
        columns.push(ColumnId::Month);
        Schema { columns }
    }

    /// Whether the table carries this column.
    pub fn contains(&self, column: ColumnId) -> bool {
        self.columns.contains(&column)
    }

    /// The columns, in canonical dataset order.
    pub fn columns(&self) -> &[ColumnId] {
        &self.columns
    }
}
