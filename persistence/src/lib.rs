//! FILENAME: persistence/src/lib.rs
//! Salesboard Persistence Module
//!
//! Loads the sales dataset from XLSX and exports filtered rows as CSV.
//! The loader owns all type coercion: dates are parsed, numbers are
//! numbers, and everything downstream works with typed rows.

mod csv_writer;
mod error;
mod xlsx_reader;

pub use csv_writer::{csv_string, write_csv};
pub use error::PersistenceError;
pub use xlsx_reader::{load_xlsx, load_xlsx_with_options};

use serde::{Deserialize, Serialize};

/// Options for loading a workbook.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadOptions {
    /// Sheet to read; the first sheet when unset.
    #[serde(default)]
    pub sheet: Option<String>,
}
