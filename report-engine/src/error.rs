//! FILENAME: report-engine/src/error.rs

use chrono::NaiveDate;
use dataset::ColumnId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReportError {
    #[error("invalid date range: start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("cannot aggregate an empty filtered result")]
    EmptyResult,

    #[error("column not present in table schema: {}", .0.title())]
    MissingColumn(ColumnId),
}
