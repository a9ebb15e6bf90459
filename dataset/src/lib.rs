//! FILENAME: dataset/src/lib.rs
//! PURPOSE: Main library entry point for the sales dataset model.
//! CONTEXT: Re-exports the shared types used by every other crate.

pub mod column;
pub mod row;
pub mod schema;
pub mod table;

// Re-export commonly used types at the crate root
pub use column::{CategoryKey, ColumnId, MetricKey};
pub use row::Row;
pub use schema::Schema;
pub use table::Table;
