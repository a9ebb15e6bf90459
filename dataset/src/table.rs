//! FILENAME: dataset/src/table.rs
//! Table - the immutable in-memory dataset.
//!
//! Loaded once, never mutated afterwards. Everything downstream
//! (filtering, aggregation, views) is a derived copy, so the table can be
//! shared read-only across every request without locking.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::row::Row;
use crate::schema::Schema;

/// The full ordered collection of transactions plus its schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    rows: Vec<Row>,
    schema: Schema,
}

impl Table {
    /// Builds a table from loaded rows, deriving the schema.
    ///
    /// `Month` joins the schema only when every row carries a label; a
    /// partially populated period column is treated as absent.
    pub fn new(rows: Vec<Row>) -> Self {
        let schema = if !rows.is_empty() && rows.iter().all(|r| r.month.is_some()) {
            Schema::with_month()
        } else {
            Schema::base()
        };
        Table { rows, schema }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn get(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Earliest and latest invoice date, for defaulting the date widget.
    /// `None` for an empty table.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.rows.first()?.invoice_date;
        let (min, max) = self.rows.iter().fold((first, first), |(lo, hi), r| {
            (lo.min(r.invoice_date), hi.max(r.invoice_date))
        });
        Some((min, max))
    }

    /// Sorted unique region values, for the region select box.
    pub fn distinct_regions(&self) -> Vec<String> {
        Self::distinct(self.rows.iter().map(|r| r.region.as_str()))
    }

    /// Sorted unique product values, for the product select box.
    pub fn distinct_products(&self) -> Vec<String> {
        Self::distinct(self.rows.iter().map(|r| r.product.as_str()))
    }

    fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
        let mut out: Vec<String> = values.map(|v| v.to_string()).collect();
        out.sort();
        out.dedup();
        out
    }
}
