//! FILENAME: report-engine/src/filter.rs
//! Filter Engine - narrows the table to the rows matching the criteria.
//!
//! A `FilteredResult` stores source row indices rather than cloned rows.
//! The table is immutable for the process lifetime, so a borrowed view
//! serves everything downstream; source order is preserved (stable
//! filter, not a sort).

use dataset::{Row, Table};

use crate::criteria::FilterCriteria;
use crate::error::ReportError;

/// The subset of a table satisfying some criteria, in source order.
/// Ephemeral: rebuilt from scratch on every interaction and discarded
/// after rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredResult<'t> {
    table: &'t Table,
    indices: Vec<u32>,
}

impl<'t> FilteredResult<'t> {
    /// Iterates the matching rows in source order.
    pub fn rows(&self) -> impl Iterator<Item = &'t Row> + '_ {
        self.indices
            .iter()
            .filter_map(move |&i| self.table.get(i as usize))
    }

    /// The source table this result was filtered from.
    pub fn table(&self) -> &'t Table {
        self.table
    }

    /// Source row indices of the matching rows, ascending.
    pub fn source_indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Materializes the subset as its own table (rows cloned).
    pub fn to_table(&self) -> Table {
        Table::new(self.rows().cloned().collect())
    }
}

/// Applies the criteria to the table.
///
/// All active predicates are AND-composed; the date comparison is
/// inclusive on both ends. An empty result is a valid result, not an
/// error. Pure function of its two inputs.
pub fn apply<'t>(
    table: &'t Table,
    criteria: &FilterCriteria,
) -> Result<FilteredResult<'t>, ReportError> {
    criteria.validate()?;

    let mut indices = Vec::new();
    for (i, row) in table.rows().iter().enumerate() {
        if row.invoice_date < criteria.start_date || row.invoice_date > criteria.end_date {
            continue;
        }
        if !criteria.region.matches(&row.region) {
            continue;
        }
        if !criteria.product.matches(&row.product) {
            continue;
        }
        indices.push(i as u32);
    }

    log::debug!(
        "filter matched {} of {} rows ({} to {})",
        indices.len(),
        table.len(),
        criteria.start_date,
        criteria.end_date
    );

    Ok(FilteredResult { table, indices })
}
