//! FILENAME: report-engine/src/group.rs
//! GroupBy - partition rows by a category value, reduce each partition.
//!
//! Groups are discovered in first-occurrence order of the key in the
//! filtered data, which makes the natural output order deterministic.
//! Value sorts are stable, so ties keep that discovery order.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use dataset::{CategoryKey, MetricKey};

use crate::aggregate::{Accumulator, Aggregation};
use crate::error::ReportError;
use crate::filter::FilteredResult;

/// One aggregated point of a grouped series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupEntry {
    pub label: String,
    pub value: f64,
}

/// Partitions the rows by the exact value of `key`, then reduces each
/// partition's `metric` with `op`.
///
/// Every row lands in exactly one group. Grouping by a column absent
/// from the table schema fails with `MissingColumn`; it is never
/// silently skipped.
pub fn group_by(
    result: &FilteredResult,
    key: CategoryKey,
    metric: MetricKey,
    op: Aggregation,
) -> Result<Vec<GroupEntry>, ReportError> {
    if result.is_empty() {
        return Err(ReportError::EmptyResult);
    }
    if !result.table().schema().contains(key.column()) {
        return Err(ReportError::MissingColumn(key.column()));
    }

    // Label -> slot in `groups`; the Vec keeps first-occurrence order.
    let mut slots: FxHashMap<String, usize> = FxHashMap::default();
    let mut groups: Vec<(String, Accumulator)> = Vec::new();

    for row in result.rows() {
        let label = row
            .category_label(key)
            .ok_or(ReportError::MissingColumn(key.column()))?;

        let slot = match slots.get(label) {
            Some(&slot) => slot,
            None => {
                let slot = groups.len();
                groups.push((label.to_string(), Accumulator::default()));
                slots.insert(label.to_string(), slot);
                slot
            }
        };
        groups[slot].1.add(row.metric_value(metric));
    }

    Ok(groups
        .into_iter()
        .map(|(label, acc)| GroupEntry {
            label,
            value: acc.compute(op),
        })
        .collect())
}

/// Sorts entries ascending by aggregated value (smallest bar first).
/// The sort is stable: equal values keep first-occurrence order.
pub fn sort_ascending(entries: &mut [GroupEntry]) {
    entries.sort_by(|a, b| a.value.partial_cmp(&b.value).unwrap_or(std::cmp::Ordering::Equal));
}

/// Sorts entries descending by aggregated value (largest bar first).
/// The sort is stable: equal values keep first-occurrence order.
pub fn sort_descending(entries: &mut [GroupEntry]) {
    entries.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(std::cmp::Ordering::Equal));
}
