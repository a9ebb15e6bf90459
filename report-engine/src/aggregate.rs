//! FILENAME: report-engine/src/aggregate.rs
//! Scalar aggregation over a filtered result.
//!
//! The same incremental accumulator serves both the KPI summary and the
//! grouped series. A running sum is sufficient at this dataset's
//! magnitude.

use serde::{Deserialize, Serialize};

use crate::error::ReportError;
use crate::filter::FilteredResult;

/// Supported aggregation functions for grouped values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Aggregation {
    #[default]
    Sum,
    Average,
}

/// Accumulator for computing aggregates incrementally.
#[derive(Debug, Clone, Copy, Default)]
pub struct Accumulator {
    sum: f64,
    count: u64,
}

impl Accumulator {
    pub fn add(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    /// Merges another accumulator into this one.
    pub fn merge(&mut self, other: &Accumulator) {
        self.sum += other.sum;
        self.count += other.count;
    }

    pub fn sum(&self) -> f64 {
        self.sum
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Arithmetic mean; 0.0 when nothing was accumulated.
    pub fn mean(&self) -> f64 {
        if self.count > 0 {
            self.sum / (self.count as f64)
        } else {
            0.0
        }
    }

    /// Computes the final aggregate value.
    pub fn compute(&self, op: Aggregation) -> f64 {
        match op {
            Aggregation::Sum => self.sum(),
            Aggregation::Average => self.mean(),
        }
    }
}

/// Scalar KPIs computed over the full filtered set.
///
/// `operating_margin_mean` and `price_per_unit_mean` are simple means
/// across rows, not sales-weighted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateSummary {
    pub total_sales_sum: f64,
    pub units_sold_sum: u64,
    pub operating_margin_mean: f64,
    pub operating_profit_sum: f64,
    pub price_per_unit_mean: f64,
}

/// Computes the KPI summary over a filtered result.
///
/// The result must be non-empty; callers check emptiness and
/// short-circuit before invoking (the guard exists for misbehaving
/// callers, not as an expected runtime condition).
pub fn summarize(result: &FilteredResult) -> Result<AggregateSummary, ReportError> {
    if result.is_empty() {
        return Err(ReportError::EmptyResult);
    }

    let mut total_sales = Accumulator::default();
    let mut units_sold: u64 = 0;
    let mut operating_margin = Accumulator::default();
    let mut operating_profit = Accumulator::default();
    let mut price_per_unit = Accumulator::default();

    for row in result.rows() {
        total_sales.add(row.total_sales);
        units_sold += row.units_sold as u64;
        operating_margin.add(row.operating_margin);
        operating_profit.add(row.operating_profit);
        price_per_unit.add(row.price_per_unit);
    }

    Ok(AggregateSummary {
        total_sales_sum: total_sales.sum(),
        units_sold_sum: units_sold,
        operating_margin_mean: operating_margin.mean(),
        operating_profit_sum: operating_profit.sum(),
        price_per_unit_mean: price_per_unit.mean(),
    })
}
