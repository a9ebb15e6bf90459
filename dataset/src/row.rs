//! FILENAME: dataset/src/row.rs
//! PURPOSE: Defines the fundamental data structure for a single transaction.
//! CONTEXT: This file contains the `Row` struct. All fields are already
//! typed; the loader owns every coercion, so nothing downstream parses.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::column::{CategoryKey, ColumnId, MetricKey};

/// One sales transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub invoice_date: NaiveDate,
    pub region: String,
    pub product: String,
    pub state: String,
    pub total_sales: f64,
    pub units_sold: u32,
    /// Percentage points, not bounded to [0, 1] in source data.
    pub operating_margin: f64,
    /// May be negative.
    pub operating_profit: f64,
    pub price_per_unit: f64,
    /// Opaque period label; present only when the source carried a
    /// Month column.
    pub month: Option<String>,
}

impl Row {
    /// Returns the category label for a grouping key, or `None` when the
    /// row does not carry that column (only possible for `Month`).
    pub fn category_label(&self, key: CategoryKey) -> Option<&str> {
        match key {
            CategoryKey::Month => self.month.as_deref(),
            CategoryKey::Product => Some(&self.product),
            CategoryKey::Region => Some(&self.region),
            CategoryKey::State => Some(&self.state),
        }
    }

    /// Returns the numeric value for a metric key.
    pub fn metric_value(&self, metric: MetricKey) -> f64 {
        match metric {
            MetricKey::TotalSales => self.total_sales,
            MetricKey::UnitsSold => self.units_sold as f64,
            MetricKey::OperatingMargin => self.operating_margin,
            MetricKey::OperatingProfit => self.operating_profit,
            MetricKey::PricePerUnit => self.price_per_unit,
        }
    }

    /// Returns the display value of one column as a String.
    /// This is used by the table view and anything else that needs to
    /// show a row's value as text.
    pub fn display_value(&self, column: ColumnId) -> String {
        match column {
            ColumnId::InvoiceDate => self.invoice_date.format("%Y-%m-%d").to_string(),
            ColumnId::Region => self.region.clone(),
            ColumnId::Product => self.product.clone(),
            ColumnId::State => self.state.clone(),
            ColumnId::TotalSales => format_number(self.total_sales),
            ColumnId::UnitsSold => format!("{}", self.units_sold),
            ColumnId::OperatingMargin => format_number(self.operating_margin),
            ColumnId::OperatingProfit => format_number(self.operating_profit),
            ColumnId::PricePerUnit => format_number(self.price_per_unit),
            ColumnId::Month => self.month.clone().unwrap_or_default(),
        }
    }
}

/// Format without unnecessary decimal places.
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{:.0}", n)
    } else {
        format!("{}", n)
    }
}
