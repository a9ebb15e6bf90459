//! FILENAME: dataset/src/column.rs
//! PURPOSE: Column identifiers for the sales dataset.
//! CONTEXT: Every column is named once here so the loader, the report
//! engine, and the export agree on headers and availability.

use serde::{Deserialize, Serialize};

/// Identifies a column of the sales dataset.
///
/// The first nine columns are required in every source workbook; `Month`
/// is an optional period label some exports carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnId {
    InvoiceDate,
    Region,
    Product,
    State,
    TotalSales,
    UnitsSold,
    OperatingMargin,
    OperatingProfit,
    PricePerUnit,
    Month,
}

impl ColumnId {
    /// Canonical header title as it appears in the source workbook.
    pub fn title(&self) -> &'static str {
        match self {
            ColumnId::InvoiceDate => "Invoice Date",
            ColumnId::Region => "Region",
            ColumnId::Product => "Product",
            ColumnId::State => "State",
            ColumnId::TotalSales => "Total Sales",
            ColumnId::UnitsSold => "Units Sold",
            ColumnId::OperatingMargin => "Operating Margin",
            ColumnId::OperatingProfit => "Operating Profit",
            ColumnId::PricePerUnit => "Price per Unit",
            ColumnId::Month => "Month",
        }
    }

    /// Resolves a header title back to a column.
    /// Matching ignores surrounding whitespace and letter case.
    pub fn from_title(title: &str) -> Option<ColumnId> {
        let normalized = title.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.title().eq_ignore_ascii_case(normalized))
    }

    /// All columns, in canonical dataset order.
    pub const ALL: [ColumnId; 10] = [
        ColumnId::InvoiceDate,
        ColumnId::Region,
        ColumnId::Product,
        ColumnId::State,
        ColumnId::TotalSales,
        ColumnId::UnitsSold,
        ColumnId::OperatingMargin,
        ColumnId::OperatingProfit,
        ColumnId::PricePerUnit,
        ColumnId::Month,
    ];

    /// The columns every source workbook must provide.
    pub const REQUIRED: [ColumnId; 9] = [
        ColumnId::InvoiceDate,
        ColumnId::Region,
        ColumnId::Product,
        ColumnId::State,
        ColumnId::TotalSales,
        ColumnId::UnitsSold,
        ColumnId::OperatingMargin,
        ColumnId::OperatingProfit,
        ColumnId::PricePerUnit,
    ];
}

// ============================================================================
// GROUPING AND METRIC KEYS
// ============================================================================

/// A categorical column rows can be grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryKey {
    Month,
    Product,
    Region,
    State,
}

impl CategoryKey {
    /// The dataset column this key reads.
    pub fn column(&self) -> ColumnId {
        match self {
            CategoryKey::Month => ColumnId::Month,
            CategoryKey::Product => ColumnId::Product,
            CategoryKey::Region => ColumnId::Region,
            CategoryKey::State => ColumnId::State,
        }
    }
}

/// A numeric column aggregates can be computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricKey {
    TotalSales,
    UnitsSold,
    OperatingMargin,
    OperatingProfit,
    PricePerUnit,
}

impl MetricKey {
    /// The dataset column this metric reads.
    pub fn column(&self) -> ColumnId {
        match self {
            MetricKey::TotalSales => ColumnId::TotalSales,
            MetricKey::UnitsSold => ColumnId::UnitsSold,
            MetricKey::OperatingMargin => ColumnId::OperatingMargin,
            MetricKey::OperatingProfit => ColumnId::OperatingProfit,
            MetricKey::PricePerUnit => ColumnId::PricePerUnit,
        }
    }
}
