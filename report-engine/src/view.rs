//! FILENAME: report-engine/src/view.rs
//! Dashboard View - Renderable output for the frontend.
//!
//! This module defines what the presentation layer receives from one
//! render: either the filtered rows as display strings, or the KPI
//! summary plus one aggregated series per available chart. It carries
//! values and metadata only; layout and styling stay in the shell.

use serde::{Deserialize, Serialize};

use dataset::{CategoryKey, ColumnId, MetricKey, Schema};

use crate::aggregate::{AggregateSummary, Aggregation};
use crate::filter::FilteredResult;
use crate::group::GroupEntry;

// ============================================================================
// VIEW MODE
// ============================================================================

/// Which view the user toggled: the raw table or the charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewMode {
    Table,
    Graphs,
}

// ============================================================================
// CHART CATALOG
// ============================================================================

/// Order a chart's consumer requires for its series points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeriesOrder {
    /// First-occurrence order of the key in the filtered data.
    Discovery,
    /// Ascending by aggregated value (smallest-to-largest bar).
    ValueAscending,
    /// Descending by aggregated value (largest-to-smallest bar).
    ValueDescending,
}

/// The dashboard's chart catalog.
///
/// Each kind declares the columns it reads; whether a chart is offered
/// is a single schema query at load time, not a per-request check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartKind {
    MonthlySales,
    SalesByProduct,
    SalesByRegion,
    SalesByState,
}

impl ChartKind {
    pub const ALL: [ChartKind; 4] = [
        ChartKind::MonthlySales,
        ChartKind::SalesByProduct,
        ChartKind::SalesByRegion,
        ChartKind::SalesByState,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ChartKind::MonthlySales => "Monthly Sales",
            ChartKind::SalesByProduct => "Sales by Product",
            ChartKind::SalesByRegion => "Sales by Region",
            ChartKind::SalesByState => "Sales by State",
        }
    }

    pub fn group_key(&self) -> CategoryKey {
        match self {
            ChartKind::MonthlySales => CategoryKey::Month,
            ChartKind::SalesByProduct => CategoryKey::Product,
            ChartKind::SalesByRegion => CategoryKey::Region,
            ChartKind::SalesByState => CategoryKey::State,
        }
    }

    /// Every chart in this dashboard aggregates total sales.
    pub fn metric(&self) -> MetricKey {
        MetricKey::TotalSales
    }

    pub fn aggregation(&self) -> Aggregation {
        Aggregation::Sum
    }

    pub fn series_order(&self) -> SeriesOrder {
        match self {
            ChartKind::MonthlySales | ChartKind::SalesByRegion => SeriesOrder::Discovery,
            ChartKind::SalesByProduct => SeriesOrder::ValueAscending,
            ChartKind::SalesByState => SeriesOrder::ValueDescending,
        }
    }

    /// The row attributes this chart reads.
    pub fn required_columns(&self) -> &'static [ColumnId] {
        match self {
            ChartKind::MonthlySales => &[ColumnId::Month, ColumnId::TotalSales],
            ChartKind::SalesByProduct => &[ColumnId::Product, ColumnId::TotalSales],
            ChartKind::SalesByRegion => &[ColumnId::Region, ColumnId::TotalSales],
            ChartKind::SalesByState => &[ColumnId::State, ColumnId::TotalSales],
        }
    }

    pub fn is_available(&self, schema: &Schema) -> bool {
        self.required_columns().iter().all(|&c| schema.contains(c))
    }

    /// The charts a table with this schema can offer, in dashboard order.
    pub fn available(schema: &Schema) -> Vec<ChartKind> {
        Self::ALL
            .iter()
            .copied()
            .filter(|k| k.is_available(schema))
            .collect()
    }
}

// ============================================================================
// VIEW STRUCTS
// ============================================================================

/// One aggregated series, already in the order its chart requires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub kind: ChartKind,
    pub title: String,
    pub points: Vec<GroupEntry>,
}

/// The filtered rows as display strings: every schema column, every
/// matching row, source order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableView {
    pub columns: Vec<ColumnId>,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableView {
    pub fn from_result(result: &FilteredResult) -> Self {
        let columns = result.table().schema().columns().to_vec();
        let headers = columns.iter().map(|c| c.title().to_string()).collect();
        let rows = result
            .rows()
            .map(|row| columns.iter().map(|&c| row.display_value(c)).collect())
            .collect();

        TableView {
            columns,
            headers,
            rows,
        }
    }
}

/// KPI summary plus the available charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphView {
    pub summary: AggregateSummary,
    pub charts: Vec<ChartSeries>,
}

/// The result of one full render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DashboardView {
    /// No rows matched the criteria; the shell shows a warning instead
    /// of a degenerate table or chart.
    NoData,
    Table(TableView),
    Graphs(GraphView),
}
