//! FILENAME: report-engine/src/engine.rs
//! Render pipeline - one user interaction, start to finish.
//!
//! The source of truth for a dashboard render is a pure function of
//! (table, criteria, mode): filter, then aggregate, then assemble the
//! view. The shell re-invokes it on every interaction; nothing is
//! cached between calls.

use dataset::Table;

use crate::aggregate::summarize;
use crate::criteria::FilterCriteria;
use crate::error::ReportError;
use crate::filter::{apply, FilteredResult};
use crate::group::{group_by, sort_ascending, sort_descending};
use crate::view::{ChartKind, ChartSeries, DashboardView, GraphView, SeriesOrder, TableView, ViewMode};

/// Renders one dashboard view.
///
/// Empty filtered data short-circuits to `DashboardView::NoData` before
/// any aggregation runs; an inverted date range propagates as
/// `InvalidRange`.
pub fn render(
    table: &Table,
    criteria: &FilterCriteria,
    mode: ViewMode,
) -> Result<DashboardView, ReportError> {
    let filtered = apply(table, criteria)?;

    if filtered.is_empty() {
        log::debug!("render: no rows matched, returning NoData");
        return Ok(DashboardView::NoData);
    }

    match mode {
        ViewMode::Table => Ok(DashboardView::Table(TableView::from_result(&filtered))),
        ViewMode::Graphs => Ok(DashboardView::Graphs(build_graphs(&filtered)?)),
    }
}

/// Builds the KPI summary and one series per available chart, each
/// series in the order its chart requires.
pub fn build_graphs(result: &FilteredResult) -> Result<GraphView, ReportError> {
    let summary = summarize(result)?;

    let available = ChartKind::available(result.table().schema());
    let mut charts = Vec::with_capacity(available.len());

    for kind in available {
        let mut points = group_by(result, kind.group_key(), kind.metric(), kind.aggregation())?;

        match kind.series_order() {
            SeriesOrder::Discovery => {}
            SeriesOrder::ValueAscending => sort_ascending(&mut points),
            SeriesOrder::ValueDescending => sort_descending(&mut points),
        }

        charts.push(ChartSeries {
            kind,
            title: kind.title().to_string(),
            points,
        });
    }

    Ok(GraphView { summary, charts })
}
