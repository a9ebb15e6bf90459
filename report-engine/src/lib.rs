//! FILENAME: report-engine/src/lib.rs
//! Report engine for Salesboard.
//!
//! This crate turns the immutable sales table into the views the
//! dashboard shows: a filtered table or a set of aggregate charts and
//! summary metrics. It depends on `dataset` only for shared types.
//!
//! Layers:
//! - `criteria`: Serializable filter configuration (what the user asked for)
//! - `filter`: Filter engine (which rows are in scope)
//! - `aggregate` / `group`: Aggregator (scalar KPIs and grouped series)
//! - `view`: Renderable output for the frontend (what we display)
//! - `engine`: Render pipeline (one interaction, start to finish)

pub mod aggregate;
pub mod criteria;
pub mod engine;
pub mod error;
pub mod filter;
pub mod group;
pub mod view;

pub use aggregate::{summarize, Accumulator, AggregateSummary, Aggregation};
pub use criteria::{CategoryFilter, FilterCriteria};
pub use engine::{build_graphs, render};
pub use error::ReportError;
pub use filter::{apply, FilteredResult};
pub use group::{group_by, sort_ascending, sort_descending, GroupEntry};
pub use view::{
    ChartKind, ChartSeries, DashboardView, GraphView, SeriesOrder, TableView, ViewMode,
};
