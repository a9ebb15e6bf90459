//! FILENAME: report-engine/src/criteria.rs
//! Filter Criteria - The serializable filter configuration.
//!
//! This module contains the types that DESCRIBE a filter request.
//! These structures are designed to be:
//! - Serializable (sent over the UI bridge)
//! - Immutable snapshots of user intent, rebuilt on every interaction

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ReportError;

/// A categorical restriction: a concrete value, or the "All" sentinel
/// meaning no restriction (the predicate is skipped entirely).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }

    /// Exact-match equality against the category value; `All` matches
    /// everything.
    pub fn matches(&self, value: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == value,
        }
    }
}

/// User-specified constraints narrowing the table: an inclusive date
/// range plus optional region and product restrictions, AND-composed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub region: CategoryFilter,
    pub product: CategoryFilter,
}

impl FilterCriteria {
    /// Creates criteria for a date range with no category restrictions.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        FilterCriteria {
            start_date,
            end_date,
            region: CategoryFilter::All,
            product: CategoryFilter::All,
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = CategoryFilter::Only(region.into());
        self
    }

    pub fn with_product(mut self, product: impl Into<String>) -> Self {
        self.product = CategoryFilter::Only(product.into());
        self
    }

    /// Rejects an inverted date range. Bounds are never silently swapped;
    /// the caller re-prompts for valid input.
    pub fn validate(&self) -> Result<(), ReportError> {
        if self.start_date > self.end_date {
            return Err(ReportError::InvalidRange {
                start: self.start_date,
                end: self.end_date,
            });
        }
        Ok(())
    }
}
