//! FILENAME: tests/common/mod.rs
//! Fixtures for report engine integration tests.

use chrono::NaiveDate;
use dataset::{Row, Table};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Builds one transaction with the numeric fields derived from sales.
pub fn row(
    d: NaiveDate,
    region: &str,
    product: &str,
    state: &str,
    sales: f64,
    units: u32,
    month: Option<&str>,
) -> Row {
    Row {
        invoice_date: d,
        region: region.to_string(),
        product: product.to_string(),
        state: state.to_string(),
        total_sales: sales,
        units_sold: units,
        operating_margin: 35.0,
        operating_profit: sales * 0.35,
        price_per_unit: if units > 0 { sales / units as f64 } else { 0.0 },
        month: month.map(|m| m.to_string()),
    }
}

/// Sample sales data for dashboard testing: Q1 2020 across two regions,
/// two products, and four states, with month labels.
pub struct SalesFixture;

impl SalesFixture {
    pub fn rows() -> Vec<Row> {
        vec![
            row(date(2020, 1, 5), "North", "Footwear", "New York", 1000.0, 100, Some("Jan")),
            row(date(2020, 1, 18), "South", "Apparel", "Texas", 800.0, 80, Some("Jan")),
            row(date(2020, 2, 2), "North", "Apparel", "Maine", 600.0, 60, Some("Feb")),
            row(date(2020, 2, 14), "North", "Footwear", "New York", 1200.0, 120, Some("Feb")),
            row(date(2020, 2, 27), "South", "Footwear", "Florida", 900.0, 90, Some("Feb")),
            row(date(2020, 3, 9), "South", "Apparel", "Texas", 700.0, 70, Some("Mar")),
            row(date(2020, 3, 21), "North", "Apparel", "Vermont", 500.0, 50, Some("Mar")),
            row(date(2020, 3, 30), "South", "Footwear", "Florida", 1100.0, 110, Some("Mar")),
        ]
    }

    pub fn table() -> Table {
        Table::new(Self::rows())
    }

    pub fn table_without_months() -> Table {
        let rows = Self::rows()
            .into_iter()
            .map(|mut r| {
                r.month = None;
                r
            })
            .collect();
        Table::new(rows)
    }
}
