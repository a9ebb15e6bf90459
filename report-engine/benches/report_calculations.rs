//! FILENAME: benches/report_calculations.rs
//! Benchmarks for the filter -> aggregate -> view pipeline.

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use dataset::{Row, Table};
use report_engine::{apply, render, FilterCriteria, ViewMode};

const REGIONS: [&str; 4] = ["Northeast", "South", "West", "Midwest"];
const PRODUCTS: [&str; 3] = ["Footwear", "Apparel", "Accessories"];
const STATES: [&str; 5] = ["New York", "Texas", "California", "Ohio", "Florida"];
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

fn build_table(rows: usize) -> Table {
    let data = (0..rows)
        .map(|i| {
            let month = i % 12;
            let day = (i % 28) + 1;
            let sales = 100.0 + (i % 997) as f64;
            let units = 1 + (i % 50) as u32;
            Row {
                invoice_date: NaiveDate::from_ymd_opt(2020, month as u32 + 1, day as u32)
                    .unwrap(),
                region: REGIONS[i % REGIONS.len()].to_string(),
                product: PRODUCTS[i % PRODUCTS.len()].to_string(),
                state: STATES[i % STATES.len()].to_string(),
                total_sales: sales,
                units_sold: units,
                operating_margin: 30.0 + (i % 40) as f64,
                operating_profit: sales * 0.3,
                price_per_unit: sales / units as f64,
                month: Some(MONTHS[month].to_string()),
            }
        })
        .collect();
    Table::new(data)
}

fn bench_filter(c: &mut Criterion) {
    let table = build_table(10_000);
    let criteria = FilterCriteria::new(
        NaiveDate::from_ymd_opt(2020, 3, 1).unwrap(),
        NaiveDate::from_ymd_opt(2020, 9, 30).unwrap(),
    )
    .with_region("West");

    c.bench_function("filter_10k_rows", |b| {
        b.iter(|| apply(black_box(&table), black_box(&criteria)))
    });
}

fn bench_render_graphs(c: &mut Criterion) {
    let table = build_table(10_000);
    let criteria = FilterCriteria::new(
        NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2020, 12, 31).unwrap(),
    );

    c.bench_function("render_graphs_10k_rows", |b| {
        b.iter(|| render(black_box(&table), black_box(&criteria), ViewMode::Graphs))
    });
}

criterion_group!(benches, bench_filter, bench_render_graphs);
criterion_main!(benches);
