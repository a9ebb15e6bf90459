//! FILENAME: persistence/src/csv_writer.rs
//! CSV export of filtered rows.
//!
//! The export contract: a header row from the schema, then every row
//! and every column of the filtered result, in the order given. No
//! reordering, no column pruning.

use std::io::Write;

use csv::Writer;
use dataset::{Row, Schema};

use crate::PersistenceError;

/// Writes the rows as delimited text to `writer`.
pub fn write_csv<'a, W, I>(rows: I, schema: &Schema, writer: W) -> Result<(), PersistenceError>
where
    W: Write,
    I: IntoIterator<Item = &'a Row>,
{
    let mut out = Writer::from_writer(writer);

    out.write_record(schema.columns().iter().map(|c| c.title()))?;
    for row in rows {
        out.write_record(schema.columns().iter().map(|&c| row.display_value(c)))?;
    }

    out.flush()?;
    Ok(())
}

/// The export as an in-memory string (what a download button serves).
pub fn csv_string<'a, I>(rows: I, schema: &Schema) -> Result<String, PersistenceError>
where
    I: IntoIterator<Item = &'a Row>,
{
    let mut buf = Vec::new();
    write_csv(rows, schema, &mut buf)?;
    String::from_utf8(buf).map_err(|e| PersistenceError::InvalidFormat(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use dataset::{Row, Table};

    fn row(day: u32, region: &str, sales: f64) -> Row {
        Row {
            invoice_date: NaiveDate::from_ymd_opt(2020, 1, day).unwrap(),
            region: region.to_string(),
            product: "Footwear".to_string(),
            state: "New York".to_string(),
            total_sales: sales,
            units_sold: 10,
            operating_margin: 35.0,
            operating_profit: sales * 0.35,
            price_per_unit: sales / 10.0,
            month: Some("Jan".to_string()),
        }
    }

    #[test]
    fn export_reproduces_rows_and_columns_in_order() {
        let table = Table::new(vec![row(5, "North", 1000.0), row(9, "South", 800.0)]);

        let text = csv_string(table.rows().iter(), table.schema()).unwrap();
        let mut reader = csv::Reader::from_reader(text.as_bytes());

        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.get(0), Some("Invoice Date"));
        assert_eq!(headers.get(9), Some("Month"));

        let records: Vec<csv::StringRecord> =
            reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get(0), Some("2020-01-05"));
        assert_eq!(records[0].get(1), Some("North"));
        assert_eq!(records[1].get(0), Some("2020-01-09"));
        assert_eq!(records[1].get(1), Some("South"));
    }

    #[test]
    fn export_without_month_column_has_nine_fields() {
        let mut no_month = row(5, "North", 1000.0);
        no_month.month = None;
        let table = Table::new(vec![no_month]);

        let text = csv_string(table.rows().iter(), table.schema()).unwrap();
        let mut reader = csv::Reader::from_reader(text.as_bytes());
        assert_eq!(reader.headers().unwrap().len(), 9);
    }
}
