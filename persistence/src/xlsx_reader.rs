// FILENAME: persistence/src/xlsx_reader.rs

use std::collections::HashMap;
use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx};
use chrono::NaiveDate;
use dataset::{ColumnId, Row, Table};

use crate::{LoadOptions, PersistenceError};

/// Accepted layouts when a date arrives as text rather than a date cell.
const TEXT_DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%d-%m-%Y"];

/// Loads the sales dataset from the first sheet of a workbook.
pub fn load_xlsx(path: &Path) -> Result<Table, PersistenceError> {
    load_xlsx_with_options(path, &LoadOptions::default())
}

/// Loads the sales dataset, honoring the given options.
///
/// The header row is mapped to columns by canonical title; every
/// required column must be present. All cell coercion happens here —
/// downstream code receives fully typed rows.
pub fn load_xlsx_with_options(
    path: &Path,
    options: &LoadOptions,
) -> Result<Table, PersistenceError> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let sheet_names = workbook.sheet_names().to_vec();

    if sheet_names.is_empty() {
        return Err(PersistenceError::InvalidFormat(
            "Workbook contains no sheets".to_string(),
        ));
    }

    let sheet_name = match &options.sheet {
        Some(name) => {
            if !sheet_names.iter().any(|n| n == name) {
                return Err(PersistenceError::SheetNotFound(name.clone()));
            }
            name.clone()
        }
        None => sheet_names[0].clone(),
    };

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| PersistenceError::InvalidFormat(e.to_string()))?;

    let mut sheet_rows = range.rows();
    let header = sheet_rows.next().ok_or_else(|| {
        PersistenceError::InvalidFormat(format!("Sheet \"{}\" is empty", sheet_name))
    })?;

    let positions = map_header(header)?;

    let mut rows = Vec::new();
    for (i, sheet_row) in sheet_rows.enumerate() {
        if sheet_row.iter().all(|c| matches!(c, Data::Empty)) {
            continue;
        }
        // Worksheet row as the user sees it (1-based, after the header).
        let row_num = i as u32 + 2;
        rows.push(convert_row(sheet_row, &positions, row_num)?);
    }

    log::info!(
        "loaded {} rows from {} (sheet \"{}\")",
        rows.len(),
        path.display(),
        sheet_name
    );

    Ok(Table::new(rows))
}

/// Maps header titles to their cell positions and verifies every
/// required column is present.
fn map_header(header: &[Data]) -> Result<HashMap<ColumnId, usize>, PersistenceError> {
    let mut positions: HashMap<ColumnId, usize> = HashMap::new();

    for (idx, cell) in header.iter().enumerate() {
        if let Data::String(title) = cell {
            if let Some(column) = ColumnId::from_title(title) {
                positions.entry(column).or_insert(idx);
            }
        }
    }

    for column in ColumnId::REQUIRED {
        if !positions.contains_key(&column) {
            return Err(PersistenceError::MissingColumn(column.title().to_string()));
        }
    }

    Ok(positions)
}

fn convert_row(
    sheet_row: &[Data],
    positions: &HashMap<ColumnId, usize>,
    row_num: u32,
) -> Result<Row, PersistenceError> {
    let cell = |column: ColumnId| -> Option<&Data> {
        positions.get(&column).and_then(|&i| sheet_row.get(i))
    };

    Ok(Row {
        invoice_date: date_cell(cell(ColumnId::InvoiceDate), row_num, ColumnId::InvoiceDate)?,
        region: text_cell(cell(ColumnId::Region), row_num, ColumnId::Region)?,
        product: text_cell(cell(ColumnId::Product), row_num, ColumnId::Product)?,
        state: text_cell(cell(ColumnId::State), row_num, ColumnId::State)?,
        total_sales: number_cell(cell(ColumnId::TotalSales), row_num, ColumnId::TotalSales)?,
        units_sold: count_cell(cell(ColumnId::UnitsSold), row_num, ColumnId::UnitsSold)?,
        operating_margin: number_cell(
            cell(ColumnId::OperatingMargin),
            row_num,
            ColumnId::OperatingMargin,
        )?,
        operating_profit: number_cell(
            cell(ColumnId::OperatingProfit),
            row_num,
            ColumnId::OperatingProfit,
        )?,
        price_per_unit: number_cell(
            cell(ColumnId::PricePerUnit),
            row_num,
            ColumnId::PricePerUnit,
        )?,
        month: optional_text_cell(cell(ColumnId::Month)),
    })
}

fn invalid(row: u32, column: ColumnId, message: impl Into<String>) -> PersistenceError {
    PersistenceError::InvalidCell {
        row,
        column: column.title().to_string(),
        message: message.into(),
    }
}

fn date_cell(
    cell: Option<&Data>,
    row: u32,
    column: ColumnId,
) -> Result<NaiveDate, PersistenceError> {
    match cell {
        Some(Data::DateTime(dt)) => dt
            .as_datetime()
            .map(|d| d.date())
            .ok_or_else(|| invalid(row, column, "unrepresentable date value")),
        Some(Data::String(s)) => parse_text_date(s)
            .ok_or_else(|| invalid(row, column, format!("unrecognized date \"{}\"", s.trim()))),
        Some(Data::DateTimeIso(s)) => parse_text_date(s)
            .ok_or_else(|| invalid(row, column, format!("unrecognized date \"{}\"", s.trim()))),
        _ => Err(invalid(row, column, "expected a date")),
    }
}

fn parse_text_date(s: &str) -> Option<NaiveDate> {
    let trimmed = s.trim();
    // ISO datetime strings carry the date in their first ten characters.
    let candidate = if trimmed.len() > 10 && trimmed.as_bytes().get(10) == Some(&b'T') {
        &trimmed[..10]
    } else {
        trimmed
    };
    TEXT_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(candidate, fmt).ok())
}

fn number_cell(cell: Option<&Data>, row: u32, column: ColumnId) -> Result<f64, PersistenceError> {
    match cell {
        Some(Data::Float(f)) => Ok(*f),
        Some(Data::Int(i)) => Ok(*i as f64),
        Some(Data::String(s)) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| invalid(row, column, format!("not a number: \"{}\"", s.trim()))),
        _ => Err(invalid(row, column, "expected a number")),
    }
}

fn count_cell(cell: Option<&Data>, row: u32, column: ColumnId) -> Result<u32, PersistenceError> {
    let value = number_cell(cell, row, column)?;
    if value < 0.0 || value.fract() != 0.0 || value > u32::MAX as f64 {
        return Err(invalid(row, column, "expected a non-negative whole number"));
    }
    Ok(value as u32)
}

fn text_cell(cell: Option<&Data>, row: u32, column: ColumnId) -> Result<String, PersistenceError> {
    match cell {
        Some(Data::String(s)) => Ok(s.clone()),
        _ => Err(invalid(row, column, "expected text")),
    }
}

fn optional_text_cell(cell: Option<&Data>) -> Option<String> {
    match cell {
        Some(Data::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}
