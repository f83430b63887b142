use calamine::{open_workbook_auto, Data, Reader};
use chrono::NaiveDate;
use std::path::Path;

use super::error::DataLoadError;
use super::normalize::excel_serial_to_date;

/// Значение ячейки исходной таблицы, независимое от формата файла
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
    Date(NaiveDate),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    pub fn text(value: &str) -> Self {
        if value.is_empty() {
            Cell::Empty
        } else {
            Cell::Text(value.to_string())
        }
    }
}

impl From<&Data> for Cell {
    fn from(value: &Data) -> Self {
        match value {
            Data::Empty | Data::Error(_) => Cell::Empty,
            Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::text(s),
            Data::Int(i) => Cell::Number(*i as f64),
            Data::Float(f) => Cell::Number(*f),
            Data::Bool(b) => Cell::Bool(*b),
            Data::DateTime(dt) => match excel_serial_to_date(dt.as_f64()) {
                Some(date) => Cell::Date(date),
                None => Cell::Number(dt.as_f64()),
            },
            #[allow(unreachable_patterns)]
            _ => Cell::Empty,
        }
    }
}

/// Лист таблицы: первая строка содержит заголовки
#[derive(Debug, Clone)]
pub struct RawSheet {
    pub name: String,
    pub rows: Vec<Vec<Cell>>,
}

/// Читает все листы файла в порядке следования
pub fn read_workbook(path: &Path) -> Result<Vec<RawSheet>, DataLoadError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("csv") => Ok(vec![read_csv(path)?]),
        Some("xlsx" | "xlsm" | "xlsb" | "xls" | "ods") => read_spreadsheet(path),
        _ => Err(DataLoadError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

fn read_spreadsheet(path: &Path) -> Result<Vec<RawSheet>, DataLoadError> {
    let mut workbook = open_workbook_auto(path)?;
    let mut sheets = Vec::new();

    for name in workbook.sheet_names() {
        let range = workbook.worksheet_range(&name)?;
        let rows = range
            .rows()
            .map(|row| row.iter().map(Cell::from).collect())
            .collect();
        sheets.push(RawSheet { name, rows });
    }

    tracing::debug!("Read {} sheet(s) from {}", sheets.len(), path.display());
    Ok(sheets)
}

/// CSV файл считается книгой с одним листом, названным по имени файла
fn read_csv(path: &Path) -> Result<RawSheet, DataLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(Cell::text).collect());
    }

    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Sheet1")
        .to_string();

    Ok(RawSheet { name, rows })
}
