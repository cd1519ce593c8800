//! Spreadsheet adapters for the `include-attestations-file` option.
//!
//! Both adapters map the fixed header set (`Control_ID`, `Explanation`,
//! `Frequency`, `Status`, `Updated`, `Updated_By`) onto attestation field
//! names and drop every other column. An empty cell in a mapped column
//! becomes an empty string, so a blank `Explanation` still reaches the
//! validator as `""`.

use crate::domain::constants::{ATTESTATION_FIELDS, DATE_FORMAT};
use crate::domain::errors::AttestError;
use calamine::{open_workbook, Data, Reader, Xlsx};
use std::collections::BTreeMap;
use std::path::Path;

pub type TabularRow = BTreeMap<String, String>;

pub trait TabularSource {
    fn load_rows(&self, path: &Path) -> Result<Vec<TabularRow>, AttestError>;
}

pub struct CsvSource;

pub struct XlsxSource;

/// Adapter for a configured `type`, or `None` when the type is unsupported.
pub fn source_for(kind: &str) -> Option<Box<dyn TabularSource>> {
    match kind.trim().to_ascii_lowercase().as_str() {
        "csv" => Some(Box::new(CsvSource)),
        "xlsx" => Some(Box::new(XlsxSource)),
        _ => None,
    }
}

/// `Updated_By`, `updated by` and `UPDATED-BY` all map to `updated_by`.
pub fn canonical_field(header: &str) -> Option<&'static str> {
    let normalized = header.trim().to_ascii_lowercase().replace([' ', '-'], "_");
    ATTESTATION_FIELDS
        .iter()
        .copied()
        .find(|f| *f == normalized)
}

fn build_row<I>(columns: &[Option<&'static str>], cells: I) -> TabularRow
where
    I: IntoIterator<Item = String>,
{
    columns
        .iter()
        .zip(cells)
        .filter_map(|(column, cell)| Some(((*column)?.to_string(), cell)))
        .collect()
}

impl TabularSource for CsvSource {
    fn load_rows(&self, path: &Path) -> Result<Vec<TabularRow>, AttestError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(|e| AttestError::tabular(path, e))?;
        let columns: Vec<Option<&'static str>> = reader
            .headers()
            .map_err(|e| AttestError::tabular(path, e))?
            .iter()
            .map(canonical_field)
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| AttestError::tabular(path, e))?;
            rows.push(build_row(&columns, record.iter().map(str::to_string)));
        }
        Ok(rows)
    }
}

impl TabularSource for XlsxSource {
    fn load_rows(&self, path: &Path) -> Result<Vec<TabularRow>, AttestError> {
        let mut workbook: Xlsx<_> =
            open_workbook(path).map_err(|e| AttestError::tabular(path, e))?;
        let range = match workbook.worksheet_range_at(0) {
            Some(range) => range.map_err(|e| AttestError::tabular(path, e))?,
            None => return Ok(vec![]),
        };

        let mut cells = range.rows();
        let Some(header) = cells.next() else {
            return Ok(vec![]);
        };
        let columns: Vec<Option<&'static str>> = header
            .iter()
            .map(|c| canonical_field(&cell_text(c)))
            .collect();

        let rows = cells
            .map(|row| build_row(&columns, row.iter().map(cell_text)))
            .collect();
        Ok(rows)
    }
}

/// Render a spreadsheet cell as the string the validator expects.
/// Date cells become `YYYY-MM-DD`; empty cells become `""`.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(value) => value.date().format(DATE_FORMAT).to_string(),
            None => dt.to_string(),
        },
        Data::DateTimeIso(s) => s.get(..10).unwrap_or(s).to_string(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        other => other.to_string(),
    }
}
