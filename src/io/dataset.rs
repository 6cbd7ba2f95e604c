//! CSV ingest.
//!
//! Turns a delimited file with a header row into a typed `Dataset`:
//! - header names are trimmed and stripped of a UTF-8 BOM
//! - repeated header names get a `.1`, `.2`, ... suffix
//! - empty cells and the usual NA markers (`NA`, `NaN`, `null`, ...) become missing values
//! - a column is numeric iff every non-empty cell parses as `f64`
//!
//! No cleaning happens here; that is the preprocess strategy's job.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use log::{debug, warn};

use crate::domain::{Column, Dataset};
use crate::error::AppError;

const NA_MARKERS: [&str; 10] = [
    "NA", "N/A", "n/a", "#N/A", "<NA>", "NaN", "nan", "NULL", "null", "None",
];

/// Load a dataset from a CSV file on disk.
pub fn read_dataset_csv(path: &Path) -> Result<Dataset, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::io(format!("Failed to open CSV '{}': {e}", path.display()))
    })?;
    read_dataset(file, &path.display().to_string())
}

/// Load a dataset from any reader. `source` is only used in messages.
pub fn read_dataset<R: Read>(reader: R, source: &str) -> Result<Dataset, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| AppError::data(format!("{source}: failed to read CSV headers: {e}")))?
        .clone();
    let names: Vec<String> = headers.iter().map(normalize_header_name).collect();
    if names.iter().all(String::is_empty) {
        return Err(AppError::data(format!("{source}: CSV has no header row.")));
    }
    let names = dedupe_header_names(names);

    let mut cells: Vec<Vec<Option<String>>> = vec![Vec::new(); names.len()];
    for (idx, result) in reader.records().enumerate() {
        // records() starts after the header; CSV lines are 1-based.
        let line = idx + 2;
        let record = result.map_err(|e| {
            AppError::data(format!("{source}: CSV parse error on line {line}: {e}"))
        })?;
        if record.len() != names.len() {
            warn!(
                "{source}: line {line} has {} fields, header has {}; padding/truncating",
                record.len(),
                names.len()
            );
        }
        push_record(&record, &mut cells);
    }

    let n_rows = cells.first().map_or(0, Vec::len);
    if n_rows == 0 {
        return Err(AppError::data(format!("{source}: dataset contains no rows.")));
    }

    let columns: Vec<Column> = names
        .into_iter()
        .zip(cells)
        .map(|(name, values)| infer_column(name, values))
        .collect();

    debug!(
        "{source}: read {n_rows} rows, {} columns ({} numeric)",
        columns.len(),
        columns.iter().filter(|c| c.data.is_numeric()).count()
    );

    Dataset::new(columns)
}

fn normalize_header_name(name: &str) -> String {
    // Spreadsheet exports often prefix the first header with a BOM.
    name.trim().trim_start_matches('\u{feff}').to_string()
}

/// Later copies of a repeated name become `name.1`, `name.2`, ..., skipping
/// suffixes that already exist as headers.
fn dedupe_header_names(names: Vec<String>) -> Vec<String> {
    let mut taken: HashSet<String> = names.iter().cloned().collect();
    let mut seen: HashSet<String> = HashSet::with_capacity(names.len());
    let mut out = Vec::with_capacity(names.len());
    for name in names {
        if seen.insert(name.clone()) {
            out.push(name);
            continue;
        }
        let mut n = 1;
        let renamed = loop {
            let candidate = format!("{name}.{n}");
            if !taken.contains(&candidate) {
                break candidate;
            }
            n += 1;
        };
        warn!("Duplicate column '{name}' renamed to '{renamed}'");
        taken.insert(renamed.clone());
        seen.insert(renamed.clone());
        out.push(renamed);
    }
    out
}

fn push_record(record: &StringRecord, cells: &mut [Vec<Option<String>>]) {
    for (idx, column) in cells.iter_mut().enumerate() {
        let value = record
            .get(idx)
            .map(str::trim)
            .filter(|s| !s.is_empty() && !NA_MARKERS.contains(s))
            .map(str::to_string);
        column.push(value);
    }
}

fn infer_column(name: String, values: Vec<Option<String>>) -> Column {
    let parsed: Option<Vec<Option<f64>>> = values
        .iter()
        .map(|cell| match cell {
            None => Some(None),
            Some(s) => parse_f64(s).map(Some),
        })
        .collect();

    match parsed {
        Some(numeric) => Column::numeric(name, numeric),
        None => Column::text(name, values),
    }
}

fn parse_f64(s: &str) -> Option<f64> {
    let v = s.parse::<f64>().ok()?;
    // "nan" parses as f64; treat it as a missing cell instead of a value.
    if v.is_nan() { None } else { Some(v) }
}
