//! Delimited-file input and result export.
//!
//! Input tables must have a header row. Columns are selected by exact header
//! name; an empty cell (or a row too short to reach the column) becomes
//! [`RawLabel::Missing`]. Every other cell is kept verbatim as text.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use canonical::RawLabel;
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use matcher::MatchResult;
use serde_json::{Map, Value};
use tracing::debug;

use crate::config::OutputYamlConfig;
use crate::error::SheetmatchError;

/// Parsing options for input tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    pub delimiter: u8,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

fn open_reader(path: &Path, opts: &TableOptions) -> Result<csv::Reader<File>, SheetmatchError> {
    let file = File::open(path).map_err(|source| SheetmatchError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(ReaderBuilder::new()
        .delimiter(opts.delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(file))
}

fn header_names(headers: &StringRecord) -> Vec<String> {
    headers.iter().map(str::to_string).collect()
}

/// Header row of a table, in file order.
pub fn list_columns(path: impl AsRef<Path>, opts: &TableOptions) -> Result<Vec<String>, SheetmatchError> {
    let mut reader = open_reader(path.as_ref(), opts)?;
    Ok(header_names(reader.headers()?))
}

/// Every cell of one column, in row order.
pub fn load_column(
    path: impl AsRef<Path>,
    column: &str,
    opts: &TableOptions,
) -> Result<Vec<RawLabel>, SheetmatchError> {
    let path = path.as_ref();
    let mut reader = open_reader(path, opts)?;
    let headers = reader.headers()?.clone();
    let position = headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| SheetmatchError::MissingColumn {
            column: column.to_string(),
            available: header_names(&headers),
        })?;

    let mut labels = Vec::new();
    for record in reader.records() {
        let record = record?;
        labels.push(match record.get(position) {
            Some(cell) => RawLabel::from_cell(cell),
            None => RawLabel::Missing,
        });
    }

    debug!(
        path = %path.display(),
        column,
        rows = labels.len(),
        "column_loaded"
    );
    Ok(labels)
}

/// Writes results as CSV rows `(query, matched, score)` in the given order.
///
/// An absent match is written as an empty cell.
pub fn write_csv<W: Write>(
    writer: W,
    results: &[MatchResult],
    layout: &OutputYamlConfig,
) -> Result<(), SheetmatchError> {
    let mut out = WriterBuilder::new().from_writer(writer);
    out.write_record([
        layout.query_header.as_str(),
        layout.matched_header.as_str(),
        layout.score_header.as_str(),
    ])?;
    for result in results {
        let score = result.score.to_string();
        out.write_record([
            result.query.as_str(),
            result.matched.as_deref().unwrap_or(""),
            score.as_str(),
        ])?;
    }
    out.flush()?;
    Ok(())
}

/// Writes results as a JSON array of objects keyed by the configured headers.
///
/// An absent match is written as `null`.
pub fn write_json<W: Write>(
    mut writer: W,
    results: &[MatchResult],
    layout: &OutputYamlConfig,
) -> Result<(), SheetmatchError> {
    let rows: Vec<Value> = results
        .iter()
        .map(|result| {
            let mut row = Map::new();
            row.insert(layout.query_header.clone(), Value::from(result.query.clone()));
            row.insert(
                layout.matched_header.clone(),
                result.matched.clone().map_or(Value::Null, Value::from),
            );
            row.insert(layout.score_header.clone(), Value::from(result.score.get()));
            Value::Object(row)
        })
        .collect();
    serde_json::to_writer_pretty(&mut writer, &rows)?;
    writer.write_all(b"\n")?;
    Ok(())
}
