//! Table transformation engine and file pipeline.
//!
//! ```text
//! ┌───────────┐     ┌──────────────┐     ┌──────────────┐     ┌───────────┐
//! │ CSV input │────▶│    Reader    │────▶│ Per-column   │────▶│ CSV output│
//! │           │     │ (auto-enc)   │     │ dispatch     │     │ (reorder) │
//! └───────────┘     └──────────────┘     └──────────────┘     └───────────┘
//! ```
//!
//! Rows are processed one at a time in input order, each column resolved
//! against the plan and dispatched through one shared [`Transformer`].
//! Reordering never happens during transformation; it is a projection
//! applied when rows are serialized against the resolved column order.

use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{CsvResult, PipelineResult};
use crate::logs::{log_info, log_success, log_warning};
use crate::reader::{read_csv_file, ParsedCsv};

use super::kinds::Transformer;
use super::plan::TransformPlan;

/// Statistics from a completed run, for CLI reporting.
#[derive(Debug, Clone)]
pub struct TransformSummary {
    /// Number of data rows written.
    pub rows: usize,
    /// Column order of the input file.
    pub input_columns: Vec<String>,
    /// Resolved column order of the output file.
    pub output_columns: Vec<String>,
    /// Detected input encoding.
    pub encoding: String,
    /// Delimiter the input was parsed with.
    pub delimiter: char,
    /// Number of distinct identifiers mapped by `uuid_to_int`.
    pub ids_mapped: usize,
}

/// Transform parsed rows in input order.
///
/// Each output row is a new object keyed by the same column names; values
/// for columns missing from a record default to the empty string. Row
/// order is preserved.
pub fn transform_records(
    records: &[Value],
    columns: &[String],
    plan: &TransformPlan,
    transformer: &mut Transformer,
) -> Vec<Value> {
    records
        .iter()
        .map(|row| transform_row(row, columns, plan, transformer))
        .collect()
}

fn transform_row(
    row: &Value,
    columns: &[String],
    plan: &TransformPlan,
    transformer: &mut Transformer,
) -> Value {
    let empty = Map::new();
    let row_obj = row.as_object().unwrap_or(&empty);

    let mut out = Map::new();
    for column in columns {
        let value = row_obj
            .get(column)
            .cloned()
            .unwrap_or_else(|| Value::String(String::new()));

        let transformed = match plan.kind_for(column) {
            Some(kind) => transformer.apply(&value, kind),
            None => value,
        };

        out.insert(column.clone(), transformed);
    }

    Value::Object(out)
}

/// Transform a CSV file end to end.
///
/// Reads the input (auto-detecting encoding, and delimiter unless one is
/// forced), applies the plan with a fresh [`Transformer`], and writes the
/// output in the resolved column order.
pub fn transform_file(
    input: &Path,
    output: &Path,
    plan: &TransformPlan,
    delimiter: Option<char>,
) -> PipelineResult<TransformSummary> {
    let parsed = read_csv_file(input, delimiter)?;
    transform_parsed(parsed, plan, output)
}

/// Transform already-parsed CSV data and write the output file.
pub fn transform_parsed(
    parsed: ParsedCsv,
    plan: &TransformPlan,
    output: &Path,
) -> PipelineResult<TransformSummary> {
    log_info(format!(
        "Transforming {} rows, {} columns",
        parsed.records.len(),
        parsed.headers.len()
    ));

    let mut transformer = Transformer::new();
    let records = transform_records(&parsed.records, &parsed.headers, plan, &mut transformer);

    let output_columns = plan.resolved_columns(&parsed.headers);
    for column in &output_columns {
        if !parsed.headers.contains(column) {
            log_warning(format!(
                "Output column '{}' is not in the input; writing empty values",
                column
            ));
        }
    }

    write_records(output, &output_columns, &records)?;

    log_success(format!("Wrote {} rows", records.len()));

    Ok(TransformSummary {
        rows: records.len(),
        input_columns: parsed.headers,
        output_columns,
        encoding: parsed.encoding,
        delimiter: parsed.delimiter,
        ids_mapped: transformer.ids().len(),
    })
}

/// Write rows as CSV, projecting each row onto `columns`.
///
/// Integer values (from `uuid_to_int`) are written in decimal text form;
/// columns absent from a row serialize as the empty string. The writer is
/// flushed before returning so a reported success means a complete file.
pub fn write_records(path: &Path, columns: &[String], records: &[Value]) -> CsvResult<()> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(columns)?;

    let empty = Map::new();
    for record in records {
        let row_obj = record.as_object().unwrap_or(&empty);
        let fields: Vec<String> = columns
            .iter()
            .map(|column| field_text(row_obj.get(column)))
            .collect();
        writer.write_record(&fields)?;
    }

    writer.flush()?;
    Ok(())
}

/// Serialize a single field value for CSV output.
fn field_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
