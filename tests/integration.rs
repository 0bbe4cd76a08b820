//! File-level integration tests for the transformation pipeline.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use csvscrub::{transform_file, TransformPlan, Transformation};

fn write_input(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn read_rows(path: &PathBuf) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::Reader::from_path(path).unwrap();
    let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
    let rows: Vec<Vec<String>> = reader
        .records()
        .map(|r| r.unwrap().iter().map(String::from).collect())
        .collect();
    (headers, rows)
}

#[test]
fn transform_applies_each_kind() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        "input.csv",
        "id,name,date\nUUID-123,John Doe,2025-Mar-01\nUUID-456,Jane Smith,2024-Dec-31\n",
    );
    let output = dir.path().join("output.csv");

    let plan = TransformPlan::new()
        .with_transform("id", Transformation::UuidToInt)
        .with_transform("name", Transformation::Redact)
        .with_transform("date", Transformation::TimestampToDate);

    let summary = transform_file(&input, &output, &plan, None).unwrap();
    assert_eq!(summary.rows, 2);
    assert_eq!(summary.ids_mapped, 2);

    let (headers, rows) = read_rows(&output);
    assert_eq!(headers, vec!["id", "name", "date"]);
    assert_eq!(rows.len(), 2);

    assert_eq!(rows[0][0], "1");
    assert_eq!(rows[1][0], "2");
    assert_eq!(rows[0][2], "2025-03-01");
    assert_eq!(rows[1][2], "2024-12-31");
    assert!(!rows[0][1].is_empty());
    assert!(!rows[1][1].is_empty());
}

#[test]
fn repeated_identifier_keeps_its_integer() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        "input.csv",
        "id\nUUID-A\nUUID-B\nUUID-A\n",
    );
    let output = dir.path().join("output.csv");

    let plan = TransformPlan::new().with_transform("id", Transformation::UuidToInt);

    let summary = transform_file(&input, &output, &plan, None).unwrap();
    assert_eq!(summary.ids_mapped, 2);

    let (_, rows) = read_rows(&output);
    assert_eq!(rows[0][0], "1");
    assert_eq!(rows[1][0], "2");
    assert_eq!(rows[2][0], "1");
}

#[test]
fn empty_plan_is_a_pass_through() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "input.csv", "col1,col2\nvalue1,value2\n");
    let output = dir.path().join("output.csv");

    transform_file(&input, &output, &TransformPlan::new(), None).unwrap();

    let (headers, rows) = read_rows(&output);
    assert_eq!(headers, vec!["col1", "col2"]);
    assert_eq!(rows, vec![vec!["value1".to_string(), "value2".to_string()]]);
}

#[test]
fn column_reorder_realigns_values() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "input.csv", "col1,col2,col3\na,b,c\n");
    let output = dir.path().join("output.csv");

    let plan = TransformPlan::new().with_column_order(vec![
        "col3".to_string(),
        "col1".to_string(),
        "col2".to_string(),
    ]);

    let summary = transform_file(&input, &output, &plan, None).unwrap();
    assert_eq!(summary.output_columns, vec!["col3", "col1", "col2"]);

    let (headers, rows) = read_rows(&output);
    assert_eq!(headers, vec!["col3", "col1", "col2"]);
    assert_eq!(rows[0], vec!["c".to_string(), "a".to_string(), "b".to_string()]);
}

#[test]
fn plan_file_drives_a_run() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "input.csv", "id,when\nUUID-9,2021-Feb-17\n");
    let output = dir.path().join("output.csv");

    let plan_path = write_input(
        &dir,
        "plan.json",
        r#"{"transforms": {"id": "uuid_to_int", "when": "timestamp_to_date"}}"#,
    );
    let plan = TransformPlan::from_file(&plan_path).unwrap();

    transform_file(&input, &output, &plan, None).unwrap();

    let (_, rows) = read_rows(&output);
    assert_eq!(rows[0], vec!["1".to_string(), "2021-02-17".to_string()]);
}

#[test]
fn plan_with_unknown_kind_is_rejected() {
    let err = TransformPlan::from_json(r#"{"transforms": {"id": "rot13"}}"#).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("uuid_to_int"));
    assert!(msg.contains("timestamp_to_date"));
}

#[test]
fn missing_input_file_propagates_io_error() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("does-not-exist.csv");
    let output = dir.path().join("output.csv");

    let result = transform_file(&input, &output, &TransformPlan::new(), None);
    assert!(result.is_err());
    assert!(!output.exists(), "no output should be created when reading fails");
}

#[test]
fn semicolon_input_is_autodetected_and_written_as_standard_csv() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "input.csv", "a;b\n1;2\n");
    let output = dir.path().join("output.csv");

    let summary = transform_file(&input, &output, &TransformPlan::new(), None).unwrap();
    assert_eq!(summary.delimiter, ';');

    let (headers, rows) = read_rows(&output);
    assert_eq!(headers, vec!["a", "b"]);
    assert_eq!(rows[0], vec!["1".to_string(), "2".to_string()]);
}

#[test]
fn quoted_fields_survive_a_pass_through() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        "input.csv",
        "name,notes\nAlice,\"comma, inside\"\n",
    );
    let output = dir.path().join("output.csv");

    transform_file(&input, &output, &TransformPlan::new(), None).unwrap();

    let (_, rows) = read_rows(&output);
    assert_eq!(rows[0][1], "comma, inside");
}
