//! CSV input with encoding and delimiter auto-detection.
//!
//! Files are read whole, decoded according to the detected (or assumed)
//! encoding, and parsed with the `csv` crate so that standard quoting
//! rules hold for embedded delimiters and newlines. Each row becomes a
//! JSON object keyed by the column headers; column order travels in the
//! separate `headers` list.

use std::path::Path;

use serde_json::{Map, Value};

use crate::error::CsvError;

/// Result of parsing with metadata.
#[derive(Debug, Clone)]
pub struct ParsedCsv {
    /// Parsed rows as JSON objects keyed by header.
    pub records: Vec<Value>,
    /// Column headers, in input order.
    pub headers: Vec<String>,
    /// Detected or assumed encoding.
    pub encoding: String,
    /// Detected or forced delimiter.
    pub delimiter: char,
}

/// Detect the encoding of raw bytes using chardet.
pub fn detect_encoding(bytes: &[u8]) -> String {
    let (charset, _, _) = chardet::detect(bytes);

    // Normalize charset names
    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        _ => charset,
    }
}

/// Decode bytes to a string using the specified encoding.
///
/// Unknown encodings fall back to lossy UTF-8 so that a mislabeled file
/// still yields usable rows.
pub fn decode_content(bytes: &[u8], encoding: &str) -> String {
    match encoding.to_lowercase().as_str() {
        // WINDOWS_1252 is a superset of ISO-8859-1
        "iso-8859-1" | "latin-1" | "latin1" | "windows-1252" | "cp1252" => {
            encoding_rs::WINDOWS_1252.decode(bytes).0.to_string()
        }
        _ => String::from_utf8_lossy(bytes).to_string(),
    }
}

/// Detect the delimiter by counting occurrences in the header line.
///
/// Comma wins ties, matching the standard convention for this tool's
/// input format.
pub fn detect_delimiter(content: &str) -> char {
    let first_line = content.lines().next().unwrap_or("");

    let separators = [',', ';', '\t', '|'];
    let mut best_sep = ',';
    let mut best_count = 0;

    for &sep in &separators {
        let count = first_line.matches(sep).count();
        if count > best_count {
            best_count = count;
            best_sep = sep;
        }
    }

    best_sep
}

/// Parse CSV text with an explicit delimiter.
///
/// # Example
/// ```
/// use csvscrub::reader::parse_csv_str;
///
/// let parsed = parse_csv_str("name,age\nAlice,30\nBob,25", ',').unwrap();
///
/// assert_eq!(parsed.records.len(), 2);
/// assert_eq!(parsed.records[0]["name"], "Alice");
/// assert_eq!(parsed.records[0]["age"], "30");
/// ```
pub fn parse_csv_str(content: &str, delimiter: char) -> Result<ParsedCsv, CsvError> {
    if content.trim().is_empty() {
        return Err(CsvError::EmptyFile);
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter as u8)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
        return Err(CsvError::NoHeaders);
    }

    let mut records = Vec::new();

    for result in reader.records() {
        let record = result?;

        let mut obj = Map::new();
        for (i, header) in headers.iter().enumerate() {
            let raw = record.get(i).unwrap_or("");
            obj.insert(header.clone(), Value::String(raw.to_string()));
        }

        records.push(Value::Object(obj));
    }

    Ok(ParsedCsv {
        records,
        headers,
        encoding: "utf-8".to_string(),
        delimiter,
    })
}

/// Read a CSV file, auto-detecting encoding and delimiter.
///
/// A forced delimiter skips detection; encoding is always detected.
pub fn read_csv_file(
    path: impl AsRef<Path>,
    delimiter: Option<char>,
) -> Result<ParsedCsv, CsvError> {
    let bytes = std::fs::read(path.as_ref())?;
    read_csv_bytes(&bytes, delimiter)
}

/// Parse CSV bytes, auto-detecting encoding and delimiter.
pub fn read_csv_bytes(bytes: &[u8], delimiter: Option<char>) -> Result<ParsedCsv, CsvError> {
    let encoding = detect_encoding(bytes);
    let content = decode_content(bytes, &encoding);
    let delimiter = delimiter.unwrap_or_else(|| detect_delimiter(&content));

    let mut parsed = parse_csv_str(&content, delimiter)?;
    parsed.encoding = encoding;
    Ok(parsed)
}
