//! Timestamp normalization to canonical `YYYY-MM-DD` form.

use chrono::NaiveDate;

/// Input formats, tried in order. A full timestamp must be attempted
/// before the bare date so that the time portion is consumed rather than
/// rejected.
const INPUT_FORMATS: &[&str] = &[
    "%Y-%b-%d",          // 2025-Mar-01
    "%Y-%m-%d %H:%M:%S", // 2025-03-23 16:54:43
    "%Y-%m-%d",          // 2025-03-23
];

const OUTPUT_FORMAT: &str = "%Y-%m-%d";

/// Normalize a timestamp string to `YYYY-MM-DD`.
///
/// A literal " CET" suffix token is stripped before parsing; this is an
/// exact substring removal, not timezone handling. If no format matches,
/// the stripped input is returned unchanged. Callers rely on that
/// fallback: unparseable values pass through rather than failing the run.
pub fn normalize_timestamp(input: &str) -> String {
    let stripped = input.replace(" CET", "");
    let stripped = stripped.trim();

    for &format in INPUT_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(stripped, format) {
            return date.format(OUTPUT_FORMAT).to_string();
        }
    }

    stripped.to_string()
}
