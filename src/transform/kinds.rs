//! Transformation kinds and the value dispatcher.
//!
//! The set of kinds is closed: dispatch is an exhaustive match over the
//! [`Transformation`] enum, and the only runtime failure mode is an
//! unrecognized kind *string* entering through [`Transformer::apply_named`]
//! or [`FromStr`]. This replaces a lookup-table-of-callables design with
//! compile-time exhaustiveness.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::TransformError;

use super::dates::normalize_timestamp;
use super::idmap::IdMapper;
use super::redact::redact;

/// A per-column transformation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transformation {
    /// Replace an opaque identifier with a stable sequential integer.
    UuidToInt,
    /// Replace a name or email with a synthetic value of the same shape.
    Redact,
    /// Normalize a timestamp to `YYYY-MM-DD`.
    TimestampToDate,
}

impl Transformation {
    /// All kinds, in the order they are offered to users.
    pub const ALL: [Transformation; 3] = [
        Transformation::UuidToInt,
        Transformation::Redact,
        Transformation::TimestampToDate,
    ];

    /// The snake_case name used in plans and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Transformation::UuidToInt => "uuid_to_int",
            Transformation::Redact => "redact",
            Transformation::TimestampToDate => "timestamp_to_date",
        }
    }

    /// One-line description for prompts and help output.
    pub fn describe(&self) -> &'static str {
        match self {
            Transformation::UuidToInt => "Convert UUID to sequential integer",
            Transformation::Redact => "Redact sensitive data (auto-detects names vs emails)",
            Transformation::TimestampToDate => "Convert timestamp to YYYY-MM-DD",
        }
    }

    /// Comma-separated list of all kind names, for error messages.
    pub fn available() -> String {
        Self::ALL
            .iter()
            .map(|k| k.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Transformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Transformation {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uuid_to_int" => Ok(Transformation::UuidToInt),
            "redact" => Ok(Transformation::Redact),
            "timestamp_to_date" => Ok(Transformation::TimestampToDate),
            other => Err(TransformError::UnknownKind {
                kind: other.to_string(),
                available: Transformation::available(),
            }),
        }
    }
}

/// Get a description of all available kinds for CLI output.
pub fn kinds_description() -> String {
    let mut out = String::from("Available transformation kinds:\n\n");
    for kind in Transformation::ALL {
        out.push_str(&format!("  {:18} {}\n", kind.name(), kind.describe()));
    }
    out
}

// =============================================================================
// Dispatcher
// =============================================================================

/// Applies transformations to single values.
///
/// Stateless except for the identifier mapper: one `Transformer` is
/// created per run and threaded through every row so that repeated
/// identifiers map consistently. Not safe for concurrent mutation.
#[derive(Debug)]
pub struct Transformer {
    ids: IdMapper,
}

impl Default for Transformer {
    fn default() -> Self {
        Self::new()
    }
}

impl Transformer {
    pub fn new() -> Self {
        Self { ids: IdMapper::new() }
    }

    /// Apply a kind to a value.
    ///
    /// `uuid_to_int` yields a JSON number; the other kinds yield strings.
    pub fn apply(&mut self, value: &Value, kind: Transformation) -> Value {
        let text = as_text(value);
        match kind {
            Transformation::UuidToInt => Value::Number(self.ids.map(&text).into()),
            Transformation::Redact => Value::String(redact(&text)),
            Transformation::TimestampToDate => Value::String(normalize_timestamp(&text)),
        }
    }

    /// Apply a kind given by name, or pass the value through when `None`.
    ///
    /// An unrecognized name fails with [`TransformError::UnknownKind`]
    /// naming the valid kinds, so callers can correct their configuration.
    pub fn apply_named(
        &mut self,
        value: &Value,
        kind: Option<&str>,
    ) -> Result<Value, TransformError> {
        match kind {
            None => Ok(value.clone()),
            Some(name) => Ok(self.apply(value, name.parse()?)),
        }
    }

    /// The identifier mapper owned by this transformer.
    pub fn ids(&self) -> &IdMapper {
        &self.ids
    }
}

/// String representation of a field value, the way the CSV layer sees it.
fn as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_known_kinds() {
        assert_eq!("uuid_to_int".parse::<Transformation>().unwrap(), Transformation::UuidToInt);
        assert_eq!("redact".parse::<Transformation>().unwrap(), Transformation::Redact);
        assert_eq!(
            "timestamp_to_date".parse::<Transformation>().unwrap(),
            Transformation::TimestampToDate
        );
    }

    #[test]
    fn test_parse_unknown_kind_lists_available() {
        let err = "bogus_kind".parse::<Transformation>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("'bogus_kind'"));
        assert!(msg.contains("uuid_to_int"));
        assert!(msg.contains("redact"));
        assert!(msg.contains("timestamp_to_date"));
    }

    #[test]
    fn test_apply_uuid_to_int() {
        let mut transformer = Transformer::new();
        let result = transformer.apply(
            &json!("EFEABEA5-981B-4E45-8F13-425C456BF7F6"),
            Transformation::UuidToInt,
        );
        assert_eq!(result, json!(1));
    }

    #[test]
    fn test_apply_uuid_to_int_is_stable() {
        let mut transformer = Transformer::new();
        let a = transformer.apply(&json!("UUID-A"), Transformation::UuidToInt);
        let b = transformer.apply(&json!("UUID-B"), Transformation::UuidToInt);
        let a_again = transformer.apply(&json!("UUID-A"), Transformation::UuidToInt);

        assert_eq!(a, json!(1));
        assert_eq!(b, json!(2));
        assert_eq!(a_again, json!(1));
    }

    #[test]
    fn test_apply_redact() {
        let mut transformer = Transformer::new();
        let result = transformer.apply(&json!("John Doe"), Transformation::Redact);
        assert!(result.as_str().is_some_and(|s| !s.is_empty()));
    }

    #[test]
    fn test_apply_timestamp_to_date() {
        let mut transformer = Transformer::new();
        let result = transformer.apply(&json!("2025-Mar-01"), Transformation::TimestampToDate);
        assert_eq!(result, json!("2025-03-01"));
    }

    #[test]
    fn test_apply_named_none_passes_through() {
        let mut transformer = Transformer::new();
        let original = json!("some value");
        let result = transformer.apply_named(&original, None).unwrap();
        assert_eq!(result, original);
    }

    #[test]
    fn test_apply_named_unknown_fails() {
        let mut transformer = Transformer::new();
        let err = transformer.apply_named(&json!("value"), Some("unknown_transform"));
        assert!(err.is_err());
    }

    #[test]
    fn test_kind_names_round_trip_display() {
        for kind in Transformation::ALL {
            assert_eq!(kind.name().parse::<Transformation>().unwrap(), kind);
            assert_eq!(kind.to_string(), kind.name());
        }
    }
}
