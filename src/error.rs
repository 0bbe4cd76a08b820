//! Error types for the csvscrub transformation pipeline.
//!
//! This module defines a hierarchy of error types:
//!
//! - [`CsvError`] - CSV reading and writing errors
//! - [`TransformError`] - transformation dispatch errors
//! - [`PlanError`] - transformation plan loading errors
//! - [`PipelineError`] - top-level orchestration errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

// =============================================================================
// CSV Errors
// =============================================================================

/// Errors during CSV reading or writing.
#[derive(Debug, Error)]
pub enum CsvError {
    /// Failed to read or write a file.
    #[error("Failed to access file: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid CSV structure.
    #[error("Invalid CSV: {0}")]
    Parse(#[from] csv::Error),

    /// Empty file.
    #[error("CSV file is empty")]
    EmptyFile,

    /// No headers found.
    #[error("No headers found in CSV")]
    NoHeaders,
}

// =============================================================================
// Transformation Errors
// =============================================================================

/// Errors during transformation dispatch.
#[derive(Debug, Error)]
pub enum TransformError {
    /// An unrecognized transformation kind was requested for a column.
    #[error("Unknown transformation kind: '{kind}'. Available: {available}")]
    UnknownKind { kind: String, available: String },
}

// =============================================================================
// Plan Errors
// =============================================================================

/// Errors while loading or saving a transformation plan.
#[derive(Debug, Error)]
pub enum PlanError {
    /// Failed to read the plan file.
    #[error("Failed to read plan file: {0}")]
    Io(#[from] std::io::Error),

    /// Plan JSON is malformed or names an unknown transformation kind.
    #[error("Invalid plan: {0}")]
    Json(#[from] serde_json::Error),
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level pipeline orchestration errors.
///
/// This is the main error type returned by
/// [`crate::transform::engine::transform_file`]. It wraps all lower-level
/// errors; a run either completes fully or aborts with one of these.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// CSV reading or writing error.
    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),

    /// Transformation dispatch error.
    #[error("Transform error: {0}")]
    Transform(#[from] TransformError),

    /// Plan loading error.
    #[error("Plan error: {0}")]
    Plan(#[from] PlanError),

    /// IO error outside CSV handling.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for CSV operations.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for transformation dispatch.
pub type TransformResult<T> = Result<T, TransformError>;

/// Result type for plan operations.
pub type PlanResult<T> = Result<T, PlanError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        // CsvError -> PipelineError
        let csv_err = CsvError::EmptyFile;
        let pipeline_err: PipelineError = csv_err.into();
        assert!(pipeline_err.to_string().contains("empty"));

        // TransformError -> PipelineError
        let transform_err = TransformError::UnknownKind {
            kind: "bogus".into(),
            available: "uuid_to_int, redact, timestamp_to_date".into(),
        };
        let pipeline_err: PipelineError = transform_err.into();
        assert!(pipeline_err.to_string().contains("bogus"));
        assert!(pipeline_err.to_string().contains("uuid_to_int"));
    }

    #[test]
    fn test_unknown_kind_format() {
        let err = TransformError::UnknownKind {
            kind: "hash".into(),
            available: "uuid_to_int, redact, timestamp_to_date".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("'hash'"));
        assert!(msg.contains("Available:"));
    }
}
