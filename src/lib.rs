//! # csvscrub - column-wise CSV transformation
//!
//! csvscrub reads a tabular input file, applies a configurable per-column
//! transformation (pseudonymous ID assignment, data redaction, or date
//! normalization), and writes a reordered/transformed output file.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   CSV File  │────▶│   Reader    │────▶│  Transform  │────▶│  CSV File   │
//! │  (ISO/UTF8) │     │ (auto-enc)  │     │ (per-column)│     │ (reordered) │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::Path;
//! use csvscrub::{transform_file, Transformation, TransformPlan};
//!
//! let plan = TransformPlan::new()
//!     .with_transform("id", Transformation::UuidToInt)
//!     .with_transform("name", Transformation::Redact)
//!     .with_transform("created_at", Transformation::TimestampToDate);
//!
//! let summary = transform_file(
//!     Path::new("users.csv"),
//!     Path::new("users_clean.csv"),
//!     &plan,
//!     None,
//! ).unwrap();
//! println!("Transformed {} rows", summary.rows);
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`reader`] - CSV parsing with auto-detection
//! - [`transform`] - Kinds, dispatcher, engine, and plan
//! - [`prompt`] - Interactive plan construction
//! - [`logs`] - Leveled progress logging

// Core modules
pub mod error;
pub mod logs;

// Parsing
pub mod reader;

// Transformation
pub mod transform;

// Interactive configuration
pub mod prompt;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{CsvError, PipelineError, PlanError, TransformError};

// =============================================================================
// Re-exports - CSV Reading
// =============================================================================

pub use reader::{
    detect_delimiter,
    detect_encoding,
    decode_content,
    parse_csv_str,
    read_csv_bytes,
    read_csv_file,
    ParsedCsv,
};

// =============================================================================
// Re-exports - Transformation
// =============================================================================

pub use transform::{
    example_plan,
    kinds_description,
    normalize_timestamp,
    redact,
    redact_email,
    redact_name,
    transform_file,
    transform_parsed,
    transform_records,
    write_records,
    IdMapper,
    TransformPlan,
    TransformSummary,
    Transformation,
    Transformer,
};

// =============================================================================
// Re-exports - Prompt
// =============================================================================

pub use prompt::build_plan_interactive;
