//! Transformation module.
//!
//! This module holds the transformation engine:
//! - `kinds`: the closed set of transformation kinds and the dispatcher
//! - `idmap`: stable identifier-to-integer mapping
//! - `redact`: synthetic name/email generation
//! - `dates`: timestamp normalization
//! - `plan`: the per-run configuration model
//! - `engine`: row engine and file pipeline

pub mod dates;
pub mod engine;
pub mod idmap;
pub mod kinds;
pub mod plan;
pub mod redact;

pub use dates::normalize_timestamp;
pub use engine::{transform_file, transform_parsed, transform_records, write_records, TransformSummary};
pub use idmap::IdMapper;
pub use kinds::{kinds_description, Transformation, Transformer};
pub use plan::{example_plan, TransformPlan};
pub use redact::{redact, redact_email, redact_name};
