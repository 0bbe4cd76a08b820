//! Transformation plan definition.
//!
//! A plan maps column names to transformation kinds and optionally fixes
//! the output column order. Plans are built interactively by the prompt,
//! passed programmatically, or loaded from a JSON file so that a run is
//! reproducible without the prompt.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PlanError;

use super::kinds::Transformation;

/// A complete transformation plan for one run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransformPlan {
    /// Per-column transformation kinds. Columns not listed here pass
    /// through unchanged.
    #[serde(default)]
    pub transforms: HashMap<String, Transformation>,

    /// Output column order. `None` keeps the input order.
    #[serde(default)]
    pub column_order: Option<Vec<String>>,
}

impl TransformPlan {
    /// Create an empty plan (pass-through for every column).
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a plan from a JSON string.
    ///
    /// A plan naming an unknown transformation kind is rejected here with
    /// a message listing the valid kinds.
    pub fn from_json(json: &str) -> Result<Self, PlanError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a plan from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PlanError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, PlanError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The configured kind for a column, if any.
    pub fn kind_for(&self, column: &str) -> Option<Transformation> {
        self.transforms.get(column).copied()
    }

    /// Add a transformation for a column.
    pub fn with_transform(mut self, column: &str, kind: Transformation) -> Self {
        self.transforms.insert(column.to_string(), kind);
        self
    }

    /// Fix the output column order.
    pub fn with_column_order(mut self, order: Vec<String>) -> Self {
        self.column_order = Some(order);
        self
    }

    /// Resolve the output column order: the configured order if present,
    /// otherwise the input order.
    pub fn resolved_columns(&self, input_columns: &[String]) -> Vec<String> {
        match &self.column_order {
            Some(order) => order.clone(),
            None => input_columns.to_vec(),
        }
    }
}

/// Generate an example plan for documentation and the `example-plan`
/// command.
pub fn example_plan() -> TransformPlan {
    TransformPlan::new()
        .with_transform("user_id", Transformation::UuidToInt)
        .with_transform("name", Transformation::Redact)
        .with_transform("email", Transformation::Redact)
        .with_transform("created_at", Transformation::TimestampToDate)
        .with_column_order(vec![
            "user_id".to_string(),
            "name".to_string(),
            "email".to_string(),
            "created_at".to_string(),
        ])
}
