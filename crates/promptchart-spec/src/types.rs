//! Core pipeline types: chart categories, validation results and the
//! validated specification wrapper.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::validate::validate;

/// Closed set of series rendering types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Line,
    Bar,
    Pie,
    Scatter,
    Area,
}

impl ChartType {
    pub const ALL: [ChartType; 5] = [
        ChartType::Line,
        ChartType::Bar,
        ChartType::Pie,
        ChartType::Scatter,
        ChartType::Area,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartType::Line => "line",
            ChartType::Bar => "bar",
            ChartType::Pie => "pie",
            ChartType::Scatter => "scatter",
            ChartType::Area => "area",
        }
    }

    /// Parse a series `type` field. Case-sensitive, like the renderer.
    pub fn from_series_type(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a structural or bound check. Errors accumulate; the check is
/// valid exactly when no error was recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Errors joined with `"; "`, as reported in response details.
    pub fn joined(&self) -> String {
        self.errors.join("; ")
    }
}

/// A chart specification that passed [`validate`].
///
/// The wrapped tree is a JSON object whose `series` is a non-empty array of
/// objects, each with a known `type` and a non-empty `data` array. The only
/// ways to get one are [`ChartSpec::parse`] and the pipeline transforms,
/// none of which touch `type` or `data`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ChartSpec(Value);

impl ChartSpec {
    /// Validate `raw` and wrap it, or return every structural error found.
    pub fn parse(raw: Value) -> Result<Self, ValidationResult> {
        let result = validate(&raw);
        if result.is_valid {
            Ok(Self(raw))
        } else {
            Err(result)
        }
    }

    /// Wrap a tree derived from an already-validated spec by a transform
    /// that leaves every series' `type` and `data` in place.
    pub(crate) fn from_transformed(value: Value) -> Self {
        debug_assert!(validate(&value).is_valid);
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// The validated series list.
    pub fn series(&self) -> &[Value] {
        self.0
            .get("series")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
