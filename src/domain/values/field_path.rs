//! Dot-delimited paths into a nested score context.
//!
//! Paths such as `final_score` or `metadata.engine_details.sentiment.score`
//! are opaque strings resolved at evaluation time. A path that does not
//! lead to a numeric leaf is not an error; it resolves to `None` and the
//! rule referencing it fails closed.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Opaque dot-separated path identifying a numeric leaf inside a nested
/// score object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldPath(String);

impl FieldPath {
    pub fn new(path: impl Into<String>) -> Self {
        FieldPath(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Walk `context` one segment at a time and return the numeric leaf.
    ///
    /// Returns `None` when any intermediate segment is missing or not an
    /// object, or when the final value is not a number. Never panics.
    pub fn resolve(&self, context: &Value) -> Option<f64> {
        let mut cursor = context;
        for segment in self.0.split('.') {
            cursor = cursor.as_object()?.get(segment)?;
        }
        cursor.as_f64()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for FieldPath {
    fn from(s: &str) -> Self {
        FieldPath(s.to_string())
    }
}
