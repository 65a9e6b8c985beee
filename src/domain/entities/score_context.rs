use crate::domain::values::field_path::FieldPath;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One asset's computed multi-factor scores at one point in time.
///
/// Produced by an external scoring service and treated as an opaque,
/// externally-versioned JSON structure: unknown fields are carried
/// without complaint, and nothing here is ever mutated. Typical payloads
/// look like
/// `{ "final_score": 0.62, "metadata": { "engine_details": { "sentiment": { "score": 0.4 } } } }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreContext(Value);

impl ScoreContext {
    pub fn new(value: Value) -> Self {
        ScoreContext(value)
    }

    /// Resolve a dot-path to a numeric leaf. Absent or non-numeric
    /// fields are a normal outcome, not an error.
    pub fn resolve(&self, path: &FieldPath) -> Option<f64> {
        path.resolve(&self.0)
    }

    pub fn as_json(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for ScoreContext {
    fn from(value: Value) -> Self {
        ScoreContext(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_fields_are_tolerated() {
        let ctx = ScoreContext::new(json!({
            "final_score": 0.62,
            "schema_version": "2024-11",
            "extra": { "anything": true }
        }));
        assert_eq!(ctx.resolve(&FieldPath::from("final_score")), Some(0.62));
    }

    #[test]
    fn test_non_object_root_resolves_nothing() {
        let ctx = ScoreContext::new(json!([1, 2, 3]));
        assert_eq!(ctx.resolve(&FieldPath::from("final_score")), None);
    }
}
