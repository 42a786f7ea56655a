//! Minimal shape contract for decoded model output.

/// A record that can check its own invariants after deserialization.
///
/// Serde already guarantees that required keys exist with the right coarse
/// types; this hook covers what the type system cannot express, such as a
/// meal plan having exactly seven days.
pub trait ShapeContract {
    /// Returns a description of the first violated invariant, if any.
    fn check_shape(&self) -> Result<(), String>;
}

/// Free-form JSON must at least be an object.
impl ShapeContract for serde_json::Value {
    fn check_shape(&self) -> Result<(), String> {
        if self.is_object() {
            Ok(())
        } else {
            Err(format!("expected a JSON object, found {}", json_type(self)))
        }
    }
}

fn json_type(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
