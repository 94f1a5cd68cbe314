use crate::utils::error::Result;
use serde_json::Value;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Keys from `required` absent from `value`, in `required` order.
/// Anything that is not an object is missing every key.
pub fn missing_keys(value: &Value, required: &[&'static str]) -> Vec<&'static str> {
    match value.as_object() {
        Some(map) => required
            .iter()
            .copied()
            .filter(|key| !map.contains_key(*key))
            .collect(),
        None => required.to_vec(),
    }
}

pub fn has_all_keys(value: &Value, required: &[&'static str]) -> bool {
    value
        .as_object()
        .is_some_and(|map| required.iter().all(|key| map.contains_key(*key)))
}
