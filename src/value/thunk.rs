//! Deferred computations (promises).
use super::view::Value;
use serde::{Deserialize, Serialize};

/// A captured expression plus, once code outside this crate has forced it,
/// the memoized result.
///
/// Nothing here evaluates anything. The resolver only reads what the host has
/// already materialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thunk {
    expression: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<Value>,
}

impl Thunk {
    /// A promise that has not been forced yet.
    pub fn pending(expression: Value) -> Self {
        Self { expression, value: None }
    }

    /// A promise whose result has already been memoized.
    pub fn forced(expression: Value, value: Value) -> Self {
        Self { expression, value: Some(value) }
    }

    pub fn expression(&self) -> &Value {
        &self.expression
    }

    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    pub fn is_forced(&self) -> bool {
        self.value.is_some()
    }
}
