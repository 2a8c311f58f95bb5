//! Conversion from serde-serializable values into [`Value`] trees.
//!
//! Serde is the introspection facility here: any `Serialize` type already
//! describes its own shape, so no per-type registration is needed. The
//! conversion goes through `serde_json::Value` with key order preserved,
//! which keeps record field enumeration in declaration order.

use crate::value::{Field, Value};
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while building a [`Value`] tree.
#[derive(Error, Debug)]
pub enum ValueError {
    /// Input could not be serialized into the intermediate representation.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Convert any serializable value into a [`Value`] tree.
///
/// Structs and maps become [`Value::Record`]s with fields in declaration
/// order, sequences and tuples become [`Value::Array`]s, `Option::None`
/// and unit become [`Value::Null`].
pub fn to_value<T: Serialize>(value: &T) -> Result<Value, ValueError> {
    Ok(from_json(serde_json::to_value(value)?))
}

fn from_json(json: serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Int(i)
            } else if let Some(f) = n.as_f64() {
                Value::Float(f)
            } else {
                Value::Text(n.to_string())
            }
        }
        serde_json::Value::String(s) => Value::Text(s),
        serde_json::Value::Array(elements) => {
            Value::Array(elements.into_iter().map(from_json).collect())
        }
        serde_json::Value::Object(fields) => Value::Record(
            fields
                .into_iter()
                .map(|(name, value)| Field {
                    name,
                    value: from_json(value),
                })
                .collect(),
        ),
    }
}
