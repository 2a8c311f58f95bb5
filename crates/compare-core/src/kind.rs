//! Value classification and the scalar comparison capability.

use crate::value::Value;
use std::cmp::Ordering;

/// Classification of a value for dispatching to a comparison strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Absent value
    Null,
    /// Directly comparable leaf value
    Scalar,
    /// Ordered collection compared positionally
    Sequence,
    /// Record compared field-by-field
    Composite,
}

impl Value {
    /// Classify this value.
    ///
    /// Scalar classification takes precedence over sequence classification:
    /// `Bytes` is iterable but compares wholesale, so it is a scalar.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_)
            | Value::Int(_)
            | Value::Float(_)
            | Value::Text(_)
            | Value::Bytes(_)
            | Value::Uuid(_)
            | Value::DateTime(_) => ValueKind::Scalar,
            Value::Array(_) => ValueKind::Sequence,
            Value::Record(_) => ValueKind::Composite,
        }
    }

    /// Three-way comparison for scalar kinds that carry an ordering
    /// relation.
    ///
    /// Returns `None` for kinds compared by equality only (`Bool`) and for
    /// pairs of different kinds; callers fall back to `==` in that case.
    /// Int/Float pairs compare numerically. The capability is fixed per
    /// kind here rather than probed on every comparison.
    pub fn scalar_cmp(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
            (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
            (Value::Int(a), Value::Float(b)) => (*a as f64).partial_cmp(b),
            (Value::Float(a), Value::Int(b)) => a.partial_cmp(&(*b as f64)),
            (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
            (Value::Bytes(a), Value::Bytes(b)) => Some(a.cmp(b)),
            (Value::Uuid(a), Value::Uuid(b)) => Some(a.cmp(b)),
            (Value::DateTime(a), Value::DateTime(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}
