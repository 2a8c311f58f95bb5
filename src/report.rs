//! Divergence records and the comparison report.

use compare_core::Value;
use serde::Serialize;

/// Kind of a recorded divergence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DivergenceKind {
    /// Exactly one side is null.
    NullAccordance,
    /// Values are unequal.
    Equality,
    /// Sequences have different lengths.
    CollectionLength,
}

/// A single recorded point of inequality between the compared values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Divergence {
    /// Dotted/bracketed location within the root value, e.g. `Root.Items[2].Name`.
    pub path: String,
    /// Divergence classification.
    pub kind: DivergenceKind,
    /// Human-readable description.
    pub message: String,
    /// Left-side value at this path.
    pub left: Value,
    /// Right-side value at this path.
    pub right: Value,
}

impl Divergence {
    /// Record that exactly one side is null.
    pub(crate) fn null_accordance(path: &str, left: &Value, right: &Value) -> Self {
        Self {
            path: path.to_string(),
            kind: DivergenceKind::NullAccordance,
            message: format!(
                "Null accordance of property '{path}' is different in instances: \
                 left value = '{left}', right value = '{right}'"
            ),
            left: left.clone(),
            right: right.clone(),
        }
    }

    /// Record that two values are unequal.
    pub(crate) fn equality(path: &str, left: &Value, right: &Value) -> Self {
        Self {
            path: path.to_string(),
            kind: DivergenceKind::Equality,
            message: format!(
                "Property '{path}' is not equal in instances: \
                 left value = '{left}', right value = '{right}'"
            ),
            left: left.clone(),
            right: right.clone(),
        }
    }

    /// Record that two sequences have different lengths. The message names
    /// only the path since the lengths rather than the values differ.
    pub(crate) fn collection_length(path: &str, left: &Value, right: &Value) -> Self {
        Self {
            path: path.to_string(),
            kind: DivergenceKind::CollectionLength,
            message: format!("Property '{path}' has different lengths"),
            left: left.clone(),
            right: right.clone(),
        }
    }
}

/// Outcome of a single top-level comparison.
///
/// Holds every divergence found during the traversal, in depth-first,
/// left-to-right discovery order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ComparisonReport {
    divergences: Vec<Divergence>,
}

impl ComparisonReport {
    pub(crate) fn new(divergences: Vec<Divergence>) -> Self {
        Self { divergences }
    }

    /// Check if the compared values were equal.
    pub fn is_equal(&self) -> bool {
        self.divergences.is_empty()
    }

    /// All recorded divergences in discovery order.
    pub fn divergences(&self) -> &[Divergence] {
        &self.divergences
    }

    /// Consume the report, yielding the recorded divergences.
    pub fn into_divergences(self) -> Vec<Divergence> {
        self.divergences
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        if self.is_equal() {
            "Comparison PASSED: no divergences".to_string()
        } else {
            format!(
                "Comparison FAILED: {} divergence(s), first at '{}'",
                self.divergences.len(),
                self.divergences[0].path
            )
        }
    }
}

impl IntoIterator for ComparisonReport {
    type Item = Divergence;
    type IntoIter = std::vec::IntoIter<Divergence>;

    fn into_iter(self) -> Self::IntoIter {
        self.divergences.into_iter()
    }
}
