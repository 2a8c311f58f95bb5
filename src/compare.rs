//! Recursive comparison core.
//!
//! A single depth-first traversal classifies each value pair as null,
//! scalar, sequence, or composite, dispatches to the matching comparison
//! strategy, and records every divergence it finds. The walk never stops
//! at the first inequality; sibling fields and later sequence elements are
//! still visited so one pass reveals every point of divergence.

use crate::error::CompareError;
use crate::report::{ComparisonReport, Divergence};
use compare_core::{to_value, Value, ValueKind};
use serde::Serialize;
use tracing::{debug, warn};

/// Path name assigned to the root pair.
pub const ROOT_PATH: &str = "Root";

/// Compare two values of the same declared shape, reporting every
/// divergence.
///
/// Both sides are converted into [`Value`] trees through serde before the
/// traversal; taking the same `T` on both sides enforces the same-shape
/// precondition at compile time.
pub fn compare<T: Serialize>(left: &T, right: &T) -> Result<ComparisonReport, CompareError> {
    let left = to_value(left)?;
    let right = to_value(right)?;
    Ok(compare_values(&left, &right))
}

/// Compare two [`Value`] trees, reporting every divergence.
pub fn compare_values(left: &Value, right: &Value) -> ComparisonReport {
    let mut divergences = Vec::new();
    let equal = compare_pair(left, right, ROOT_PATH, &mut divergences);
    debug!(
        "Comparison finished: equal={}, {} divergence(s)",
        equal,
        divergences.len()
    );
    ComparisonReport::new(divergences)
}

/// Dispatch one pair. Returns `true` iff the pair and all of its
/// descendants are equal, appending a record for every divergence found.
fn compare_pair(left: &Value, right: &Value, path: &str, acc: &mut Vec<Divergence>) -> bool {
    if left.is_null() && right.is_null() {
        return true;
    }
    // Exactly one side absent. Checked before classification since an
    // absent value has no kind to classify.
    if left.is_null() || right.is_null() {
        acc.push(Divergence::null_accordance(path, left, right));
        return false;
    }
    match left.kind() {
        // Both-null pairs never reach classification.
        ValueKind::Null => true,
        ValueKind::Scalar => compare_scalar(left, right, path, acc),
        ValueKind::Sequence => compare_sequence(left, right, path, acc),
        ValueKind::Composite => compare_composite(left, right, path, acc),
    }
}

/// Compare two scalar values: three-way comparison where the kind carries
/// an ordering relation, value equality otherwise.
fn compare_scalar(left: &Value, right: &Value, path: &str, acc: &mut Vec<Divergence>) -> bool {
    let equal = match left.scalar_cmp(right) {
        Some(ordering) => ordering.is_eq(),
        None => left == right,
    };
    if !equal {
        debug!("Scalar divergence at '{}'", path);
        acc.push(Divergence::equality(path, left, right));
    }
    equal
}

/// Compare two sequences element-by-element in lockstep.
///
/// A divergence in one element does not stop the walk over the remaining
/// elements; a length mismatch is recorded once, at the position where the
/// cursors first disagree, and ends the walk for this path.
fn compare_sequence(left: &Value, right: &Value, path: &str, acc: &mut Vec<Divergence>) -> bool {
    let (Some(lhs), Some(rhs)) = (left.as_array(), right.as_array()) else {
        // The right side is not a sequence; the same-shape precondition
        // was violated. Report the pair as unequal rather than panic.
        acc.push(Divergence::equality(path, left, right));
        return false;
    };

    let mut equal = true;
    let mut lhs_cursor = lhs.iter();
    let mut rhs_cursor = rhs.iter();
    let mut index = 0usize;
    loop {
        match (lhs_cursor.next(), rhs_cursor.next()) {
            (None, None) => return equal,
            (Some(lv), Some(rv)) => {
                let element_path = format!("{path}[{index}]");
                if !compare_pair(lv, rv, &element_path, acc) {
                    equal = false;
                }
                index += 1;
            }
            // One cursor exhausted before the other: lengths differ.
            _ => {
                debug!("Sequence length divergence at '{}' from index {}", path, index);
                acc.push(Divergence::collection_length(path, left, right));
                return false;
            }
        }
    }
}

/// Compare two composite values field-by-field.
///
/// Fields are enumerated from the left record in declaration order and
/// fetched from the right record by name. Every field is visited even
/// after one diverges, so all divergent fields are recorded.
fn compare_composite(left: &Value, right: &Value, path: &str, acc: &mut Vec<Divergence>) -> bool {
    let (Some(lhs), Some(rhs)) = (left.as_record(), right.as_record()) else {
        // The right side is not a record; see compare_sequence.
        acc.push(Divergence::equality(path, left, right));
        return false;
    };

    let mut equal = true;
    for field in lhs {
        let field_path = format!("{path}.{}", field.name);
        let peer = rhs.iter().find(|f| f.name == field.name);
        let field_equal = match peer {
            Some(peer) => compare_pair(&field.value, &peer.value, &field_path, acc),
            None => {
                warn!("Field '{}' missing on right-hand side", field_path);
                compare_pair(&field.value, &Value::Null, &field_path, acc)
            }
        };
        if !field_equal {
            equal = false;
        }
    }
    equal
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::DivergenceKind;

    #[test]
    fn test_compare_null_pair() {
        let report = compare_values(&Value::Null, &Value::Null);
        assert!(report.is_equal());
        assert!(report.divergences().is_empty());
    }

    #[test]
    fn test_compare_null_accordance() {
        let report = compare_values(&Value::Null, &Value::Int(5));
        assert!(!report.is_equal());
        assert_eq!(report.divergences().len(), 1);
        assert_eq!(report.divergences()[0].kind, DivergenceKind::NullAccordance);
        assert_eq!(report.divergences()[0].path, "Root");

        let report = compare_values(&Value::Int(5), &Value::Null);
        assert_eq!(report.divergences()[0].kind, DivergenceKind::NullAccordance);
    }

    #[test]
    fn test_compare_scalar() {
        assert!(compare_values(&Value::Int(5), &Value::Int(5)).is_equal());

        let report = compare_values(&Value::Int(5), &Value::Int(6));
        assert!(!report.is_equal());
        assert_eq!(report.divergences().len(), 1);
        assert_eq!(report.divergences()[0].kind, DivergenceKind::Equality);
        assert_eq!(report.divergences()[0].path, "Root");
    }

    #[test]
    fn test_compare_bool_falls_back_to_equality() {
        assert!(compare_values(&Value::Bool(true), &Value::Bool(true)).is_equal());
        assert!(!compare_values(&Value::Bool(true), &Value::Bool(false)).is_equal());
    }

    #[test]
    fn test_compare_sequence_element_divergence() {
        let left = Value::array([1i64, 2, 3]);
        let right = Value::array([1i64, 9, 3]);

        let report = compare_values(&left, &right);
        assert!(!report.is_equal());
        assert_eq!(report.divergences().len(), 1);
        assert_eq!(report.divergences()[0].path, "Root[1]");
        assert_eq!(report.divergences()[0].kind, DivergenceKind::Equality);
    }

    #[test]
    fn test_compare_sequence_length_mismatch() {
        let left = Value::array([1i64, 2, 3]);
        let right = Value::array([1i64, 2]);

        let report = compare_values(&left, &right);
        assert_eq!(report.divergences().len(), 1);
        assert_eq!(
            report.divergences()[0].kind,
            DivergenceKind::CollectionLength
        );
        assert_eq!(report.divergences()[0].path, "Root");
    }

    #[test]
    fn test_compare_sequence_reports_all_elements() {
        let left = Value::array([1i64, 2, 3]);
        let right = Value::array([9i64, 2, 7]);

        let report = compare_values(&left, &right);
        let paths: Vec<&str> = report
            .divergences()
            .iter()
            .map(|d| d.path.as_str())
            .collect();
        assert_eq!(paths, ["Root[0]", "Root[2]"]);
    }

    #[test]
    fn test_compare_composite_single_field() {
        let left = Value::record([("A", Value::Int(1)), ("B", Value::from("x"))]);
        let right = Value::record([("A", Value::Int(2)), ("B", Value::from("x"))]);

        let report = compare_values(&left, &right);
        assert_eq!(report.divergences().len(), 1);
        assert_eq!(report.divergences()[0].path, "Root.A");
    }

    #[test]
    fn test_compare_composite_reports_all_fields() {
        let left = Value::record([("A", Value::Int(1)), ("B", Value::from("x"))]);
        let right = Value::record([("A", Value::Int(2)), ("B", Value::from("y"))]);

        let report = compare_values(&left, &right);
        assert!(!report.is_equal());
        let paths: Vec<&str> = report
            .divergences()
            .iter()
            .map(|d| d.path.as_str())
            .collect();
        assert_eq!(paths, ["Root.A", "Root.B"]);
    }

    #[test]
    fn test_compare_empty_record() {
        let report = compare_values(&Value::Record(vec![]), &Value::Record(vec![]));
        assert!(report.is_equal());
    }

    #[test]
    fn test_nested_paths() {
        let left = Value::record([(
            "Items",
            Value::array([Value::record([("Name", Value::from("a"))])]),
        )]);
        let right = Value::record([(
            "Items",
            Value::array([Value::record([("Name", Value::from("b"))])]),
        )]);

        let report = compare_values(&left, &right);
        assert_eq!(report.divergences()[0].path, "Root.Items[0].Name");
    }

    #[test]
    fn test_field_missing_on_right_reported_as_null_accordance() {
        let left = Value::record([("A", Value::Int(1)), ("B", Value::Int(2))]);
        let right = Value::record([("A", Value::Int(1))]);

        let report = compare_values(&left, &right);
        assert_eq!(report.divergences().len(), 1);
        assert_eq!(report.divergences()[0].path, "Root.B");
        assert_eq!(report.divergences()[0].kind, DivergenceKind::NullAccordance);
    }

    #[test]
    fn test_mismatched_kinds_report_equality() {
        // Same-shape precondition violated; best effort, no panic.
        let report = compare_values(&Value::Int(1), &Value::from("1"));
        assert_eq!(report.divergences()[0].kind, DivergenceKind::Equality);

        let report = compare_values(&Value::array([1i64]), &Value::Int(1));
        assert_eq!(report.divergences()[0].kind, DivergenceKind::Equality);
    }

    #[test]
    fn test_bytes_compare_wholesale() {
        let report = compare_values(&Value::bytes(vec![1u8, 2]), &Value::bytes(vec![1u8, 3]));
        // One divergence at the root, never per-byte records.
        assert_eq!(report.divergences().len(), 1);
        assert_eq!(report.divergences()[0].path, "Root");
    }

    #[test]
    fn test_idempotence() {
        let left = Value::record([("A", Value::Int(1)), ("B", Value::from("x"))]);
        let right = Value::record([("A", Value::Int(2)), ("B", Value::from("y"))]);

        let first = compare_values(&left, &right);
        let second = compare_values(&left, &right);
        assert_eq!(first, second);
    }
}
