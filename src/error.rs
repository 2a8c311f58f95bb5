//! Error types for the comparator.

use thiserror::Error;

/// Errors that can occur while preparing values for comparison.
///
/// Divergences between the compared values are never errors; they are
/// recorded in the [`crate::ComparisonReport`] instead.
#[derive(Error, Debug)]
pub enum CompareError {
    /// Input could not be converted into the intermediate value tree.
    #[error("Value conversion error: {0}")]
    Convert(#[from] compare_core::ValueError),
}
