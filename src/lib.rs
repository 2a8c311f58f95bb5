//! Structural deep comparison with path-qualified divergence reporting.
//!
//! This library compares two runtime values of the same declared shape and
//! reports every point of divergence, rather than stopping at the first
//! difference or answering with a single boolean. Each divergence names
//! the path where it was found (`Root.Address.City`, `Root.Items[2]`) and
//! why the values differ: one side null, unequal values, or sequences of
//! different lengths. It is intended for test assertions, snapshot
//! verification, and data reconciliation where "which fields diverged" is
//! the question, not just "are they equal".
//!
//! Values are converted into [`Value`] trees through serde and traversed
//! depth-first; divergences are collected in discovery order. There are no
//! configuration options: callers needing field filtering or tolerance
//! comparison layer that on top of the report.
//!
//! # Example
//!
//! ```rust
//! use deep_compare::compare;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct User {
//!     name: String,
//!     age: u32,
//! }
//!
//! # fn main() -> Result<(), deep_compare::CompareError> {
//! let stored = User { name: "Alice".to_string(), age: 30 };
//! let synced = User { name: "Alice".to_string(), age: 31 };
//!
//! let report = compare(&stored, &synced)?;
//! assert!(!report.is_equal());
//! assert_eq!(report.divergences()[0].path, "Root.age");
//! # Ok(())
//! # }
//! ```
//!
//! # Known limitation
//!
//! [`Value`] trees are acyclic by construction, but converting a
//! `Serialize` implementation that recurses into itself will not
//! terminate. Cyclic inputs are out of scope.

pub mod compare;
pub mod error;
pub mod report;

pub use compare::{compare, compare_values, ROOT_PATH};
pub use error::CompareError;
pub use report::{ComparisonReport, Divergence, DivergenceKind};

// Re-export the value model for callers building trees directly
pub use compare_core::{to_value, Field, Value, ValueError, ValueKind};
