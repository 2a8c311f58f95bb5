//! Core value model for the deep-compare library.
//!
//! This crate provides the foundational types the comparator is built on:
//!
//! - [`Value`] - Type-agnostic runtime value tree
//! - [`Field`] - Named record field, kept in declaration order
//! - [`ValueKind`] - Classification into null / scalar / sequence / composite
//! - [`to_value`] - Conversion from any `serde::Serialize` type
//!
//! # Architecture
//!
//! The compare-core crate sits at the foundation of the workspace:
//!
//! ```text
//! compare-core (this crate)
//!    │
//!    └─── deep-compare  (dispatcher, comparators, divergence reports)
//! ```
//!
//! # Example
//!
//! ```rust
//! use compare_core::{to_value, Value, ValueKind};
//!
//! let value = to_value(&vec![1i64, 2, 3]).unwrap();
//! assert_eq!(value.kind(), ValueKind::Sequence);
//! assert_eq!(value, Value::array([1i64, 2, 3]));
//! ```

pub mod convert;
pub mod kind;
pub mod value;

// Re-exports for convenience
pub use convert::{to_value, ValueError};
pub use kind::ValueKind;
pub use value::{Field, Value};
