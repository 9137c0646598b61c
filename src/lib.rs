//! Safe, dynamic traversal of nested JSON data using path expressions.
//!
//! A path expression like `user.addresses[0]['zip-code']` addresses one
//! location inside an arbitrarily nested structure. This crate validates
//! such expressions with position-accurate diagnostics, tokenizes them into
//! key sequences, and walks any [`PathTarget`] structure along them —
//! reporting missing data as `None` rather than an error, so callers never
//! hand-write per-case navigation code.

pub mod datasource;
pub mod engine;
pub mod error;
mod grammar;
mod parser;

// --- Public API ---
pub use datasource::PathTarget;
pub use engine::{KeyValue, ParentLookup, traverse, traverse_by_keys, traverse_to_parent};
pub use error::PathError;
pub use parser::{parse, to_path};
