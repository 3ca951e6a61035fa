// src/error/mod.rs
//
// Crate-wide error taxonomy.
//
// Three classes matter to callers:
// - data access (connection/query/pool/timeout): any storage call may fail
// - mapping (a fetched row missing a required field): scoped to that row
// - not found: a normal lookup outcome, expressed as Option at the
//   repository layer and as AppError::NotFound only at the UI boundary

pub mod types;

pub use types::{AppError, AppResult};
