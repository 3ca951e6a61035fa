// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file MUST declare all domain modules and re-export their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod actor;
pub mod catalog;
pub mod credits;
pub mod genre;
pub mod movie;
pub mod producer;
pub mod watch_list;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Entities
pub use actor::Actor;
pub use movie::{split_multi_valued, validate_movie, Movie};
pub use producer::Producer;

// Derived data
pub use catalog::{CatalogSnapshot, ALL_GENRES};
pub use genre::GenreIndex;

// Resolution value objects
pub use credits::ProducerCredit;

// Curation
pub use watch_list::WantToWatchList;

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
