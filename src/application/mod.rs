// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - This layer sits ABOVE the sealed foundation
// - It provides the boundary between UI and Domain (Services)
// - It never modifies sealed components
// - It translates between DTOs and domain entities

pub mod dto;
pub mod error_handling;
pub mod facade;
pub mod state;

pub use dto::*;
pub use error_handling::{ErrorResponse, ErrorType};
pub use facade::{CatalogFacade, DEFAULT_TIMEOUT};
pub use state::AppState;
