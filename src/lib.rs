// src/lib.rs
// MovieHub - Local-first movie catalog browser
//
// Architecture:
// - Domain-centric: All business logic lives in domains
// - Event-driven: Services coordinate through events
// - Explicit: No implicit behavior, no magic
// - Local-first: User controls all data
// - Application Layer: UI boundary

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod db;
pub mod domain;
pub mod error;
pub mod events;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    split_multi_valued,
    validate_movie,
    // Actor
    Actor,
    // Derived catalog data
    CatalogSnapshot,
    GenreIndex,
    // Movie
    Movie,
    // Producer
    Producer,
    ProducerCredit,
    // Curation
    WantToWatchList,
    ALL_GENRES,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    create_event_bus,
    // Catalog events
    CatalogReloaded,
    DomainEvent,
    EventBus,
    EventLogEntry,
    MovieActorsPopulated,
    // Watch-list events
    MovieAddedToWatchList,
};

// ============================================================================
// PUBLIC API - Database
// ============================================================================

pub use db::{create_connection_pool, initialize_database, ConnectionPool};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{
    ActorRepository,
    MovieActorRepository,
    MovieRepository,
    MovieScan,
    ProducerRepository,
    SqliteActorRepository,
    SqliteMovieActorRepository,
    SqliteMovieRepository,
    SqliteProducerRepository,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    // Catalog Service
    CatalogReloadSummary,
    CatalogService,
    // Producer Service
    ProducerService,
    // Watch List Service
    WatchListService,
};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{AppState, CatalogFacade, ErrorResponse, ErrorType};

// Re-export application submodules
pub use application::dto;
