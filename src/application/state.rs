// src/application/state.rs

use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::events::{create_event_bus, EventBus};
use crate::repositories::{
    ActorRepository, MovieActorRepository, MovieRepository, ProducerRepository,
    SqliteActorRepository, SqliteMovieActorRepository, SqliteMovieRepository,
    SqliteProducerRepository,
};
use crate::services::{CatalogService, ProducerService, WatchListService};

/// Application state handed to the rendering layer.
/// All fields are Arc-wrapped for thread-safe sharing across calls.
pub struct AppState {
    pub event_bus: Arc<EventBus>,
    pub catalog_service: Arc<CatalogService>,
    pub producer_service: Arc<ProducerService>,
    pub watch_list_service: Arc<WatchListService>,
}

impl AppState {
    /// Wire the default SQLite-backed services over one shared pool.
    ///
    /// The host owns the pool (and ran `initialize_database` on it); this
    /// just assembles repositories, services and the event bus.
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        let event_bus = Arc::new(create_event_bus());

        let movie_repo: Arc<dyn MovieRepository> =
            Arc::new(SqliteMovieRepository::new(pool.clone()));
        let actor_repo: Arc<dyn ActorRepository> =
            Arc::new(SqliteActorRepository::new(pool.clone()));
        let producer_repo: Arc<dyn ProducerRepository> =
            Arc::new(SqliteProducerRepository::new(pool.clone()));
        let movie_actor_repo: Arc<dyn MovieActorRepository> =
            Arc::new(SqliteMovieActorRepository::new(pool.clone()));

        let catalog_service = Arc::new(CatalogService::new(
            movie_repo,
            actor_repo,
            movie_actor_repo,
            event_bus.clone(),
        ));
        let producer_service = Arc::new(ProducerService::new(producer_repo));
        let watch_list_service = Arc::new(WatchListService::new(event_bus.clone()));

        Self {
            event_bus,
            catalog_service,
            producer_service,
            watch_list_service,
        }
    }
}
