// src/services/catalog_service.rs
//
// Catalog Service - loading, genre indexing, filtering
//
// CRITICAL RULES:
// - The held snapshot is replaced only after a fully successful
//   load + index rebuild ("replace on successful reload")
// - A failed reload leaves the previous snapshot untouched and queryable
// - Filtering is served from the snapshot, never from storage
// - Emits CatalogReloaded / MovieActorsPopulated

use std::sync::{Arc, RwLock};

use serde::Serialize;

use crate::domain::actor::Actor;
use crate::domain::catalog::CatalogSnapshot;
use crate::domain::movie::{validate_movie, Movie};
use crate::error::AppResult;
use crate::events::{CatalogReloaded, EventBus, MovieActorsPopulated};
use crate::repositories::{ActorRepository, MovieActorRepository, MovieRepository};

/// What a successful reload produced. Mirrors the CatalogReloaded event.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogReloadSummary {
    pub movies_loaded: usize,
    pub genres_indexed: usize,
    pub rows_skipped: usize,
}

pub struct CatalogService {
    movie_repo: Arc<dyn MovieRepository>,
    actor_repo: Arc<dyn ActorRepository>,
    movie_actor_repo: Arc<dyn MovieActorRepository>,
    event_bus: Arc<EventBus>,
    snapshot: RwLock<CatalogSnapshot>,
}

impl CatalogService {
    pub fn new(
        movie_repo: Arc<dyn MovieRepository>,
        actor_repo: Arc<dyn ActorRepository>,
        movie_actor_repo: Arc<dyn MovieActorRepository>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            movie_repo,
            actor_repo,
            movie_actor_repo,
            event_bus,
            snapshot: RwLock::new(CatalogSnapshot::default()),
        }
    }

    // ========================================================================
    // LOADING
    // ========================================================================

    /// Load the movie catalog, rebuild the genre index and swap the snapshot.
    ///
    /// The swap happens only after the index is fully built; on any failure
    /// the previous snapshot stays in place and keeps serving queries.
    pub fn reload_catalog(&self) -> AppResult<CatalogReloadSummary> {
        let scan = match fetch_with_retry("movie catalog", || self.movie_repo.list_all()) {
            Ok(scan) => scan,
            Err(e) => {
                log::error!("Catalog reload failed, keeping previous snapshot: {}", e);
                return Err(e);
            }
        };

        let mut movies = scan.movies;
        for movie in &mut movies {
            movie.cast = match self.movie_actor_repo.list_actors_for_movie(movie.id) {
                Ok(cast) => cast,
                Err(e) => {
                    // Degrade to an empty cast; the movie itself still loads.
                    log::warn!("Cast lookup failed for movie {}: {}", movie.id, e);
                    Vec::new()
                }
            };

            // Invariant violations are reported, never rejected: the record
            // stays in the catalog exactly as stored.
            if let Err(e) = validate_movie(movie) {
                log::warn!("Movie {} violates catalog invariants: {}", movie.id, e);
            }
        }

        let snapshot = CatalogSnapshot::from_movies(movies);
        let summary = CatalogReloadSummary {
            movies_loaded: snapshot.movie_count(),
            genres_indexed: snapshot.genre_index().label_count(),
            rows_skipped: scan.rows_skipped,
        };

        *self.snapshot.write().unwrap() = snapshot;

        log::info!(
            "Catalog reloaded: {} movies, {} genres, {} rows skipped",
            summary.movies_loaded,
            summary.genres_indexed,
            summary.rows_skipped
        );

        self.event_bus.emit(CatalogReloaded::new(
            summary.movies_loaded,
            summary.genres_indexed,
            summary.rows_skipped,
        ));

        Ok(summary)
    }

    /// Load all actors straight from storage (the actors grid).
    pub fn load_actors(&self) -> AppResult<Vec<Actor>> {
        fetch_with_retry("actor list", || self.actor_repo.list_all())
    }

    // ========================================================================
    // SNAPSHOT QUERIES
    // ========================================================================

    /// Current snapshot contents, in load order.
    pub fn movies(&self) -> Vec<Movie> {
        self.snapshot.read().unwrap().movies().to_vec()
    }

    /// Movies under a genre label. "All" returns the full collection
    /// verbatim; an unknown label returns an empty list. Never an error.
    pub fn filter_by_genre(&self, label: &str) -> Vec<Movie> {
        self.snapshot.read().unwrap().filter_by_genre(label).to_vec()
    }

    /// Filter options for the genre bar: "All" first, then the distinct
    /// labels sorted lexicographically.
    pub fn genre_options(&self) -> Vec<String> {
        self.snapshot.read().unwrap().genre_options()
    }

    pub fn movie_count(&self) -> usize {
        self.snapshot.read().unwrap().movie_count()
    }

    // ========================================================================
    // POINT LOOKUPS
    // ========================================================================

    /// Fetch one movie by id with its cast attached.
    pub fn get_movie(&self, movie_id: i64) -> AppResult<Option<Movie>> {
        match self.movie_repo.get_by_id(movie_id)? {
            Some(mut movie) => {
                movie.cast = self.movie_actor_repo.list_actors_for_movie(movie.id)?;
                Ok(Some(movie))
            }
            None => Ok(None),
        }
    }

    pub fn get_actor(&self, actor_id: i64) -> AppResult<Option<Actor>> {
        self.actor_repo.get_by_id(actor_id)
    }

    // ========================================================================
    // CAST AGGREGATION
    // ========================================================================

    /// Fire the batch cast aggregation. No result is consumed; the effect
    /// shows up in subsequent cast lookups.
    pub fn populate_movie_actors(&self) -> AppResult<()> {
        self.movie_actor_repo.populate_movie_actors()?;
        self.event_bus.emit(MovieActorsPopulated::new());
        Ok(())
    }
}

/// Retry a storage fetch once when it fails with a data-access error.
/// Anything else surfaces immediately.
pub(crate) fn fetch_with_retry<T>(
    what: &str,
    fetch: impl Fn() -> AppResult<T>,
) -> AppResult<T> {
    match fetch() {
        Ok(value) => Ok(value),
        Err(e) if e.is_data_access() => {
            log::warn!("{} fetch failed, retrying once: {}", what, e);
            fetch()
        }
        Err(e) => Err(e),
    }
}
