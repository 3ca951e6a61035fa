// src/application/facade.rs
//
// Async Facade - the UI-facing call surface
//
// RULES:
// - Accepts plain values, returns DTOs
// - Storage-reaching calls run on a blocking thread under a time budget,
//   so the caller's event loop never stalls
// - Snapshot and watch-list reads answer inline (no storage, no budget)
// - Never contains business logic

use std::sync::Arc;
use std::time::Duration;

use crate::application::dto::{
    ActorDto, DetailRequest, DetailView, MovieDetailDto, MovieDto, ProducerDto,
};
use crate::application::error_handling::ErrorResponse;
use crate::application::state::AppState;
use crate::error::{AppError, AppResult};
use crate::services::{CatalogReloadSummary, CatalogService, ProducerService};

/// Time budget for one storage-reaching call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

pub struct CatalogFacade {
    state: Arc<AppState>,
    timeout: Duration,
}

impl CatalogFacade {
    pub fn new(state: Arc<AppState>) -> Self {
        Self::with_timeout(state, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(state: Arc<AppState>, timeout: Duration) -> Self {
        Self { state, timeout }
    }

    // ========================================================================
    // CATALOG
    // ========================================================================

    pub async fn reload_catalog(&self) -> Result<CatalogReloadSummary, ErrorResponse> {
        let catalog = self.state.catalog_service.clone();
        self.run_blocking("reload_catalog", move || catalog.reload_catalog())
            .await
            .map_err(ErrorResponse::from_app_error)
    }

    /// Current snapshot contents. Answers inline from memory.
    pub async fn list_movies(&self) -> Vec<MovieDto> {
        self.state
            .catalog_service
            .movies()
            .into_iter()
            .map(MovieDto::from)
            .collect()
    }

    pub async fn filter_by_genre(&self, label: &str) -> Vec<MovieDto> {
        self.state
            .catalog_service
            .filter_by_genre(label)
            .into_iter()
            .map(MovieDto::from)
            .collect()
    }

    pub async fn genre_options(&self) -> Vec<String> {
        self.state.catalog_service.genre_options()
    }

    pub async fn list_actors(&self) -> Result<Vec<ActorDto>, ErrorResponse> {
        let catalog = self.state.catalog_service.clone();
        let actors = self
            .run_blocking("list_actors", move || catalog.load_actors())
            .await
            .map_err(ErrorResponse::from_app_error)?;

        Ok(actors.into_iter().map(ActorDto::from).collect())
    }

    pub async fn list_producers(&self) -> Result<Vec<ProducerDto>, ErrorResponse> {
        let producers = self.state.producer_service.clone();
        let producers = self
            .run_blocking("list_producers", move || producers.list_producers())
            .await
            .map_err(ErrorResponse::from_app_error)?;

        Ok(producers.into_iter().map(ProducerDto::from).collect())
    }

    // ========================================================================
    // DETAIL DISPATCH
    // ========================================================================

    /// Resolve a detail request into its view. Unknown targets are NotFound.
    pub async fn detail(&self, request: DetailRequest) -> Result<DetailView, ErrorResponse> {
        let catalog = self.state.catalog_service.clone();
        let producers = self.state.producer_service.clone();

        self.run_blocking("detail", move || {
            resolve_detail(&catalog, &producers, request)
        })
        .await
        .map_err(ErrorResponse::from_app_error)
    }

    // ========================================================================
    // WATCH LIST
    // ========================================================================

    /// Add a snapshot movie to the want-to-watch list.
    /// Returns false for a duplicate, NotFound for an id outside the
    /// current snapshot.
    pub async fn add_to_watch_list(&self, movie_id: i64) -> Result<bool, ErrorResponse> {
        let movie = self
            .state
            .catalog_service
            .movies()
            .into_iter()
            .find(|m| m.id == movie_id)
            .ok_or_else(|| ErrorResponse::from_app_error(AppError::NotFound))?;

        Ok(self.state.watch_list_service.add(movie))
    }

    pub async fn watch_list(&self) -> Vec<MovieDto> {
        self.state
            .watch_list_service
            .movies()
            .into_iter()
            .map(MovieDto::from)
            .collect()
    }

    // ========================================================================
    // CAST AGGREGATION
    // ========================================================================

    pub async fn populate_movie_actors(&self) -> Result<(), ErrorResponse> {
        let catalog = self.state.catalog_service.clone();
        self.run_blocking("populate_movie_actors", move || {
            catalog.populate_movie_actors()
        })
        .await
        .map_err(ErrorResponse::from_app_error)
    }

    // ========================================================================
    // INTERNAL
    // ========================================================================

    /// Run a blocking storage operation off the async thread, bounded by
    /// the facade's time budget.
    ///
    /// A timeout returns `AppError::Timeout` immediately but does not cancel
    /// the task: it runs to completion on the blocking pool, so its effect
    /// (a snapshot swap, a batch rebuild) can still land after the report.
    /// Late effects are as atomic as on the untimed path; callers must not
    /// read a timeout as "nothing happened".
    async fn run_blocking<T, F>(&self, op: &'static str, task: F) -> AppResult<T>
    where
        T: Send + 'static,
        F: FnOnce() -> AppResult<T> + Send + 'static,
    {
        let budget = self.timeout;
        match tokio::time::timeout(budget, tokio::task::spawn_blocking(task)).await {
            Ok(Ok(result)) => result,
            Ok(Err(join_error)) => Err(AppError::Other(format!(
                "{} worker failed: {}",
                op, join_error
            ))),
            Err(_) => {
                log::error!("{} exceeded its {:?} budget", op, budget);
                Err(AppError::Timeout(budget))
            }
        }
    }
}

/// Exhaustive dispatch from a tagged request to its view.
fn resolve_detail(
    catalog: &CatalogService,
    producers: &ProducerService,
    request: DetailRequest,
) -> AppResult<DetailView> {
    match request {
        DetailRequest::Movie(movie_id) => {
            let movie = catalog.get_movie(movie_id)?.ok_or(AppError::NotFound)?;
            let credits = producers.resolve_credits(&movie);
            Ok(DetailView::Movie(MovieDetailDto::assemble(movie, credits)))
        }
        DetailRequest::Actor(actor_id) => {
            let actor = catalog.get_actor(actor_id)?.ok_or(AppError::NotFound)?;
            Ok(DetailView::Actor(ActorDto::from(actor)))
        }
        DetailRequest::Producer(name) => {
            let producer = producers.resolve_by_name(&name)?.ok_or(AppError::NotFound)?;
            Ok(DetailView::Producer(ProducerDto::from(producer)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    use crate::application::error_handling::ErrorType;
    use crate::db::{create_connection_pool_at, initialize_database};
    use crate::domain::Movie;
    use crate::events::create_event_bus;
    use crate::repositories::{
        MockActorRepository, MockMovieActorRepository, MockMovieRepository,
        MockProducerRepository, MovieScan,
    };
    use crate::services::WatchListService;

    fn seeded_state() -> (TempDir, Arc<AppState>) {
        let dir = tempfile::tempdir().unwrap();
        let pool = Arc::new(create_connection_pool_at(&dir.path().join("moviehub.db")).unwrap());

        {
            let conn = pool.get().unwrap();
            initialize_database(&conn).unwrap();

            conn.execute(
                "INSERT INTO Movies (MovieID, Title, ReleaseYear, Genre, Producers)
                 VALUES (1, 'Blade Runner', 1982, 'Sci-Fi, Thriller', 'Michael Deeley, Ridley Scott'),
                        (2, 'The Duellists', 1977, 'Drama', NULL)",
                [],
            )
            .unwrap();
            conn.execute(
                "INSERT INTO Actors (ActorID, Name) VALUES (1, 'Harrison Ford'), (2, 'Rutger Hauer')",
                [],
            )
            .unwrap();
            conn.execute(
                "INSERT INTO MovieActors (MovieID, ActorID, CastOrder) VALUES (1, 1, 1), (1, 2, 2)",
                [],
            )
            .unwrap();
            conn.execute(
                "INSERT INTO Producers (id, name, year_of_birth) VALUES (7, 'Michael Deeley', '1932')",
                [],
            )
            .unwrap();
        }

        (dir, Arc::new(AppState::new(pool)))
    }

    #[tokio::test]
    async fn test_reload_then_query_through_facade() {
        let (_dir, state) = seeded_state();
        let facade = CatalogFacade::new(state);

        let summary = facade.reload_catalog().await.unwrap();
        assert_eq!(summary.movies_loaded, 2);
        assert_eq!(summary.rows_skipped, 0);

        let movies = facade.list_movies().await;
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].title, "Blade Runner");

        assert_eq!(
            facade.genre_options().await,
            vec!["All", "Drama", "Sci-Fi", "Thriller"]
        );

        let scifi = facade.filter_by_genre("Sci-Fi").await;
        assert_eq!(scifi.len(), 1);
        assert_eq!(scifi[0].id, 1);
    }

    #[tokio::test]
    async fn test_movie_detail_carries_credits_and_cast() {
        let (_dir, state) = seeded_state();
        let facade = CatalogFacade::new(state);

        let view = facade.detail(DetailRequest::Movie(1)).await.unwrap();
        let detail = match view {
            DetailView::Movie(detail) => detail,
            other => panic!("expected movie detail, got {:?}", other),
        };

        assert_eq!(detail.title, "Blade Runner");

        assert_eq!(detail.credits.len(), 2);
        assert!(detail.credits[0].linked);
        assert_eq!(detail.credits[0].producer.as_ref().unwrap().id, 7);
        assert_eq!(detail.credits[1].name, "Ridley Scott");
        assert!(!detail.credits[1].linked);
        assert!(detail.credits[1].producer.is_none());

        let cast: Vec<Option<&str>> = detail.cast.iter().map(|a| a.name.as_deref()).collect();
        assert_eq!(cast, vec![Some("Harrison Ford"), Some("Rutger Hauer")]);
    }

    #[tokio::test]
    async fn test_detail_dispatch_covers_actor_and_producer() {
        let (_dir, state) = seeded_state();
        let facade = CatalogFacade::new(state);

        match facade.detail(DetailRequest::Actor(2)).await.unwrap() {
            DetailView::Actor(actor) => assert_eq!(actor.name.as_deref(), Some("Rutger Hauer")),
            other => panic!("expected actor detail, got {:?}", other),
        }

        match facade
            .detail(DetailRequest::Producer("Michael Deeley".into()))
            .await
            .unwrap()
        {
            DetailView::Producer(producer) => {
                assert_eq!(producer.id, 7);
                assert_eq!(producer.year_of_birth.as_deref(), Some("1932"));
            }
            other => panic!("expected producer detail, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unknown_detail_targets_are_not_found() {
        let (_dir, state) = seeded_state();
        let facade = CatalogFacade::new(state);

        let err = facade.detail(DetailRequest::Movie(99)).await.unwrap_err();
        assert_eq!(err.error_type, ErrorType::NotFound);

        let err = facade
            .detail(DetailRequest::Producer("Nobody".into()))
            .await
            .unwrap_err();
        assert_eq!(err.error_type, ErrorType::NotFound);
    }

    #[tokio::test]
    async fn test_watch_list_round_trip() {
        let (_dir, state) = seeded_state();
        let facade = CatalogFacade::new(state);
        facade.reload_catalog().await.unwrap();

        assert!(facade.add_to_watch_list(1).await.unwrap());
        assert!(!facade.add_to_watch_list(1).await.unwrap());

        let list = facade.watch_list().await;
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].title, "Blade Runner");

        // Outside the snapshot there is nothing to add.
        let err = facade.add_to_watch_list(42).await.unwrap_err();
        assert_eq!(err.error_type, ErrorType::NotFound);
    }

    #[tokio::test]
    async fn test_timeout_surfaces_as_timeout_error() {
        let mut movie_repo = MockMovieRepository::new();
        movie_repo.expect_list_all().returning(|| {
            std::thread::sleep(Duration::from_millis(200));
            Ok(MovieScan {
                movies: Vec::new(),
                rows_skipped: 0,
            })
        });

        let event_bus = Arc::new(create_event_bus());
        let state = Arc::new(AppState {
            event_bus: event_bus.clone(),
            catalog_service: Arc::new(CatalogService::new(
                Arc::new(movie_repo),
                Arc::new(MockActorRepository::new()),
                Arc::new(MockMovieActorRepository::new()),
                event_bus.clone(),
            )),
            producer_service: Arc::new(ProducerService::new(Arc::new(
                MockProducerRepository::new(),
            ))),
            watch_list_service: Arc::new(WatchListService::new(event_bus)),
        });

        let facade = CatalogFacade::with_timeout(state, Duration::from_millis(10));

        let err = facade.reload_catalog().await.unwrap_err();
        assert_eq!(err.error_type, ErrorType::Timeout);
    }

    #[tokio::test]
    async fn test_timed_out_reload_can_still_land_its_snapshot() {
        let mut movie_repo = MockMovieRepository::new();
        movie_repo.expect_list_all().returning(|| {
            std::thread::sleep(Duration::from_millis(100));
            Ok(MovieScan {
                movies: vec![Movie::new(1, "Late Arrival", 2001, "Drama")],
                rows_skipped: 0,
            })
        });

        let mut movie_actor_repo = MockMovieActorRepository::new();
        movie_actor_repo
            .expect_list_actors_for_movie()
            .returning(|_| Ok(Vec::new()));

        let event_bus = Arc::new(create_event_bus());
        let state = Arc::new(AppState {
            event_bus: event_bus.clone(),
            catalog_service: Arc::new(CatalogService::new(
                Arc::new(movie_repo),
                Arc::new(MockActorRepository::new()),
                Arc::new(movie_actor_repo),
                event_bus.clone(),
            )),
            producer_service: Arc::new(ProducerService::new(Arc::new(
                MockProducerRepository::new(),
            ))),
            watch_list_service: Arc::new(WatchListService::new(event_bus)),
        });

        let facade = CatalogFacade::with_timeout(Arc::clone(&state), Duration::from_millis(10));

        let err = facade.reload_catalog().await.unwrap_err();
        assert_eq!(err.error_type, ErrorType::Timeout);

        // The worker is not cancelled by the timeout; its swap lands after
        // the report.
        let deadline = std::time::Instant::now() + Duration::from_secs(2);
        while state.catalog_service.movie_count() == 0 {
            assert!(
                std::time::Instant::now() < deadline,
                "blocking worker never finished"
            );
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        assert_eq!(state.catalog_service.movies()[0].title, "Late Arrival");
    }
}
