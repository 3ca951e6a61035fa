// src/services/watch_list_service_tests.rs
//
// Watch-List Service Tests
//
// INVARIANTS TESTED:
// - Identity is the movie id: same id never enters twice, same title may
// - Insertion order is preserved
// - MovieAddedToWatchList fires once per distinct movie, never on duplicates

#[cfg(test)]
mod tests {
    use std::sync::{Arc, RwLock};

    use crate::domain::movie::Movie;
    use crate::events::{create_event_bus, MovieAddedToWatchList};
    use crate::services::WatchListService;

    fn movie(id: i64, title: &str) -> Movie {
        Movie::new(id, title, 1997, "Drama")
    }

    #[test]
    fn test_add_is_idempotent_per_id() {
        let service = WatchListService::new(Arc::new(create_event_bus()));

        assert!(service.add(movie(1, "Gattaca")));
        assert!(!service.add(movie(1, "Gattaca")));

        assert_eq!(service.len(), 1);
        assert!(service.contains(1));
        assert!(!service.contains(2));
    }

    #[test]
    fn test_same_title_different_ids_both_enter() {
        let service = WatchListService::new(Arc::new(create_event_bus()));

        assert!(service.add(movie(1, "Solaris")));
        assert!(service.add(movie(2, "Solaris")));

        assert_eq!(service.len(), 2);
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let service = WatchListService::new(Arc::new(create_event_bus()));

        service.add(movie(3, "Stalker"));
        service.add(movie(1, "Mirror"));
        service.add(movie(2, "Nostalghia"));

        let ids: Vec<i64> = service.movies().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_event_fires_once_per_distinct_movie() {
        let bus = Arc::new(create_event_bus());

        let seen: Arc<RwLock<Vec<(i64, String)>>> = Arc::new(RwLock::new(Vec::new()));
        let seen_clone = Arc::clone(&seen);
        bus.subscribe::<MovieAddedToWatchList, _>(move |e| {
            seen_clone.write().unwrap().push((e.movie_id, e.title.clone()));
        });

        let service = WatchListService::new(Arc::clone(&bus));
        service.add(movie(1, "Gattaca"));
        service.add(movie(1, "Gattaca"));
        service.add(movie(2, "Solaris"));

        let seen = seen.read().unwrap();
        assert_eq!(
            *seen,
            vec![(1, "Gattaca".to_string()), (2, "Solaris".to_string())]
        );
    }

    #[test]
    fn test_starts_empty() {
        let service = WatchListService::new(Arc::new(create_event_bus()));

        assert!(service.is_empty());
        assert_eq!(service.len(), 0);
        assert!(service.movies().is_empty());
    }
}
