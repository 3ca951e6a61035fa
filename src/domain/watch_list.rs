// src/domain/watch_list.rs
//
// Want-to-Watch List
//
// User-curated set of movies, process-lifetime only: created empty at
// startup, mutated by explicit add requests, never persisted.
//
// INVARIANTS:
// - Insertion order is preserved
// - Deduplicated by MovieID, never by title (titles are not unique)
// - No removal operation; the list only grows within a session

use serde::{Deserialize, Serialize};

use crate::domain::movie::Movie;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WantToWatchList {
    movies: Vec<Movie>,
}

impl WantToWatchList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a movie unless one with the same id is already present.
    /// Returns whether the movie was actually added, so callers can tell an
    /// insertion from a no-op.
    pub fn add(&mut self, movie: Movie) -> bool {
        if self.contains(movie.id) {
            return false;
        }
        self.movies.push(movie);
        true
    }

    pub fn contains(&self, movie_id: i64) -> bool {
        self.movies.iter().any(|m| m.id == movie_id)
    }

    /// The curated movies in insertion order
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_is_idempotent_by_id() {
        let mut list = WantToWatchList::new();

        assert!(list.add(Movie::new(1, "Heat", 1995, "Action")));
        // Same id, different clone: still a no-op
        assert!(!list.add(Movie::new(1, "Heat", 1995, "Action")));

        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut list = WantToWatchList::new();
        list.add(Movie::new(3, "C", 2003, "Drama"));
        list.add(Movie::new(1, "A", 2001, "Drama"));
        list.add(Movie::new(2, "B", 2002, "Drama"));

        let ids: Vec<i64> = list.movies().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_same_title_different_id_both_kept() {
        let mut list = WantToWatchList::new();
        assert!(list.add(Movie::new(1, "The Remake", 1978, "Horror")));
        assert!(list.add(Movie::new(2, "The Remake", 2004, "Horror")));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_starts_empty() {
        let list = WantToWatchList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }
}
