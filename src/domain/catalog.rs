// src/domain/catalog.rs
//
// Catalog Snapshot
//
// The owned, immutable value holding one fully loaded movie collection
// together with its derived genre index. The catalog service holds exactly
// one snapshot and swaps it wholesale after a fully successful reload; a
// failed reload leaves the previous snapshot in place, so consumers never
// observe a half-rebuilt index.

use crate::domain::genre::GenreIndex;
use crate::domain::movie::Movie;

/// The synthetic filter option meaning "no filtering"
pub const ALL_GENRES: &str = "All";

#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    movies: Vec<Movie>,
    genre_index: GenreIndex,
}

impl CatalogSnapshot {
    /// Build a snapshot from a freshly loaded movie collection.
    /// The genre index is derived here so both halves always agree.
    pub fn from_movies(movies: Vec<Movie>) -> Self {
        let genre_index = GenreIndex::build(&movies);
        Self {
            movies,
            genre_index,
        }
    }

    /// The full loaded collection, load order preserved
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn genre_index(&self) -> &GenreIndex {
        &self.genre_index
    }

    /// Filter by genre label.
    ///
    /// "All" returns the full collection verbatim - NOT the union of labeled
    /// lists, which would silently drop movies with empty or malformed genre
    /// text. Unknown labels yield an empty slice, never an error.
    pub fn filter_by_genre(&self, label: &str) -> &[Movie] {
        if label == ALL_GENRES {
            &self.movies
        } else {
            self.genre_index.movies_for(label)
        }
    }

    /// Filter options for the UI: "All" first, then the distinct labels in
    /// lexicographic order.
    pub fn genre_options(&self) -> Vec<String> {
        let mut options = Vec::with_capacity(self.genre_index.label_count() + 1);
        options.push(ALL_GENRES.to_string());
        options.extend(self.genre_index.sorted_labels());
        options
    }

    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_returns_full_collection_even_with_unlabeled_movies() {
        let movies = vec![
            Movie::new(1, "Heat", 1995, "Action"),
            Movie::new(2, "Untagged", 2001, ""),
        ];
        let snapshot = CatalogSnapshot::from_movies(movies);

        // The untagged movie is in no genre list but must survive "All"
        let all = snapshot.filter_by_genre(ALL_GENRES);
        assert_eq!(all.len(), 2);
        assert_eq!(snapshot.genre_index().label_count(), 1);
    }

    #[test]
    fn test_unknown_label_is_empty_not_error() {
        let snapshot = CatalogSnapshot::from_movies(vec![Movie::new(1, "Heat", 1995, "Action")]);
        assert!(snapshot.filter_by_genre("Musical").is_empty());
    }

    #[test]
    fn test_genre_options_sorted_with_all_first() {
        let movies = vec![
            Movie::new(1, "B", 2000, "Western, Action"),
            Movie::new(2, "A", 2001, "Drama"),
        ];
        let snapshot = CatalogSnapshot::from_movies(movies);
        assert_eq!(snapshot.genre_options(), vec!["All", "Action", "Drama", "Western"]);
    }
}
