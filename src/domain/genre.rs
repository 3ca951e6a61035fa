// src/domain/genre.rs
//
// Genre Index - Derived Data
//
// Maps genre label -> movies carrying that label, derived in full from the
// loaded movie collection on every catalog load. Never updated
// incrementally.
//
// INVARIANTS:
// - Labels are the trimmed comma-separated tokens of each movie's genre
//   field, case-sensitive as stored
// - A movie appears at most once per label, deduplicated by MovieID
// - Label iteration order is first-appearance order
// - Movie order within a label is the order movies were processed

use std::collections::HashMap;

use crate::domain::movie::Movie;

#[derive(Debug, Clone, Default)]
pub struct GenreIndex {
    /// Labels in order of first appearance
    labels: Vec<String>,

    by_label: HashMap<String, Vec<Movie>>,
}

impl GenreIndex {
    /// Build the index from a movie collection.
    ///
    /// Deterministic: the same input produces the same index, so rebuilding
    /// is idempotent. Movies whose genre field yields no labels simply do
    /// not appear; they are still part of the unfiltered collection.
    pub fn build(movies: &[Movie]) -> Self {
        let mut index = GenreIndex::default();

        for movie in movies {
            for label in movie.genre_labels() {
                let entry = match index.by_label.get_mut(label) {
                    Some(entry) => entry,
                    None => {
                        index.labels.push(label.to_string());
                        index.by_label.entry(label.to_string()).or_default()
                    }
                };

                // Dedup strictly by id: malformed input like "Action, Action"
                // must not list the movie twice under one label.
                if !entry.iter().any(|m| m.id == movie.id) {
                    entry.push(movie.clone());
                }
            }
        }

        index
    }

    /// Movies under a label; empty when the label is absent. Never an error.
    pub fn movies_for(&self, label: &str) -> &[Movie] {
        self.by_label
            .get(label)
            .map(|movies| movies.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains_label(&self, label: &str) -> bool {
        self.by_label.contains_key(label)
    }

    /// Distinct labels in first-appearance order
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Distinct labels sorted lexicographically, for filter-option rendering
    pub fn sorted_labels(&self) -> Vec<String> {
        let mut labels = self.labels.clone();
        labels.sort();
        labels
    }

    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
