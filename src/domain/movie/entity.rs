use serde::{Deserialize, Serialize};

use crate::domain::actor::Actor;

/// A movie record as it exists in the catalog.
///
/// The id is the storage primary key and the equality key everywhere in this
/// crate. Titles are NOT unique (the rendering layer derives poster paths
/// from them, nothing else may).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    /// Storage primary key, stable across reloads
    pub id: i64,

    /// Display title, non-empty for well-formed records
    pub title: String,

    pub release_year: i32,

    /// Comma-separated genre labels, free text as stored
    pub genre: String,

    pub storyline: Option<String>,
    pub country_of_origin: Option<String>,
    pub filming_locations: Option<String>,
    pub production_companies: Option<String>,
    pub category: Option<String>,

    /// Comma-separated producer names, free text as stored.
    /// Resolved against the Producer catalog on demand, never eagerly.
    pub producers: Option<String>,

    /// Cast in billing order, populated from the association table.
    /// Empty until the loader attaches it.
    #[serde(default)]
    pub cast: Vec<Actor>,
}

impl Movie {
    /// Create a movie with the required fields; optional fields start empty
    pub fn new(id: i64, title: impl Into<String>, release_year: i32, genre: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            release_year,
            genre: genre.into(),
            storyline: None,
            country_of_origin: None,
            filming_locations: None,
            production_companies: None,
            category: None,
            producers: None,
            cast: Vec::new(),
        }
    }

    /// The movie's genre labels: split on comma, trimmed, empties dropped.
    /// `"Action, Drama"` yields `["Action", "Drama"]`, never the raw field.
    pub fn genre_labels(&self) -> Vec<&str> {
        split_multi_valued(&self.genre)
    }

    /// The movie's producer references: split on comma, trimmed, empties
    /// dropped. These are free-text names, not keys.
    pub fn producer_names(&self) -> Vec<&str> {
        self.producers
            .as_deref()
            .map(split_multi_valued)
            .unwrap_or_default()
    }
}

/// Split a comma-separated multi-valued field into trimmed, non-empty tokens.
///
/// The upstream store encodes lists as free text (`"Jane Doe, John Roe"`), so
/// every consumer of such a field goes through here to get identical
/// tokenization.
pub fn split_multi_valued(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_labels_split_and_trimmed() {
        let movie = Movie::new(1, "Heat", 1995, "Action, Drama");
        assert_eq!(movie.genre_labels(), vec!["Action", "Drama"]);
    }

    #[test]
    fn test_empty_genre_yields_no_labels() {
        let movie = Movie::new(2, "Untagged", 2001, "");
        assert!(movie.genre_labels().is_empty());
    }

    #[test]
    fn test_producer_names_absent_field() {
        let movie = Movie::new(3, "Indie", 2010, "Drama");
        assert!(movie.producer_names().is_empty());
    }

    #[test]
    fn test_split_multi_valued_drops_empty_tokens() {
        assert_eq!(
            split_multi_valued(" Jane Doe , , John Roe,"),
            vec!["Jane Doe", "John Roe"]
        );
        assert!(split_multi_valued("  ,  ,").is_empty());
    }
}
