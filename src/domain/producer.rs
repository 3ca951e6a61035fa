// src/domain/producer.rs
//
// Producer Entity
//
// Producers are referenced from movies by NAME (free text), not by key, so
// the name field is what lookups match against. year_of_birth stays a string:
// the upstream data is not guaranteed to hold a parseable number there.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Producer {
    /// Storage primary key
    pub id: i64,

    pub name: Option<String>,
    pub year_of_birth: Option<String>,
    pub most_famous_movies: Option<String>,
    pub country_of_origin: Option<String>,
}

impl Producer {
    pub fn new(id: i64, name: Option<String>) -> Self {
        Self {
            id,
            name,
            year_of_birth: None,
            most_famous_movies: None,
            country_of_origin: None,
        }
    }
}
