// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are UI-friendly representations
// - DTOs NEVER leak domain invariants
// - DTOs are simple, serializable structs
// - Conversion FROM domain entities only (never TO)

use serde::{Deserialize, Serialize};

use crate::domain::{Actor, Movie, Producer, ProducerCredit};

// ============================================================================
// MOVIE DTOs
// ============================================================================

/// Grid-level movie representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieDto {
    pub id: i64,
    pub title: String,
    pub release_year: i32,
    pub genre: String,
    pub category: Option<String>,
}

/// Detail-level movie representation: every descriptive field plus the
/// resolved producer credits and the cast.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieDetailDto {
    pub id: i64,
    pub title: String,
    pub release_year: i32,
    pub genre: String,
    pub storyline: Option<String>,
    pub country_of_origin: Option<String>,
    pub filming_locations: Option<String>,
    pub production_companies: Option<String>,
    pub category: Option<String>,
    pub credits: Vec<ProducerCreditDto>,
    pub cast: Vec<ActorDto>,
}

impl MovieDetailDto {
    /// Assemble the detail view from a movie and its resolved credits.
    pub fn assemble(movie: Movie, credits: Vec<ProducerCredit>) -> Self {
        Self {
            id: movie.id,
            title: movie.title,
            release_year: movie.release_year,
            genre: movie.genre,
            storyline: movie.storyline,
            country_of_origin: movie.country_of_origin,
            filming_locations: movie.filming_locations,
            production_companies: movie.production_companies,
            category: movie.category,
            credits: credits.into_iter().map(ProducerCreditDto::from).collect(),
            cast: movie.cast.into_iter().map(ActorDto::from).collect(),
        }
    }
}

// ============================================================================
// ACTOR / PRODUCER DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorDto {
    pub id: i64,
    pub name: Option<String>,
    pub spouse: Option<String>,
    pub biography: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProducerDto {
    pub id: i64,
    pub name: Option<String>,
    pub year_of_birth: Option<String>,
    pub most_famous_movies: Option<String>,
    pub country_of_origin: Option<String>,
}

/// One producer token of a movie, classified.
///
/// `linked` decides how the UI renders the name: clickable when a producer
/// record backs it, plain text otherwise. A linked credit already carries
/// the record, so the click needs no further lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProducerCreditDto {
    pub name: String,
    pub linked: bool,
    pub producer: Option<ProducerDto>,
}

// ============================================================================
// DETAIL DISPATCH
// ============================================================================

/// What the user selected. One request type for the whole detail surface,
/// resolved by exhaustive match - adding a target variant forces every
/// dispatch site to handle it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", content = "target", rename_all = "snake_case")]
pub enum DetailRequest {
    Movie(i64),
    Actor(i64),
    Producer(String),
}

/// The resolved detail panel content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum DetailView {
    Movie(MovieDetailDto),
    Actor(ActorDto),
    Producer(ProducerDto),
}

// ============================================================================
// CONVERSION HELPERS (Domain → DTO)
// ============================================================================

impl From<Movie> for MovieDto {
    fn from(movie: Movie) -> Self {
        Self {
            id: movie.id,
            title: movie.title,
            release_year: movie.release_year,
            genre: movie.genre,
            category: movie.category,
        }
    }
}

impl From<Actor> for ActorDto {
    fn from(actor: Actor) -> Self {
        Self {
            id: actor.id,
            name: actor.name,
            spouse: actor.spouse,
            biography: actor.biography,
        }
    }
}

impl From<Producer> for ProducerDto {
    fn from(producer: Producer) -> Self {
        Self {
            id: producer.id,
            name: producer.name,
            year_of_birth: producer.year_of_birth,
            most_famous_movies: producer.most_famous_movies,
            country_of_origin: producer.country_of_origin,
        }
    }
}

impl From<ProducerCredit> for ProducerCreditDto {
    fn from(credit: ProducerCredit) -> Self {
        match credit {
            ProducerCredit::Linked { name, producer } => Self {
                name,
                linked: true,
                producer: Some(ProducerDto::from(producer)),
            },
            ProducerCredit::Plain { name } => Self {
                name,
                linked: false,
                producer: None,
            },
        }
    }
}
