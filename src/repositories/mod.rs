// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO invariant enforcement
// - NO event emission
// - NO cross-repository calls
// - Explicit SQL only

pub mod movie_repository;
pub mod actor_repository;
pub mod producer_repository;
pub mod movie_actor_repository;

pub use movie_repository::{MovieRepository, MovieScan, SqliteMovieRepository};
pub use actor_repository::{ActorRepository, SqliteActorRepository};
pub use producer_repository::{ProducerRepository, SqliteProducerRepository};
pub use movie_actor_repository::{MovieActorRepository, SqliteMovieActorRepository};

#[cfg(test)]
pub use movie_repository::MockMovieRepository;
#[cfg(test)]
pub use actor_repository::MockActorRepository;
#[cfg(test)]
pub use producer_repository::MockProducerRepository;
#[cfg(test)]
pub use movie_actor_repository::MockMovieActorRepository;
