// src/repositories/movie_actor_repository.rs
//
// Cast association persistence.
//
// MovieActors is the resolved association (ordered by CastOrder).
// MovieCast holds raw name-based staging rows; populate_movie_actors
// resolves them against Actors in one batch statement.

use std::sync::Arc;

use rusqlite::{params, Row};

use crate::db::ConnectionPool;
use crate::domain::actor::Actor;
use crate::error::AppResult;

#[cfg_attr(test, mockall::automock)]
pub trait MovieActorRepository: Send + Sync {
    fn list_actors_for_movie(&self, movie_id: i64) -> AppResult<Vec<Actor>>;
    /// Rebuild the MovieActors association from the MovieCast staging rows.
    /// Staging is read-only input: its rows persist across rebuilds whether
    /// they matched an actor or not.
    fn populate_movie_actors(&self) -> AppResult<()>;
}

pub struct SqliteMovieActorRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteMovieActorRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn row_to_actor(row: &Row) -> Result<Actor, rusqlite::Error> {
        Ok(Actor {
            id: row.get("ActorID")?,
            name: row.get("Name")?,
            spouse: row.get("Spouse")?,
            biography: row.get("Biography")?,
        })
    }
}

impl MovieActorRepository for SqliteMovieActorRepository {
    fn list_actors_for_movie(&self, movie_id: i64) -> AppResult<Vec<Actor>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT a.ActorID, a.Name, a.Spouse, a.Biography
             FROM MovieActors ma
             JOIN Actors a ON a.ActorID = ma.ActorID
             WHERE ma.MovieID = ?1
             ORDER BY ma.CastOrder, a.ActorID",
        )?;

        let actors: Vec<Actor> = stmt
            .query_map(params![movie_id], Self::row_to_actor)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(actors)
    }

    fn populate_movie_actors(&self) -> AppResult<()> {
        let mut conn = self.pool.get()?;
        let tx = conn.transaction()?;

        // Full rebuild: names are resolved by exact match, staging order
        // becomes cast order, duplicate pairs collapse to the first.
        tx.execute("DELETE FROM MovieActors", [])?;
        tx.execute(
            "INSERT OR IGNORE INTO MovieActors (MovieID, ActorID, CastOrder)
             SELECT mc.MovieID, a.ActorID, mc.rowid
             FROM MovieCast mc
             JOIN Actors a ON a.Name = mc.ActorName",
            [],
        )?;

        tx.commit()?;
        Ok(())
    }
}
