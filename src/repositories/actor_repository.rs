// src/repositories/actor_repository.rs
//
// Actor persistence

use std::sync::Arc;

use rusqlite::{params, Row};

use crate::db::ConnectionPool;
use crate::domain::actor::Actor;
use crate::error::{AppError, AppResult};

#[cfg_attr(test, mockall::automock)]
pub trait ActorRepository: Send + Sync {
    fn list_all(&self) -> AppResult<Vec<Actor>>;
    fn get_by_id(&self, id: i64) -> AppResult<Option<Actor>>;
}

pub struct SqliteActorRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteActorRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    /// Map database row to Actor - returns rusqlite::Error for query_map compatibility
    fn row_to_actor(row: &Row) -> Result<Actor, rusqlite::Error> {
        Ok(Actor {
            id: row.get("ActorID")?,
            name: row.get("Name")?,
            spouse: row.get("Spouse")?,
            biography: row.get("Biography")?,
        })
    }
}

impl ActorRepository for SqliteActorRepository {
    fn list_all(&self) -> AppResult<Vec<Actor>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT ActorID, Name, Spouse, Biography
             FROM Actors
             ORDER BY ActorID",
        )?;

        let actors: Vec<Actor> = stmt
            .query_map([], Self::row_to_actor)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(actors)
    }

    fn get_by_id(&self, id: i64) -> AppResult<Option<Actor>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT ActorID, Name, Spouse, Biography
             FROM Actors WHERE ActorID = ?1",
        )?;

        match stmt.query_row(params![id], Self::row_to_actor) {
            Ok(actor) => Ok(Some(actor)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }
}
