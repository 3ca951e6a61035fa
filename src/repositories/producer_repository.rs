// src/repositories/producer_repository.rs
//
// Producer persistence - lookups by id and by free-text name

use std::sync::Arc;

use rusqlite::{params, Row};

use crate::db::ConnectionPool;
use crate::domain::producer::Producer;
use crate::error::{AppError, AppResult};

#[cfg_attr(test, mockall::automock)]
pub trait ProducerRepository: Send + Sync {
    fn list_all(&self) -> AppResult<Vec<Producer>>;
    fn get_by_id(&self, id: i64) -> AppResult<Option<Producer>>;
    /// Exact-match lookup by name; when several rows share the name the
    /// first one wins.
    fn get_by_name(&self, name: &str) -> AppResult<Option<Producer>>;
    /// Parameterized count of rows matching the name exactly.
    fn count_by_name(&self, name: &str) -> AppResult<i64>;
}

pub struct SqliteProducerRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteProducerRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    /// Map database row to Producer - returns rusqlite::Error for query_map compatibility
    fn row_to_producer(row: &Row) -> Result<Producer, rusqlite::Error> {
        Ok(Producer {
            id: row.get("id")?,
            name: row.get("name")?,
            // Kept as text: upstream rows hold values like "c. 1941".
            year_of_birth: row.get("year_of_birth")?,
            most_famous_movies: row.get("most_famous_movies")?,
            country_of_origin: row.get("country_of_origin")?,
        })
    }
}

impl ProducerRepository for SqliteProducerRepository {
    fn list_all(&self) -> AppResult<Vec<Producer>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT id, name, year_of_birth, most_famous_movies, country_of_origin
             FROM Producers
             ORDER BY id",
        )?;

        let producers: Vec<Producer> = stmt
            .query_map([], Self::row_to_producer)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(producers)
    }

    fn get_by_id(&self, id: i64) -> AppResult<Option<Producer>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT id, name, year_of_birth, most_famous_movies, country_of_origin
             FROM Producers WHERE id = ?1",
        )?;

        match stmt.query_row(params![id], Self::row_to_producer) {
            Ok(producer) => Ok(Some(producer)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn get_by_name(&self, name: &str) -> AppResult<Option<Producer>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT id, name, year_of_birth, most_famous_movies, country_of_origin
             FROM Producers WHERE name = ?1
             ORDER BY id
             LIMIT 1",
        )?;

        match stmt.query_row(params![name], Self::row_to_producer) {
            Ok(producer) => Ok(Some(producer)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn count_by_name(&self, name: &str) -> AppResult<i64> {
        let conn = self.pool.get()?;

        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM Producers WHERE name = ?1",
            params![name],
            |row| row.get(0),
        )?;

        Ok(count)
    }
}
