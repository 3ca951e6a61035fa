// src/repositories/movie_repository.rs
//
// Movie persistence - read side of the catalog

use std::sync::Arc;

use rusqlite::{params, Row};

use crate::db::ConnectionPool;
use crate::domain::movie::Movie;
use crate::error::{AppError, AppResult};

/// Result of a full catalog scan: surviving rows plus the count of rows
/// dropped by the per-row mapping policy.
#[derive(Debug, Default)]
pub struct MovieScan {
    pub movies: Vec<Movie>,
    pub rows_skipped: usize,
}

#[cfg_attr(test, mockall::automock)]
pub trait MovieRepository: Send + Sync {
    fn list_all(&self) -> AppResult<MovieScan>;
    fn get_by_id(&self, id: i64) -> AppResult<Option<Movie>>;
}

pub struct SqliteMovieRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteMovieRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    /// Map database row to Movie - returns rusqlite::Error for query_map compatibility
    ///
    /// Text columns are lenient: NULL Title and NULL Genre map to the empty
    /// string. ReleaseYear must be an integer; anything else fails the row.
    fn row_to_movie(row: &Row) -> Result<Movie, rusqlite::Error> {
        let id: i64 = row.get("MovieID")?;
        let title: Option<String> = row.get("Title")?;
        let release_year: i32 = row.get("ReleaseYear")?;
        let genre: Option<String> = row.get("Genre")?;

        Ok(Movie {
            id,
            title: title.unwrap_or_default(),
            release_year,
            genre: genre.unwrap_or_default(),
            storyline: row.get("Storyline")?,
            country_of_origin: row.get("CountryOfOrigin")?,
            filming_locations: row.get("FilmingLocations")?,
            production_companies: row.get("ProductionCompanies")?,
            category: row.get("Category")?,
            producers: row.get("Producers")?,
            cast: Vec::new(),
        })
    }
}

impl MovieRepository for SqliteMovieRepository {
    fn list_all(&self) -> AppResult<MovieScan> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT MovieID, Title, ReleaseYear, Genre, Storyline,
                    CountryOfOrigin, FilmingLocations, ProductionCompanies,
                    Category, Producers
             FROM Movies
             ORDER BY MovieID",
        )?;

        let rows = stmt.query_map([], Self::row_to_movie)?;

        // A row that fails mapping is dropped and logged; the rest of the
        // catalog still loads. A storage failure mid-scan is not a row
        // problem and aborts the whole scan.
        let mut scan = MovieScan::default();
        for row in rows {
            match row {
                Ok(movie) => scan.movies.push(movie),
                Err(e @ rusqlite::Error::InvalidColumnType(..))
                | Err(e @ rusqlite::Error::FromSqlConversionFailure(..)) => {
                    scan.rows_skipped += 1;
                    log::warn!("Dropping unmappable Movies row: {}", e);
                }
                Err(e) => return Err(AppError::Database(e)),
            }
        }

        Ok(scan)
    }

    fn get_by_id(&self, id: i64) -> AppResult<Option<Movie>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT MovieID, Title, ReleaseYear, Genre, Storyline,
                    CountryOfOrigin, FilmingLocations, ProductionCompanies,
                    Category, Producers
             FROM Movies WHERE MovieID = ?1",
        )?;

        match stmt.query_row(params![id], Self::row_to_movie) {
            Ok(movie) => Ok(Some(movie)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e @ rusqlite::Error::InvalidColumnType(..))
            | Err(e @ rusqlite::Error::FromSqlConversionFailure(..)) => Err(AppError::Mapping {
                table: "Movies",
                detail: e.to_string(),
            }),
            Err(e) => Err(AppError::Database(e)),
        }
    }
}
