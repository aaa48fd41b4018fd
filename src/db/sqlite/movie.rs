//! SQLite MovieRepository implementation.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::db::utils::{current_date, current_timestamp};
use crate::db::{DbError, DbResult, Id, Movie, MovieRepository};

const MOVIE_COLUMNS: &str =
    "id, name, cover_url, description, score, status, rental_status, created_at, modified_at";

/// SQLx-backed movie repository.
pub struct SqliteMovieRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

fn movie_from_row(row: &SqliteRow) -> Result<Movie, sqlx::Error> {
    Ok(Movie {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        cover_url: row.try_get("cover_url")?,
        description: row.try_get("description")?,
        score: row.try_get("score")?,
        status: row.try_get("status")?,
        rental_status: row.try_get("rental_status")?,
        created_at: row.try_get("created_at")?,
        modified_at: row.try_get("modified_at")?,
    })
}

impl<'a> MovieRepository for SqliteMovieRepository<'a> {
    async fn list(&self) -> DbResult<Vec<Movie>> {
        let rows = sqlx::query(&format!("SELECT {} FROM movies ORDER BY id", MOVIE_COLUMNS))
            .fetch_all(self.pool)
            .await?;

        let movies = rows
            .iter()
            .map(movie_from_row)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(movies)
    }

    async fn get(&self, id: Id) -> DbResult<Movie> {
        let row = sqlx::query(&format!("SELECT {} FROM movies WHERE id = ?", MOVIE_COLUMNS))
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        let row = row.ok_or_else(|| DbError::movie_not_found(id))?;
        Ok(movie_from_row(&row)?)
    }

    async fn create(&self, movie: &Movie) -> DbResult<Movie> {
        // Caller-supplied dates win; missing ones are stamped now
        let created_at = movie.created_at.unwrap_or_else(current_date);
        let modified_at = movie.modified_at.unwrap_or_else(current_timestamp);

        let result = sqlx::query(
            "INSERT INTO movies (name, cover_url, description, score, status, rental_status, created_at, modified_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&movie.name)
        .bind(&movie.cover_url)
        .bind(&movie.description)
        .bind(movie.score)
        .bind(&movie.status)
        .bind(&movie.rental_status)
        .bind(created_at)
        .bind(modified_at)
        .execute(self.pool)
        .await?;

        if result.rows_affected() != 1 {
            return Err(DbError::Constraint {
                message: format!(
                    "insert into movies affected {} rows",
                    result.rows_affected()
                ),
            });
        }

        Ok(Movie {
            id: result.last_insert_rowid(),
            created_at: Some(created_at),
            modified_at: Some(modified_at),
            ..movie.clone()
        })
    }

    async fn update(&self, movie: &Movie) -> DbResult<Movie> {
        // modified_at is always server time, never the caller's value
        let row = sqlx::query(&format!(
            "UPDATE movies SET name = ?, cover_url = ?, description = ?, score = ?, status = ?, \
             rental_status = ?, modified_at = ? WHERE id = ? RETURNING {}",
            MOVIE_COLUMNS
        ))
        .bind(&movie.name)
        .bind(&movie.cover_url)
        .bind(&movie.description)
        .bind(movie.score)
        .bind(&movie.status)
        .bind(&movie.rental_status)
        .bind(current_timestamp())
        .bind(movie.id)
        .fetch_optional(self.pool)
        .await?;

        let row = row.ok_or_else(|| DbError::movie_not_found(movie.id))?;
        Ok(movie_from_row(&row)?)
    }

    async fn delete(&self, id: Id) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM movies WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::movie_not_found(id));
        }

        Ok(())
    }

    async fn update_rental_status(&self, id: Id, rental_status: &str) -> DbResult<()> {
        let result = sqlx::query("UPDATE movies SET rental_status = ? WHERE id = ?")
            .bind(rental_status)
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::movie_not_found(id));
        }

        Ok(())
    }
}
