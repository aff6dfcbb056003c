//! Repository for the `movies` table.

use catalog_core::types::DbId;
use sqlx::PgPool;

use crate::models::movie::{CreateMovie, Movie, UpdateMovie};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, director, genre, release_year, rating";

/// Provides CRUD operations for movies. Each method is a single statement.
pub struct MovieRepo;

impl MovieRepo {
    /// Every movie, unfiltered and in storage order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies");
        sqlx::query_as::<_, Movie>(&query).fetch_all(pool).await
    }

    /// Insert a new movie, returning the created row with its assigned id.
    ///
    /// Callers validate `input` first; a missing field reaches the `NOT NULL`
    /// constraint and fails as a database error.
    pub async fn create(pool: &PgPool, input: &CreateMovie) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movies (title, director, genre, release_year, rating)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&input.title)
            .bind(&input.director)
            .bind(&input.genre)
            .bind(&input.release_year)
            .bind(&input.rating)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite the columns present in `input`. Returns the number of rows
    /// affected (0 when no movie has this id).
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateMovie) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE movies SET
                title = COALESCE($2, title),
                director = COALESCE($3, director),
                genre = COALESCE($4, genre),
                release_year = COALESCE($5, release_year),
                rating = COALESCE($6, rating)
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.title)
        .bind(&input.director)
        .bind(&input.genre)
        .bind(&input.release_year)
        .bind(&input.rating)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Permanently delete a movie. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
