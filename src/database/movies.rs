use sqlx::PgPool;
use uuid::Uuid;

use super::models::{Movie, MoviePayload};
use super::DatabaseError;

/// Create/read/update/delete access to the movies table.
pub struct MovieStore;

impl MovieStore {
    /// Insert a new movie and return it with its assigned identifier.
    pub async fn create(pool: &PgPool, payload: &MoviePayload) -> Result<Movie, DatabaseError> {
        let movie = sqlx::query_as::<_, Movie>(
            r#"
            INSERT INTO movies (title, "year", director)
            VALUES ($1, $2, $3)
            RETURNING id, title, "year", director
            "#,
        )
        .bind(&payload.title)
        .bind(payload.year)
        .bind(&payload.director)
        .fetch_one(pool)
        .await?;

        Ok(movie)
    }

    /// All movies, unfiltered, in store-native order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Movie>, DatabaseError> {
        let movies = sqlx::query_as::<_, Movie>(
            r#"SELECT id, title, "year", director FROM movies"#,
        )
        .fetch_all(pool)
        .await?;

        Ok(movies)
    }

    /// Replace all fields on the matching record. None when no record matches.
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        payload: &MoviePayload,
    ) -> Result<Option<Movie>, DatabaseError> {
        let movie = sqlx::query_as::<_, Movie>(
            r#"
            UPDATE movies
            SET title = $2, "year" = $3, director = $4
            WHERE id = $1
            RETURNING id, title, "year", director
            "#,
        )
        .bind(id)
        .bind(&payload.title)
        .bind(payload.year)
        .bind(&payload.director)
        .fetch_optional(pool)
        .await?;

        Ok(movie)
    }

    /// Remove the matching record. Returns false when no record matches.
    /// Referencing directors are left untouched (accepted inconsistency).
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, DatabaseError> {
        let deleted = sqlx::query_scalar::<_, Uuid>(
            "DELETE FROM movies WHERE id = $1 RETURNING id",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(deleted.is_some())
    }
}
