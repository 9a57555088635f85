use sqlx::PgPool;
use uuid::Uuid;

use super::models::{Director, DirectorCreate, DirectorUpdate};
use super::DatabaseError;

/// Create/read/update/delete access to the directors table.
///
/// Directors are addressed by their caller-assigned numeric id, not a
/// store-assigned identifier.
pub struct DirectorStore;

impl DirectorStore {
    /// Resolve movie titles to stored identifiers, restricted to the supplied
    /// title set. The caller compares the resolved count against the requested
    /// count to detect unknown titles.
    pub async fn resolve_titles(
        pool: &PgPool,
        titles: &[String],
    ) -> Result<Vec<Uuid>, DatabaseError> {
        if titles.is_empty() {
            return Ok(Vec::new());
        }

        let ids = sqlx::query_scalar::<_, Uuid>(
            "SELECT id FROM movies WHERE title = ANY($1)",
        )
        .bind(titles)
        .fetch_all(pool)
        .await?;

        Ok(ids)
    }

    /// Insert a new director whose movies field holds already-resolved ids.
    pub async fn create(
        pool: &PgPool,
        payload: &DirectorCreate,
        movie_ids: &[Uuid],
    ) -> Result<Director, DatabaseError> {
        let director = sqlx::query_as::<_, Director>(
            r#"
            INSERT INTO directors (id, name, country, movies)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, country, movies
            "#,
        )
        .bind(payload.id)
        .bind(&payload.name)
        .bind(&payload.country)
        .bind(movie_ids)
        .fetch_one(pool)
        .await?;

        Ok(director)
    }

    /// All directors, unfiltered.
    pub async fn list(pool: &PgPool) -> Result<Vec<Director>, DatabaseError> {
        let directors = sqlx::query_as::<_, Director>(
            "SELECT id, name, country, movies FROM directors",
        )
        .fetch_all(pool)
        .await?;

        Ok(directors)
    }

    /// Look up a director by its caller-assigned id.
    pub async fn get(pool: &PgPool, id: i64) -> Result<Option<Director>, DatabaseError> {
        let director = sqlx::query_as::<_, Director>(
            "SELECT id, name, country, movies FROM directors WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(director)
    }

    /// Replace name/country/movies on the matching record. The movies field is
    /// written verbatim; no title resolution on update.
    pub async fn update(
        pool: &PgPool,
        id: i64,
        payload: &DirectorUpdate,
    ) -> Result<Option<Director>, DatabaseError> {
        let director = sqlx::query_as::<_, Director>(
            r#"
            UPDATE directors
            SET name = $2, country = $3, movies = $4
            WHERE id = $1
            RETURNING id, name, country, movies
            "#,
        )
        .bind(id)
        .bind(&payload.name)
        .bind(&payload.country)
        .bind(&payload.movies)
        .fetch_optional(pool)
        .await?;

        Ok(director)
    }

    /// Remove the matching record. Returns false when no record matches.
    pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, DatabaseError> {
        let deleted = sqlx::query_scalar::<_, i64>(
            "DELETE FROM directors WHERE id = $1 RETURNING id",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(deleted.is_some())
    }
}
