use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use uuid::Uuid;

use crate::database::models::{Movie, MoviePayload};
use crate::database::MovieStore;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /movies - create a new movie
#[utoipa::path(
    post,
    path = "/movies",
    request_body = MoviePayload,
    responses(
        (status = 201, description = "Movie created", body = Movie),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Store error")
    ),
    security(("bearer_token" = [])),
    tag = "movies"
)]
pub async fn create_movie(
    State(state): State<AppState>,
    Json(payload): Json<MoviePayload>,
) -> Result<impl IntoResponse, ApiError> {
    let movie = MovieStore::create(&state.pool, &payload).await.map_err(|e| {
        tracing::error!("Error creating movie: {}", e);
        ApiError::from(e)
    })?;

    Ok((StatusCode::CREATED, Json(movie)))
}

/// GET /movies - all movies, unfiltered and unpaginated
#[utoipa::path(
    get,
    path = "/movies",
    responses(
        (status = 200, description = "All movies", body = [Movie]),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Store error")
    ),
    security(("bearer_token" = [])),
    tag = "movies"
)]
pub async fn list_movies(State(state): State<AppState>) -> Result<Json<Vec<Movie>>, ApiError> {
    let movies = MovieStore::list(&state.pool).await?;
    Ok(Json(movies))
}

/// PUT /movies/:id - replace title/year/director on the matching record
#[utoipa::path(
    put,
    path = "/movies/{id}",
    params(("id" = Uuid, Path, description = "Store-assigned movie identifier")),
    request_body = MoviePayload,
    responses(
        (status = 200, description = "Updated movie", body = Movie),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Movie not found"),
        (status = 500, description = "Store error")
    ),
    security(("bearer_token" = [])),
    tag = "movies"
)]
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<MoviePayload>,
) -> Result<Json<Movie>, ApiError> {
    let movie = MovieStore::update(&state.pool, id, &payload)
        .await?
        .ok_or_else(|| ApiError::not_found("Movie not found"))?;

    Ok(Json(movie))
}

/// DELETE /movies/:id - remove the matching record
#[utoipa::path(
    delete,
    path = "/movies/{id}",
    params(("id" = Uuid, Path, description = "Store-assigned movie identifier")),
    responses(
        (status = 200, description = "Movie deleted"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Movie not found"),
        (status = 500, description = "Store error")
    ),
    security(("bearer_token" = [])),
    tag = "movies"
)]
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let deleted = MovieStore::delete(&state.pool, id).await?;
    if !deleted {
        return Err(ApiError::not_found("Movie not found"));
    }

    // Deleting a movie does not update directors referencing it
    Ok(Json(json!({ "message": "Movie deleted successfully" })))
}
