use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::database::models::{Director, DirectorCreate, DirectorUpdate};
use crate::database::DirectorStore;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /directors - create a new director
///
/// Referenced movies are supplied as titles and resolved to stored ids. If the
/// resolved count differs from the requested count the whole operation is
/// rejected and nothing is written.
#[utoipa::path(
    post,
    path = "/directors",
    request_body = DirectorCreate,
    responses(
        (status = 201, description = "Director created", body = Director),
        (status = 400, description = "Some movie titles were not found"),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Store error")
    ),
    security(("bearer_token" = [])),
    tag = "directors"
)]
pub async fn create_director(
    State(state): State<AppState>,
    Json(payload): Json<DirectorCreate>,
) -> Result<impl IntoResponse, ApiError> {
    let movie_ids = DirectorStore::resolve_titles(&state.pool, &payload.movies).await?;
    if movie_ids.len() != payload.movies.len() {
        return Err(ApiError::bad_request("Some movies were not found"));
    }

    let director = DirectorStore::create(&state.pool, &payload, &movie_ids)
        .await
        .map_err(|e| {
            tracing::error!("Error creating director: {}", e);
            ApiError::from(e)
        })?;

    Ok((StatusCode::CREATED, Json(director)))
}

/// GET /directors - all directors, unfiltered and unpaginated
#[utoipa::path(
    get,
    path = "/directors",
    responses(
        (status = 200, description = "All directors", body = [Director]),
        (status = 401, description = "Missing or invalid token"),
        (status = 500, description = "Store error")
    ),
    security(("bearer_token" = [])),
    tag = "directors"
)]
pub async fn list_directors(
    State(state): State<AppState>,
) -> Result<Json<Vec<Director>>, ApiError> {
    let directors = DirectorStore::list(&state.pool).await?;
    Ok(Json(directors))
}

/// GET /directors/:id - single director by its caller-assigned id
#[utoipa::path(
    get,
    path = "/directors/{id}",
    params(("id" = i64, Path, description = "Caller-assigned director id")),
    responses(
        (status = 200, description = "Director found", body = Director),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Director not found"),
        (status = 500, description = "Store error")
    ),
    security(("bearer_token" = [])),
    tag = "directors"
)]
pub async fn get_director(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Director>, ApiError> {
    let director = DirectorStore::get(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Director not found"))?;

    Ok(Json(director))
}

/// PUT /directors/:id - replace name/country/movies on the matching record
///
/// Unlike create, the movies field is written as given (movie ids, no title
/// resolution).
#[utoipa::path(
    put,
    path = "/directors/{id}",
    params(("id" = i64, Path, description = "Caller-assigned director id")),
    request_body = DirectorUpdate,
    responses(
        (status = 200, description = "Updated director", body = Director),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Director not found"),
        (status = 500, description = "Store error")
    ),
    security(("bearer_token" = [])),
    tag = "directors"
)]
pub async fn update_director(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<DirectorUpdate>,
) -> Result<Json<Director>, ApiError> {
    let director = DirectorStore::update(&state.pool, id, &payload)
        .await?
        .ok_or_else(|| ApiError::not_found("Director not found"))?;

    Ok(Json(director))
}

/// DELETE /directors/:id - remove the matching record
#[utoipa::path(
    delete,
    path = "/directors/{id}",
    params(("id" = i64, Path, description = "Caller-assigned director id")),
    responses(
        (status = 200, description = "Director deleted"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Director not found"),
        (status = 500, description = "Store error")
    ),
    security(("bearer_token" = [])),
    tag = "directors"
)]
pub async fn delete_director(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let deleted = DirectorStore::delete(&state.pool, id).await?;
    if !deleted {
        return Err(ApiError::not_found("Director not found"));
    }

    Ok(Json(json!({ "message": "Director deleted successfully" })))
}
