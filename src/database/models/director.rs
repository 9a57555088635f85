use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A stored director record. The identifier is assigned by the caller, not
/// the store; `movies` holds the ids of referenced movie records.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Director {
    pub id: i64,
    pub name: String,
    pub country: String,
    pub movies: Vec<Uuid>,
}

/// Request body for creating a director. Movies are referenced by title and
/// resolved to stored identifiers before the write.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct DirectorCreate {
    pub id: i64,
    pub name: String,
    pub country: String,
    pub movies: Vec<String>,
}

/// Request body for updating a director. The `movies` field is written as
/// given (movie ids, no title resolution).
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct DirectorUpdate {
    pub name: String,
    pub country: String,
    pub movies: Vec<Uuid>,
}
