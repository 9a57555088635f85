use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A stored movie record. The identifier is store-assigned; `director` is
/// free text, not a reference to a director record.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Movie {
    pub id: Uuid,
    pub title: String,
    pub year: i32,
    pub director: String,
}

/// Request body for creating or replacing a movie.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct MoviePayload {
    pub title: String,
    pub year: i32,
    pub director: String,
}
