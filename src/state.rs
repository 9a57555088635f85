use sqlx::PgPool;

/// Shared application state injected into every handler.
/// The pool is the only process-wide mutable resource.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}
