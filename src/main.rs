use axum::{extract::State, routing::get, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

mod auth;
mod config;
mod database;
mod docs;
mod error;
mod handlers;
mod middleware;
mod state;

use state::AppState;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    // Initialize configuration (this loads the config singleton)
    let config = crate::config::config();

    tracing_subscriber::fmt::init();
    tracing::info!("Starting Cinema API in {:?} mode", config.environment);

    let pool = database::connect()
        .unwrap_or_else(|e| panic!("database configuration error: {}", e));

    // The pool is lazy; bootstrap may fail while the database is down and the
    // server still comes up with a degraded health status.
    if let Err(e) = database::migrate(&pool).await {
        tracing::warn!("Schema bootstrap failed, continuing degraded: {}", e);
    }

    let app = app(AppState { pool });

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    println!("🚀 Cinema API server listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

fn app(state: AppState) -> Router {
    let config = crate::config::config();

    let mut router = Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(docs::openapi_json))
        // Public auth routes (token acquisition)
        .merge(auth_routes())
        // Protected resources
        .merge(movie_routes())
        .merge(director_routes())
        .with_state(state);

    // Global middleware
    if config.server.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }
    if config.security.enable_cors {
        router = router.layer(CorsLayer::permissive());
    }
    router
}

fn auth_routes() -> Router<AppState> {
    use axum::routing::post;
    use handlers::auth;

    Router::new().route("/auth/login", post(auth::login))
}

fn movie_routes() -> Router<AppState> {
    use axum::routing::put;
    use handlers::movies;

    Router::new()
        .route("/movies", get(movies::list_movies).post(movies::create_movie))
        .route("/movies/:id", put(movies::update_movie).delete(movies::delete_movie))
        .route_layer(axum::middleware::from_fn(middleware::jwt_auth_middleware))
}

fn director_routes() -> Router<AppState> {
    use handlers::directors;

    Router::new()
        .route(
            "/directors",
            get(directors::list_directors).post(directors::create_director),
        )
        .route(
            "/directors/:id",
            get(directors::get_director)
                .put(directors::update_director)
                .delete(directors::delete_director),
        )
        .route_layer(axum::middleware::from_fn(middleware::jwt_auth_middleware))
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "success": true,
        "data": {
            "name": "Cinema API",
            "version": version,
            "description": "Movies and directors management API built with Rust (Axum)",
            "endpoints": {
                "home": "/ (public)",
                "health": "/health (public)",
                "docs": "/api-docs/openapi.json (public)",
                "auth": "/auth/login (public - token acquisition)",
                "movies": "/movies[/:id] (protected)",
                "directors": "/directors[/:id] (protected)",
            }
        }
    }))
}

async fn health(State(state): State<AppState>) -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match database::health_check(&state.pool).await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "success": false,
                "error": "database unavailable",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "database_error": e.to_string()
                }
            })),
        ),
    }
}
