//! Generated OpenAPI documentation for the HTTP surface.

use axum::Json;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Cinema API",
        description = "API for managing movies and directors",
    ),
    paths(
        crate::handlers::auth::login,
        crate::handlers::movies::create_movie,
        crate::handlers::movies::list_movies,
        crate::handlers::movies::update_movie,
        crate::handlers::movies::delete_movie,
        crate::handlers::directors::create_director,
        crate::handlers::directors::list_directors,
        crate::handlers::directors::get_director,
        crate::handlers::directors::update_director,
        crate::handlers::directors::delete_director,
    ),
    components(schemas(
        crate::handlers::auth::LoginRequest,
        crate::handlers::auth::TokenResponse,
        crate::database::models::Movie,
        crate::database::models::MoviePayload,
        crate::database::models::Director,
        crate::database::models::DirectorCreate,
        crate::database::models::DirectorUpdate,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Token issuance"),
        (name = "movies", description = "Movie management"),
        (name = "directors", description = "Director management"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_token",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// GET /api-docs/openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_covers_every_route() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;
        for path in ["/auth/login", "/movies", "/movies/{id}", "/directors", "/directors/{id}"] {
            assert!(paths.contains_key(path), "missing path: {}", path);
        }
    }

    #[test]
    fn bearer_scheme_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("bearer_token"));
    }
}
