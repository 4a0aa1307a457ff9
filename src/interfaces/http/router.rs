//! API Router with Swagger UI

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::common::ErrorResponse;
use super::modules::{health, usuarios};
use crate::application::usuarios::UsuarioService;
use crate::infrastructure::database::repositories::SeaOrmUsuarioRepository;

/// Handler state — concrete over `SeaOrmUsuarioRepository` for Axum
/// compatibility. Constructed from whatever connection the caller
/// provides, so tests can hand in an in-memory database.
#[derive(Clone)]
pub struct ApiState {
    pub service: Arc<UsuarioService<SeaOrmUsuarioRepository>>,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::handlers::health_check,
        // Usuarios
        usuarios::handlers::list_usuarios,
        usuarios::handlers::get_usuario,
        usuarios::handlers::create_usuario,
        usuarios::handlers::update_usuario,
        usuarios::handlers::delete_usuario,
    ),
    components(
        schemas(
            health::handlers::HealthResponse,
            usuarios::dto::UsuarioResponse,
            usuarios::dto::CreateUsuarioRequest,
            usuarios::dto::UpdateUsuarioRequest,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Health", description = "Database connectivity check."),
        (name = "Usuarios", description = "CRUD over the usuario table with substring search (`q`) and offset pagination (`limit` 1-200, default 50; `offset` >= 0)."),
    ),
    info(
        title = "API Usuarios",
        description = "Minimal REST API over the `usuario` table. Success bodies are bare JSON; failures return `{\"error\": \"...\"}`."
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(service: Arc<UsuarioService<SeaOrmUsuarioRepository>>) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Health
        .route("/test", get(health::handlers::health_check))
        // Usuarios
        .route(
            "/usuarios",
            get(usuarios::handlers::list_usuarios).post(usuarios::handlers::create_usuario),
        )
        .route(
            "/usuarios/{id}",
            get(usuarios::handlers::get_usuario)
                .put(usuarios::handlers::update_usuario)
                .delete(usuarios::handlers::delete_usuario),
        )
        .with_state(ApiState { service })
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
