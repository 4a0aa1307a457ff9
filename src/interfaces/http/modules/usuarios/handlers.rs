//! Usuario REST API handlers
//!
//! Thin wrappers that delegate to `UsuarioService` and map domain
//! failures onto HTTP statuses. Success bodies are bare JSON; error
//! bodies carry a human-readable message.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::debug;

use super::dto::{
    CreateUsuarioRequest, ListUsuariosParams, UpdateUsuarioRequest, UsuarioResponse,
};
use crate::interfaces::http::common::{domain_error_response, ErrorResponse, ValidatedJson};
use crate::interfaces::http::router::ApiState;

/// List usuarios with optional search and pagination
#[utoipa::path(
    get,
    path = "/usuarios",
    tag = "Usuarios",
    params(ListUsuariosParams),
    responses(
        (status = 200, description = "Usuario list, ordered by id", body = Vec<UsuarioResponse>),
        (status = 422, description = "limit or offset out of range", body = ErrorResponse)
    )
)]
pub async fn list_usuarios(
    State(state): State<ApiState>,
    Query(params): Query<ListUsuariosParams>,
) -> Result<Json<Vec<UsuarioResponse>>, (StatusCode, Json<ErrorResponse>)> {
    match state
        .service
        .list(params.q, params.limit, params.offset)
        .await
    {
        Ok(usuarios) => Ok(Json(
            usuarios.into_iter().map(UsuarioResponse::from).collect(),
        )),
        Err(e) => Err(domain_error_response(e)),
    }
}

/// Get a usuario by id
#[utoipa::path(
    get,
    path = "/usuarios/{id}",
    tag = "Usuarios",
    params(("id" = i32, Path, description = "Usuario id")),
    responses(
        (status = 200, description = "Usuario details", body = UsuarioResponse),
        (status = 404, description = "Not found", body = ErrorResponse)
    )
)]
pub async fn get_usuario(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
) -> Result<Json<UsuarioResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state.service.get(id).await {
        Ok(Some(usuario)) => Ok(Json(usuario.into())),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new(format!("Usuario {} not found", id))),
        )),
        Err(e) => Err(domain_error_response(e)),
    }
}

/// Create a usuario
#[utoipa::path(
    post,
    path = "/usuarios",
    tag = "Usuarios",
    request_body = CreateUsuarioRequest,
    responses(
        (status = 201, description = "Usuario created", body = UsuarioResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    )
)]
pub async fn create_usuario(
    State(state): State<ApiState>,
    ValidatedJson(request): ValidatedJson<CreateUsuarioRequest>,
) -> Result<(StatusCode, Json<UsuarioResponse>), (StatusCode, Json<ErrorResponse>)> {
    if request.id.is_some() {
        debug!("client-supplied id ignored on create");
    }

    match state.service.create(request.nombre, request.email).await {
        Ok(usuario) => Ok((StatusCode::CREATED, Json(usuario.into()))),
        Err(e) => Err(domain_error_response(e)),
    }
}

/// Update a usuario
#[utoipa::path(
    put,
    path = "/usuarios/{id}",
    tag = "Usuarios",
    params(("id" = i32, Path, description = "Usuario id")),
    request_body = UpdateUsuarioRequest,
    responses(
        (status = 200, description = "Usuario updated", body = UsuarioResponse),
        (status = 404, description = "Not found", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    )
)]
pub async fn update_usuario(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateUsuarioRequest>,
) -> Result<Json<UsuarioResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state
        .service
        .update(id, request.nombre, request.email)
        .await
    {
        Ok(Some(usuario)) => Ok(Json(usuario.into())),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new(format!("Usuario {} not found", id))),
        )),
        Err(e) => Err(domain_error_response(e)),
    }
}

/// Delete a usuario
#[utoipa::path(
    delete,
    path = "/usuarios/{id}",
    tag = "Usuarios",
    params(("id" = i32, Path, description = "Usuario id")),
    responses(
        (status = 204, description = "Usuario deleted"),
        (status = 404, description = "Not found", body = ErrorResponse)
    )
)]
pub async fn delete_usuario(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    match state.service.delete(id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => Err(domain_error_response(e)),
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use sea_orm::{ConnectOptions, ConnectionTrait, Database};
    use serde_json::{json, Value};
    use tower::Service;

    use crate::application::usuarios::UsuarioService;
    use crate::infrastructure::database::repositories::SeaOrmUsuarioRepository;
    use crate::interfaces::http::create_api_router;

    /// Router over a fresh in-memory database seeded with Alice and Bob.
    async fn seeded_app() -> Router {
        // One connection only: every pooled connection would otherwise
        // open its own private in-memory database.
        let mut opt = ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1);
        let db = Database::connect(opt).await.unwrap();
        db.execute_unprepared(
            "CREATE TABLE usuario (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                nombre TEXT NOT NULL,
                email TEXT NOT NULL
            )",
        )
        .await
        .unwrap();
        db.execute_unprepared(
            "INSERT INTO usuario (nombre, email) VALUES ('Alice', 'alice@example.com')",
        )
        .await
        .unwrap();
        db.execute_unprepared(
            "INSERT INTO usuario (nombre, email) VALUES ('Bob', 'bob@example.com')",
        )
        .await
        .unwrap();

        let repo = Arc::new(SeaOrmUsuarioRepository::new(db));
        create_api_router(Arc::new(UsuarioService::new(repo)))
    }

    async fn send(app: &mut Router, req: Request<Body>) -> axum::response::Response {
        app.call(req).await.unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn json_req(method: &str, uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap()
    }

    async fn body_json(resp: axum::response::Response) -> Value {
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_endpoint_reports_ok() {
        let mut app = seeded_app().await;
        let resp = send(&mut app, get("/test")).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await, json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn list_returns_seeded_usuarios_in_id_order() {
        let mut app = seeded_app().await;
        let resp = send(&mut app, get("/usuarios")).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = body_json(resp).await;
        let rows = body.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["nombre"], "Alice");
        assert_eq!(rows[1]["nombre"], "Bob");
        assert!(rows[0]["id"].as_i64().unwrap() < rows[1]["id"].as_i64().unwrap());
    }

    #[tokio::test]
    async fn list_filters_by_substring() {
        let mut app = seeded_app().await;
        let resp = send(&mut app, get("/usuarios?q=ali")).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = body_json(resp).await;
        let rows = body.as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["nombre"], "Alice");
    }

    #[tokio::test]
    async fn list_paginates_without_overlap() {
        let mut app = seeded_app().await;

        let first = body_json(send(&mut app, get("/usuarios?limit=1&offset=0")).await).await;
        let second = body_json(send(&mut app, get("/usuarios?limit=1&offset=1")).await).await;

        assert_eq!(first.as_array().unwrap().len(), 1);
        assert_eq!(second.as_array().unwrap().len(), 1);
        assert_eq!(first[0]["nombre"], "Alice");
        assert_eq!(second[0]["nombre"], "Bob");
    }

    #[tokio::test]
    async fn list_rejects_out_of_range_pagination() {
        let mut app = seeded_app().await;

        for uri in ["/usuarios?limit=0", "/usuarios?limit=201", "/usuarios?offset=-1"] {
            let resp = send(&mut app, get(uri)).await;
            assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY, "{}", uri);
            assert!(body_json(resp).await["error"].is_string());
        }
    }

    #[tokio::test]
    async fn get_returns_usuario() {
        let mut app = seeded_app().await;
        let resp = send(&mut app, get("/usuarios/1")).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await["email"], "alice@example.com");
    }

    #[tokio::test]
    async fn get_missing_returns_404() {
        let mut app = seeded_app().await;
        let resp = send(&mut app, get("/usuarios/99")).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert!(body_json(resp).await["error"].is_string());
    }

    #[tokio::test]
    async fn non_integer_id_is_a_transport_error() {
        let mut app = seeded_app().await;
        let resp = send(&mut app, get("/usuarios/abc")).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn crud_lifecycle() {
        let mut app = seeded_app().await;

        // crear
        let payload = json!({"nombre": "Carol", "email": "carol@example.com"});
        let resp = send(&mut app, json_req("POST", "/usuarios", &payload)).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created = body_json(resp).await;
        assert_eq!(created["nombre"], "Carol");
        let new_id = created["id"].as_i64().unwrap();

        // actualizar
        let payload = json!({"nombre": "Caroline", "email": "caroline@example.com"});
        let uri = format!("/usuarios/{}", new_id);
        let resp = send(&mut app, json_req("PUT", &uri, &payload)).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await["nombre"], "Caroline");

        // eliminar
        let resp = send(
            &mut app,
            Request::builder()
                .method("DELETE")
                .uri(uri.as_str())
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.is_empty());

        // comprobar inexistente
        let resp = send(&mut app, get(&uri)).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn create_ignores_client_supplied_id() {
        let mut app = seeded_app().await;

        let payload = json!({"id": 999, "nombre": "Carol", "email": "carol@example.com"});
        let resp = send(&mut app, json_req("POST", "/usuarios", &payload)).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let created = body_json(resp).await;
        assert_ne!(created["id"].as_i64().unwrap(), 999);
    }

    #[tokio::test]
    async fn create_echoes_input_and_get_round_trips() {
        let mut app = seeded_app().await;

        let payload = json!({"nombre": "Carol", "email": "carol@example.com"});
        let created = body_json(send(&mut app, json_req("POST", "/usuarios", &payload)).await).await;
        assert_eq!(created["nombre"], "Carol");
        assert_eq!(created["email"], "carol@example.com");

        let uri = format!("/usuarios/{}", created["id"]);
        let fetched = body_json(send(&mut app, get(&uri)).await).await;
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn create_rejects_invalid_body() {
        let mut app = seeded_app().await;

        let no_email = json!({"nombre": "Carol", "email": "not-an-email"});
        let resp = send(&mut app, json_req("POST", "/usuarios", &no_email)).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let empty_nombre = json!({"nombre": "", "email": "carol@example.com"});
        let resp = send(&mut app, json_req("POST", "/usuarios", &empty_nombre)).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn update_missing_returns_404() {
        let mut app = seeded_app().await;

        let payload = json!({"nombre": "X", "email": "x@x.com"});
        let resp = send(&mut app, json_req("PUT", "/usuarios/99", &payload)).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn update_rejects_invalid_body() {
        let mut app = seeded_app().await;

        let payload = json!({"nombre": "Alice", "email": "broken"});
        let resp = send(&mut app, json_req("PUT", "/usuarios/1", &payload)).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn delete_missing_returns_404() {
        let mut app = seeded_app().await;

        let resp = send(
            &mut app,
            Request::builder()
                .method("DELETE")
                .uri("/usuarios/99")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert!(body_json(resp).await["error"].is_string());
    }
}
