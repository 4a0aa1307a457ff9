//! Usuario service — application-layer orchestration
//!
//! Input constraints are checked here, before any database access.
//! HTTP handlers should be thin wrappers that delegate to this service.

use std::sync::Arc;

use tracing::info;

use crate::domain::{DomainError, DomainResult, Usuario, UsuarioRepository};

/// Bounds on the `limit` pagination parameter.
const LIMIT_MIN: i64 = 1;
const LIMIT_MAX: i64 = 200;

/// Usuario service — orchestrates all usuario use-cases.
///
/// Generic over `R: UsuarioRepository` so it stays decoupled from
/// the concrete persistence layer.
pub struct UsuarioService<R: UsuarioRepository> {
    repo: Arc<R>,
}

impl<R: UsuarioRepository> UsuarioService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    // ── Queries ─────────────────────────────────────────────────

    /// Confirm database connectivity with a no-op round trip.
    pub async fn ping(&self) -> DomainResult<()> {
        self.repo.ping().await
    }

    /// List usuarios with optional substring search and pagination.
    pub async fn list(
        &self,
        q: Option<String>,
        limit: i64,
        offset: i64,
    ) -> DomainResult<Vec<Usuario>> {
        if !(LIMIT_MIN..=LIMIT_MAX).contains(&limit) {
            return Err(DomainError::Validation(format!(
                "limit must be between {} and {}",
                LIMIT_MIN, LIMIT_MAX
            )));
        }
        if offset < 0 {
            return Err(DomainError::Validation("offset must be non-negative".into()));
        }

        // An empty q means no filter, same as an absent one.
        let search = q.filter(|s| !s.is_empty());
        self.repo
            .list(search.as_deref(), limit as u64, offset as u64)
            .await
    }

    /// Get a single usuario by id.
    pub async fn get(&self, id: i32) -> DomainResult<Option<Usuario>> {
        self.repo.find_by_id(id).await
    }

    // ── Commands (mutations) ────────────────────────────────────

    /// Create a usuario. The database assigns the id.
    pub async fn create(&self, nombre: String, email: String) -> DomainResult<Usuario> {
        validate_fields(&nombre, &email)?;

        let usuario = self.repo.create(nombre, email).await?;
        info!(id = usuario.id, "Usuario created");
        Ok(usuario)
    }

    /// Update `nombre` and `email` on the row matching `id`.
    /// Returns `None` when no such row exists.
    pub async fn update(
        &self,
        id: i32,
        nombre: String,
        email: String,
    ) -> DomainResult<Option<Usuario>> {
        validate_fields(&nombre, &email)?;
        self.repo.update(id, nombre, email).await
    }

    /// Delete a usuario by id.
    pub async fn delete(&self, id: i32) -> DomainResult<()> {
        self.repo.delete(id).await?;
        info!(id, "Usuario deleted");
        Ok(())
    }
}

fn validate_fields(nombre: &str, email: &str) -> DomainResult<()> {
    if nombre.is_empty() {
        return Err(DomainError::Validation("nombre must not be empty".into()));
    }
    if !email.contains('@') {
        return Err(DomainError::Validation(
            "email must be a valid email address".into(),
        ));
    }
    Ok(())
}

// ── Tests ──────────────────────────────────────────────────────
