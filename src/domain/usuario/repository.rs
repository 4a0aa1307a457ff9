//! Usuario repository interface

use async_trait::async_trait;

use super::model::Usuario;
use crate::domain::DomainResult;

#[async_trait]
pub trait UsuarioRepository: Send + Sync {
    /// Liveness round trip against the backing database.
    async fn ping(&self) -> DomainResult<()>;

    /// Rows matching `search` as a substring of `nombre` or `email`
    /// (all rows when `None`), ordered by `id` ascending, then paginated.
    async fn list(
        &self,
        search: Option<&str>,
        limit: u64,
        offset: u64,
    ) -> DomainResult<Vec<Usuario>>;

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Usuario>>;

    /// Insert a row and return it with its database-assigned id.
    async fn create(&self, nombre: String, email: String) -> DomainResult<Usuario>;

    /// Rewrite `nombre` and `email` on the row matching `id`.
    /// Returns `None` when zero rows were affected.
    async fn update(
        &self,
        id: i32,
        nombre: String,
        email: String,
    ) -> DomainResult<Option<Usuario>>;

    /// Hard delete. Fails with `NotFound` when zero rows were affected.
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
