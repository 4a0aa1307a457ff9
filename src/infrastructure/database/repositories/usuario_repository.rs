//! SeaORM implementation of UsuarioRepository

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter, QueryOrder, QuerySelect,
    Set, TransactionTrait,
};

use crate::domain::{DomainError, DomainResult, Usuario, UsuarioRepository};
use crate::infrastructure::database::entities::usuario;

pub struct SeaOrmUsuarioRepository {
    db: DatabaseConnection,
}

impl SeaOrmUsuarioRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(model: usuario::Model) -> Usuario {
    Usuario {
        id: model.id,
        nombre: model.nombre,
        email: model.email,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Unavailable(e.to_string())
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl UsuarioRepository for SeaOrmUsuarioRepository {
    async fn ping(&self) -> DomainResult<()> {
        self.db.ping().await.map_err(db_err)
    }

    async fn list(
        &self,
        search: Option<&str>,
        limit: u64,
        offset: u64,
    ) -> DomainResult<Vec<Usuario>> {
        let mut query = usuario::Entity::find();

        // Substring match on nombre or email; case sensitivity follows
        // the database collation.
        if let Some(term) = search {
            query = query.filter(
                usuario::Column::Nombre
                    .contains(term)
                    .or(usuario::Column::Email.contains(term)),
            );
        }

        let models = query
            .order_by_asc(usuario::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Usuario>> {
        let model = usuario::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(model_to_domain))
    }

    async fn create(&self, nombre: String, email: String) -> DomainResult<Usuario> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let new_usuario = usuario::ActiveModel {
            id: NotSet,
            nombre: Set(nombre),
            email: Set(email),
        };
        let result = usuario::Entity::insert(new_usuario)
            .exec(&txn)
            .await
            .map_err(db_err)?;

        // Re-read inside the same transaction so the returned record is
        // the atomically-committed row.
        let model = usuario::Entity::find_by_id(result.last_insert_id)
            .one(&txn)
            .await
            .map_err(db_err)?;

        let Some(model) = model else {
            return Err(DomainError::Internal(format!(
                "usuario {} inserted but missing on re-read",
                result.last_insert_id
            )));
        };

        txn.commit().await.map_err(db_err)?;
        Ok(model_to_domain(model))
    }

    async fn update(
        &self,
        id: i32,
        nombre: String,
        email: String,
    ) -> DomainResult<Option<Usuario>> {
        let txn = self.db.begin().await.map_err(db_err)?;

        // Absence is detected from the affected-row count, never from a
        // prior existence check.
        let result = usuario::Entity::update_many()
            .col_expr(usuario::Column::Nombre, Expr::value(nombre))
            .col_expr(usuario::Column::Email, Expr::value(email))
            .filter(usuario::Column::Id.eq(id))
            .exec(&txn)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        let model = usuario::Entity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(db_err)?;

        let Some(model) = model else {
            return Err(DomainError::Internal(format!(
                "usuario {} updated but missing on re-read",
                id
            )));
        };

        txn.commit().await.map_err(db_err)?;
        Ok(Some(model_to_domain(model)))
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let result = usuario::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound {
                entity: "Usuario",
                field: "id",
                value: id.to_string(),
            });
        }

        txn.commit().await.map_err(db_err)?;
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────
