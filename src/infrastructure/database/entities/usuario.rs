//! Usuario entity
//!
//! The `usuario` table is assumed to exist; no migration machinery
//! ships with this service.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Row in the `usuario` table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "usuario")]
pub struct Model {
    /// Assigned by the database on insert
    #[sea_orm(primary_key)]
    pub id: i32,

    pub nombre: String,

    /// Syntax checked at the input layer; no uniqueness constraint here
    pub email: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
