//! Usuario DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::Usuario;

/// Usuario API representation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UsuarioResponse {
    pub id: i32,
    pub nombre: String,
    pub email: String,
}

impl From<Usuario> for UsuarioResponse {
    fn from(u: Usuario) -> Self {
        Self {
            id: u.id,
            nombre: u.nombre,
            email: u.email,
        }
    }
}

/// Create usuario request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUsuarioRequest {
    /// Accepted on the wire, always ignored: the database assigns the id
    pub id: Option<i32>,
    #[validate(length(min = 1, message = "nombre must not be empty"))]
    pub nombre: String,
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
}

/// Update usuario request. The target id comes from the path and is
/// never altered.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateUsuarioRequest {
    #[validate(length(min = 1, message = "nombre must not be empty"))]
    pub nombre: String,
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
}

/// List usuarios query parameters
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListUsuariosParams {
    /// Substring filter on nombre or email
    pub q: Option<String>,
    /// Page size, 1..=200
    #[serde(default = "default_limit")]
    pub limit: i64,
    /// Rows to skip, >= 0
    #[serde(default)]
    pub offset: i64,
}

fn default_limit() -> i64 {
    50
}
