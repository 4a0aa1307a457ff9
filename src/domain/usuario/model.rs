//! Usuario domain entity

/// A registered usuario.
///
/// `id` is assigned exactly once by the database on insert and never
/// changes afterwards. `email` syntax is enforced at the input layer,
/// not here; duplicates are permitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Usuario {
    pub id: i32,
    pub nombre: String,
    pub email: String,
}
