pub mod model;
pub mod repository;

pub use model::Usuario;
pub use repository::UsuarioRepository;
