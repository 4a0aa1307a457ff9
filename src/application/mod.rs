pub mod usuarios;

pub use usuarios::UsuarioService;
