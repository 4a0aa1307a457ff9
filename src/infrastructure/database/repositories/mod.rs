pub mod usuario_repository;

pub use usuario_repository::SeaOrmUsuarioRepository;
