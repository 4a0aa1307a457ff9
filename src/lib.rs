//! # API Usuarios
//!
//! Minimal HTTP service exposing CRUD over the `usuario` table, with a
//! connectivity-check endpoint, substring search and offset pagination.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: core entity, repository trait and error taxonomy
//! - **application**: use-case orchestration and input constraints
//! - **infrastructure**: SeaORM persistence and connection pooling
//! - **interfaces**: axum REST surface with Swagger documentation

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub use config::AppConfig;

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig};

// Re-export API router
pub use interfaces::http::create_api_router;
