//!
//! REST API server exposing CRUD over the `usuario` table.
//! Reads configuration from environment variables (and a `.env` file).

use std::sync::Arc;

use dotenv::dotenv;
use tracing::{error, info, warn};

use usuarios_service::application::usuarios::UsuarioService;
use usuarios_service::infrastructure::database::repositories::SeaOrmUsuarioRepository;
use usuarios_service::{create_api_router, init_database, AppConfig, DatabaseConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    dotenv().ok();
    let app_cfg = AppConfig::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&app_cfg.logging.level)),
        )
        .init();

    info!("Starting API Usuarios...");

    // ── Database ───────────────────────────────────────────────
    let db_config = DatabaseConfig {
        url: app_cfg.database.connection_url(),
    };

    let db = match init_database(&db_config).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    // ── Service wiring ─────────────────────────────────────────
    let repo = Arc::new(SeaOrmUsuarioRepository::new(db.clone()));
    let service = Arc::new(UsuarioService::new(repo));

    let app = create_api_router(service);

    // ── Serve with graceful shutdown ───────────────────────────
    let addr = format!("{}:{}", app_cfg.server.host, app_cfg.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("REST API server listening on http://{}", addr);
    info!("Swagger UI available at http://{}/docs/", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Perform final cleanup
    if let Err(e) = db.close().await {
        warn!("Error closing database connection: {}", e);
    } else {
        info!("Database connection closed");
    }

    info!("Shutdown complete");
    Ok(())
}

/// Resolves on SIGINT (Ctrl+C) or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
