//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the web adapter. All concrete implementations are instantiated
//! here.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use newsdesk_core::paths::database_path;
use newsdesk_core::services::AppCore;
use newsdesk_db::{CoreFactory, setup_database};
use tokio::task::JoinHandle;

use crate::routes::create_router;

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    /// Path to the `SQLite` database; `None` resolves the platform
    /// default.
    pub db_path: Option<PathBuf>,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Create config with default port and database location.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            port: 8000,
            db_path: None,
            cors: CorsConfig::default(),
        }
    }

    /// Set an explicit database path.
    #[must_use]
    pub fn with_db_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.db_path = Some(path.into());
        self
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }
}

/// Application context for the Axum adapter.
pub struct AxumContext {
    /// The core application facade.
    pub core: Arc<AppCore>,
}

impl AxumContext {
    /// Wrap an already-built core, e.g. one backed by a test database.
    #[must_use]
    pub fn new(core: Arc<AppCore>) -> Self {
        Self { core }
    }
}

/// Bootstrap the web adapter: open the database and build the core.
pub async fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    let db_path = match &config.db_path {
        Some(path) => path.clone(),
        None => database_path()?,
    };

    let pool = setup_database(&db_path).await?;
    let core = Arc::new(CoreFactory::build_app_core(pool));

    tracing::info!(db = %db_path.display(), "newsdesk context initialized");

    Ok(AxumContext { core })
}

/// Bind the router on `addr` and serve it in a background task.
///
/// Returns the bound address (useful with port 0) and the join handle.
pub async fn serve_in_background(
    ctx: AxumContext,
    cors: &CorsConfig,
    addr: SocketAddr,
) -> Result<(SocketAddr, JoinHandle<()>)> {
    let app = create_router(ctx, cors);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!(error = %e, "server error");
        }
    });

    Ok((local_addr, handle))
}

/// Bootstrap and run the HTTP server until it exits.
///
/// Binds on localhost only.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    let ctx = bootstrap(&config).await?;
    let app = create_router(ctx, &config.cors);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "serving newsdesk");

    axum::serve(listener, app).await?;
    Ok(())
}
