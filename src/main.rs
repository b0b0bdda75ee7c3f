//! Department Service - CRUD web service for departments.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use department_service as app;
use tokio::net::TcpListener;

use app::config::{AppConfig, ConfigLoadResult};
use app::db::{self, SeaOrmDepartmentRepository};
use app::service::DepartmentService;

/// CRUD web service for departments.
#[derive(Parser)]
#[command(name = "department-service")]
struct Cli {
    /// Use config.toml from current directory (dev mode)
    #[arg(long)]
    dev: bool,

    /// Explicit config file path
    #[arg(long, short)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Determine config path based on mode
    let config_path = match cli.config {
        Some(path) => path,
        None if cli.dev => PathBuf::from("config.toml"),
        None => AppConfig::default_path(),
    };

    // Resolve config before logging is up; outcomes are logged once it is.
    let (config, load_note) = match AppConfig::try_load(&config_path) {
        ConfigLoadResult::Loaded(config) => (config, "Config loaded successfully"),
        ConfigLoadResult::Missing => {
            let config = AppConfig::default();
            config
                .save(&config_path)
                .with_context(|| format!("writing default config to {}", config_path.display()))?;
            (config, "Config missing, wrote defaults")
        }
        ConfigLoadResult::Invalid(e) => {
            return Err(app::AppError::config(e.to_string()))
                .with_context(|| format!("loading {}", config_path.display()));
        }
    };

    let _log_guard = app::logging::init(&config.logging);

    tracing::info!("Department Service starting...");
    tracing::info!("Config path: {:?}", config_path);
    tracing::info!("{}", load_note);

    let conn = db::connect(&config.database.connection_string(), config.database.max_connections)
        .await
        .context("connecting to database")?;
    db::test_connection(&conn).await.context("database ping")?;
    db::ensure_schema(&conn).await.context("creating schema")?;

    if let Ok(count) = db::count_departments(&conn).await {
        tracing::info!("Tables: {} departments", count);
    }

    let repo = Arc::new(SeaOrmDepartmentRepository::new(conn));
    let service = Arc::new(DepartmentService::new(repo));
    let router = app::api::build_router(service);

    let bind_addr = config.server.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("binding {bind_addr}"))?;
    tracing::info!("Listening on {}", bind_addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Department Service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown requested");
}
