//! RoomPi Config Daemon
//!
//! Serves the threshold edit form, writes submitted values to the flat
//! `roompi.conf` file consumed by the measurement process, and exposes the
//! built-in profiles for client-side autofill.

use anyhow::Result;
use clap::Parser;
use roompi_configd::api::{self, AppState};
use roompi_core::{default_config_path, ProfileTable, RoomPiError, StaticConfig};
use std::path::{Path, PathBuf};
use tokio::{fs, signal};
use tracing::info;

/// RoomPi Config Server
#[derive(Parser, Debug)]
#[command(name = "roompi-configd")]
#[command(version, about = "RoomPi threshold configuration server", long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Server bind address
    #[arg(short, long)]
    bind: Option<String>,

    /// Server port
    #[arg(short, long)]
    port: Option<u16>,

    /// Path the rendered roompi.conf is written to
    #[arg(long)]
    conf: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing
    init_tracing(args.verbose);

    info!("RoomPi config server starting...");

    // Determine config path: CLI flag > env var > default
    let config_path = args.config.unwrap_or_else(|| {
        std::env::var("ROOMPI_CONFIGD_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_config_path())
    });
    info!("Configuration file: {}", config_path.display());

    // Load configuration; CLI flags take precedence over the file
    let static_config = load_static_config(&config_path).await?;
    let bind = args.bind.unwrap_or(static_config.server.bind);
    let port = args.port.unwrap_or(static_config.server.port);
    let conf_path = args.conf.unwrap_or(static_config.conf_path);
    let bind_addr = format!("{}:{}", bind, port);

    // Build the immutable profile table once
    let profiles = ProfileTable::builtin();
    info!("Profile table initialized: {} profile(s)", profiles.len());
    info!("Config output path: {}", conf_path.display());

    // Create application state and router
    let app_state = AppState::new(profiles, conf_path);
    let app = api::create_router(app_state);

    // Start server
    info!("Starting server on {}", bind_addr);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    info!("RoomPi config server listening on {}", bind_addr);

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Load static config from TOML file, creating it with defaults if missing.
async fn load_static_config(path: &Path) -> Result<StaticConfig> {
    if !path.exists() {
        info!(
            "Static config not found at {}. Creating with defaults.",
            path.display()
        );

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                RoomPiError::Config(format!(
                    "Failed to create config directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let config = StaticConfig::default();
        let toml_str = config
            .to_toml()
            .map_err(|e| RoomPiError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, toml_str)
            .await
            .map_err(|e| RoomPiError::Config(format!("Failed to write config file: {}", e)))?;

        return Ok(config);
    }

    let contents = fs::read_to_string(path)
        .await
        .map_err(|e| RoomPiError::Config(format!("Failed to read config file: {}", e)))?;

    let config = StaticConfig::from_toml(&contents)
        .map_err(|e| RoomPiError::Config(format!("Failed to parse config file: {}", e)))?;

    info!("Configuration loaded successfully");
    Ok(config)
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down gracefully...");
        },
        _ = terminate => {
            info!("Received SIGTERM, shutting down gracefully...");
        },
    }
}

/// Initialize tracing subscriber for logging
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
