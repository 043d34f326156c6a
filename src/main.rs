use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use submission_server::core::{Config, Database};
use submission_server::{AppState, bootstrap, config::DEFAULT_CONFIG_PATH, create_router};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Speaker submission backend for the vendor integrations
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Pre-populate the database with sample values (drops the table first)
    #[arg(short = 'p', long = "populate")]
    populate: bool,

    /// Path of the JSON file with host, database, username and password
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = Config::load(&cli.config)
        .with_context(|| format!("unable to load {}", cli.config.display()))?;
    config.log_summary();

    let db = Database::connect(&config.database, &config.pool)
        .await
        .context("unable to open the database")?;

    if cli.populate {
        warn!("Populating database, existing submissions will be dropped");
        bootstrap::seed(&db)
            .await
            .context("unable to populate the database")?;
    }

    let state = Arc::new(AppState::new(db.clone(), config.static_dir.clone()));
    let app = create_router(state);

    let listener = TcpListener::bind(config.bind_address())
        .await
        .with_context(|| format!("unable to bind {}", config.bind_address()))?;
    info!(address = %config.bind_address(), "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!("Unable to listen for Ctrl-C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                warn!("Unable to listen for SIGTERM: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
