pub mod config;
pub mod dashboard; // Home summary bundle
pub mod db;
pub mod messages; // Mark-read operations
pub mod models;
pub mod views;
pub mod vitals; // Chart series
pub mod web;

#[cfg(test)]
pub(crate) mod test_fixtures;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::DashboardConfig;
use crate::web::{start_server_on, AppContext, ServerError};

#[derive(Error, Debug)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Database(#[from] db::DatabaseError),
    #[error(transparent)]
    Server(#[from] ServerError),
    #[error("Cannot listen for shutdown signal: {0}")]
    Signal(#[source] std::io::Error),
}

/// Install the global tracing subscriber.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();
}

/// Load configuration, prepare the store, and serve until Ctrl-C.
pub async fn run() -> Result<(), StartupError> {
    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let config = DashboardConfig::load()?;
    tracing::info!(
        database = %config.database_path.display(),
        patient_id = config.patient_id,
        "Configuration loaded"
    );

    if config.create_if_missing {
        db::initialize_database(&config.database_path)?;
    }

    let ctx = AppContext::from_config(&config);
    let mut server = start_server_on(ctx, config.bind_addr()).await?;
    tracing::info!(addr = %server.addr, "Listening");

    let signal = tokio::signal::ctrl_c().await;
    server.shutdown();
    server.stopped().await;
    signal.map_err(StartupError::Signal)
}
