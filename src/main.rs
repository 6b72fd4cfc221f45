mod bot;
mod config;
mod controller;
mod data;
mod error;
mod model;
mod router;
mod service;
mod startup;
mod state;
mod util;

use crate::{
    config::Config, error::AppError, service::roster::RosterService, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    // Rosters written before mains existed may have members without one
    RosterService::new(&db).backfill_mains().await?;

    let state = AppState::new(db.clone());
    let port = config.port;
    tokio::spawn(async move {
        if let Err(e) = startup::serve_health(port, state).await {
            tracing::error!("Health server error: {}", e);
        }
    });

    let mut client = bot::start::init_bot(&config, db.clone()).await?;
    let shard_manager = client.shard_manager.clone();

    tracing::info!("Starting Discord bot...");

    let result = tokio::select! {
        result = client.start() => result.map_err(AppError::from),
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Received shutdown signal, disconnecting from Discord");
            shard_manager.shutdown_all().await;
            Ok(())
        }
    };

    db.close().await?;

    tracing::info!("Database connection closed");

    result
}
