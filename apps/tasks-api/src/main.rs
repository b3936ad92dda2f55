use axum_helpers::server::{close_database, create_production_app};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::sql::{connect_from_config_with_retry, run_migrations};
use migration::Migrator;
use tasks_api::{build_app, config::Config, state::AppState};
use tracing::info;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing with ErrorLayer for span trace capture
    init_tracing(&config.environment);

    let db = connect_from_config_with_retry(config.database.clone(), None)
        .await
        .map_err(|e| eyre::eyre!("Database connection failed: {}", e))?;

    run_migrations::<Migrator>(&db, config.app.name)
        .await
        .map_err(|e| eyre::eyre!("Database migration failed: {}", e))?;

    let state = AppState {
        config: config.clone(),
        db,
    };
    let cleanup_db = state.db.clone();
    let app_name = config.app.name;

    let app = build_app(state).await?;

    info!(
        "Starting {} v{} with graceful shutdown ({:?} timeout)",
        config.app.name, config.app.version, config.server.shutdown_timeout
    );

    create_production_app(app, &config.server, async move {
        info!("Shutting down: closing database connections");
        close_database(cleanup_db, app_name).await;
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Task Management API shutdown complete");
    Ok(())
}
