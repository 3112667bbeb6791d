use mailplate::bootstrap;
use mailplate::config::Config;
use mailplate::infrastructure::http::router::build_router;
use mailplate::infrastructure::observability;
use mailplate::infrastructure::persistence::Database;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    let _guard = observability::init(&config)?;
    tracing::info!("Configuration loaded");

    // Initialize database connection
    let db =
        Database::connect_with_pool_size(&config.database_url, config.database_max_connections)
            .await?;
    tracing::info!("Database connection established");

    db.ensure_schema().await?;
    tracing::info!("Database schema ready");

    let state = bootstrap::build_app_state(db);

    if let Err(e) = bootstrap::initialize_admin(&state, &config).await {
        tracing::error!("Failed to initialize admin user: {}", e);
        return Err(e.into());
    }

    let app = build_router(state);

    let addr = config.server_address();
    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
