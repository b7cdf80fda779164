use axum::Server;
use std::net::SocketAddr;
use std::sync::Arc;
use team_todo::{
    AppState,
    config::Config,
    db::create_pool,
    error::{AppError, AppResult},
    init_tracing, routes,
};

#[tokio::main]
async fn main() -> AppResult<()> {
    let config = Config::from_env()?;
    init_tracing(&config);

    // Initialize database
    let db = create_pool(&config.database())?;

    let addr: SocketAddr = config.server_address().parse().map_err(|e| {
        AppError::Config(format!(
            "Invalid server address {}: {}",
            config.server_address(),
            e
        ))
    })?;

    // Application state
    let state = Arc::new(AppState::new(db, config)?);
    let app = routes::create_router(state);

    // Start server
    tracing::info!(%addr, "Server running");
    Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}
