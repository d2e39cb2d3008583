use axum::{routing::get, Router};
use database::DbRepository;
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

pub mod cutoff;
pub mod error;
pub mod handlers;
pub mod responses;

pub use cutoff::resolve_cutoff;

/// The shared application state that all handlers can access.
///
/// Built once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db_repo: DbRepository,
    /// First date (inclusive, `YYYY-MM-DD`) of the "last 12 months" window.
    pub cutoff_date: String,
}

/// Builds the application router over an already-opened store.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods([axum::http::Method::GET])
        .allow_headers(AllowHeaders::any());

    Router::new()
        .route("/", get(handlers::home))
        .route("/api/v1.0/precipitation", get(handlers::get_precipitation))
        .route("/api/v1.0/stations", get(handlers::get_stations))
        .route("/api/v1.0/tobs", get(handlers::get_tobs))
        .route("/api/v1.0/:start", get(handlers::get_temperature_stats_from))
        .route(
            "/api/v1.0/:start/:end",
            get(handlers::get_temperature_stats_between),
        )
        .with_state(state)
        .layer(cors)
        // Logs every incoming request.
        .layer(TraceLayer::new_for_http())
}

/// Binds `addr` and serves the API until the process is stopped.
pub async fn run_server(addr: &str, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Web server listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
