use crate::responses::{PrecipitationEntry, StationEntry, TemperatureStatsEntry, TobsEntry};
use crate::{error::AppError, AppState};
use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use std::sync::Arc;

/// # GET /
/// Lists the available routes.
pub async fn home() -> Html<&'static str> {
    Html(concat!(
        "<h1>Hawaii Climate API</h1>",
        "<p>Available Routes:</p>",
        "<ul>",
        "<li>/api/v1.0/precipitation</li>",
        "<li>/api/v1.0/stations</li>",
        "<li>/api/v1.0/tobs</li>",
        "<li>/api/v1.0/&lt;start&gt;</li>",
        "<li>/api/v1.0/&lt;start&gt;/&lt;end&gt;</li>",
        "</ul>",
        "<p>Dates are formatted YYYY-MM-DD.</p>",
    ))
}

/// # GET /api/v1.0/precipitation
/// Precipitation for every measurement in the last 12 months of data, oldest first.
pub async fn get_precipitation(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PrecipitationEntry>>, AppError> {
    let readings = state.db_repo.precipitation_since(&state.cutoff_date).await?;
    Ok(Json(readings.into_iter().map(Into::into).collect()))
}

/// # GET /api/v1.0/stations
pub async fn get_stations(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<StationEntry>>, AppError> {
    let stations = state.db_repo.all_stations().await?;
    Ok(Json(stations.into_iter().map(Into::into).collect()))
}

/// # GET /api/v1.0/tobs
/// One temperature observation per date in the last 12 months of data.
pub async fn get_tobs(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TobsEntry>>, AppError> {
    let observations = state
        .db_repo
        .temperature_observations_since(&state.cutoff_date)
        .await?;
    Ok(Json(observations.into_iter().map(Into::into).collect()))
}

/// # GET /api/v1.0/:start
pub async fn get_temperature_stats_from(
    Path(start): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TemperatureStatsEntry>>, AppError> {
    let summary = state.db_repo.temperature_summary(&start, None).await?;
    Ok(Json(TemperatureStatsEntry::from_summary(summary)))
}

/// # GET /api/v1.0/:start/:end
pub async fn get_temperature_stats_between(
    Path((start, end)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TemperatureStatsEntry>>, AppError> {
    let summary = state
        .db_repo
        .temperature_summary(&start, Some(end.as_str()))
        .await?;
    Ok(Json(TemperatureStatsEntry::from_summary(summary)))
}
