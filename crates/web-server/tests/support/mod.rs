//! Test helpers: a throwaway climate store plus an in-process router.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use configuration::{CutoffSource, ObservationSettings};
use database::DbRepository;
use serde_json::Value;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;
use web_server::{resolve_cutoff, router, AppState};

pub const SCHEMA: &[&str] = &[
    "CREATE TABLE measurement (
        id INTEGER PRIMARY KEY, station TEXT, date TEXT, prcp FLOAT, tobs FLOAT
    )",
    "CREATE TABLE station (
        id INTEGER PRIMARY KEY, station TEXT, name TEXT,
        latitude FLOAT, longitude FLOAT, elevation FLOAT
    )",
];

pub const ROWS: &[&str] = &[
    "INSERT INTO station (station, name, latitude, longitude, elevation) VALUES
        ('USC1', 'WAIKIKI 717.2, HI US', 21.2716, -157.8168, 3.0),
        ('USC2', 'KANEOHE 838.1, HI US', 21.4234, -157.8015, 14.6)",
    "INSERT INTO measurement (station, date, prcp, tobs) VALUES
        ('USC1', '2016-01-01', 1.2, 62.0),
        ('USC1', '2017-01-01', 0.5, 70.0),
        ('USC2', '2017-01-01', 0.1, 72.0),
        ('USC2', '2017-03-15', NULL, 74.0),
        ('USC1', '2017-08-23', 0.0, 81.0)",
];

pub fn observation_settings(source: CutoffSource) -> ObservationSettings {
    ObservationSettings {
        last_observed_date: NaiveDate::from_ymd_opt(2017, 8, 23).unwrap(),
        window_days: 365,
        cutoff_source: source,
    }
}

/// Writes `statements` into a new SQLite file and returns its dir and URL.
pub async fn store_with(statements: &[&str]) -> (TempDir, String) {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("climate.sqlite").display());

    let options = SqliteConnectOptions::from_str(&url)
        .unwrap()
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .unwrap();
    for statement in statements {
        sqlx::query(statement).execute(&pool).await.unwrap();
    }
    pool.close().await;

    (dir, url)
}

pub async fn hawaii_store() -> (TempDir, String) {
    let statements: Vec<&str> = SCHEMA.iter().chain(ROWS).copied().collect();
    store_with(&statements).await
}

/// Opens the store at `url` and builds the router the way the binary does.
pub async fn app_for(url: &str) -> Router {
    let db_repo = DbRepository::open(url).await.unwrap();
    let cutoff_date = resolve_cutoff(&observation_settings(CutoffSource::Fixed), &db_repo)
        .await
        .unwrap();
    router(Arc::new(AppState {
        db_repo,
        cutoff_date,
    }))
}

pub async fn get_raw(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get_raw(app, uri).await;
    let value = serde_json::from_str(&body).unwrap_or_else(|e| panic!("{uri}: {e}: {body}"));
    (status, value)
}
