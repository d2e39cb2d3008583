//! On-disk SQLite fixtures shaped like the Hawaii climate store.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;
use tempfile::TempDir;

pub const MEASUREMENT_DDL: &str = "CREATE TABLE measurement (
    id INTEGER PRIMARY KEY,
    station TEXT,
    date TEXT,
    prcp FLOAT,
    tobs FLOAT
)";

pub const STATION_DDL: &str = "CREATE TABLE station (
    id INTEGER PRIMARY KEY,
    station TEXT,
    name TEXT,
    latitude FLOAT,
    longitude FLOAT,
    elevation FLOAT
)";

pub const STATIONS: &[(&str, &str, f64, f64, f64)] = &[
    ("USC1", "WAIKIKI 717.2, HI US", 21.2716, -157.8168, 3.0),
    ("USC2", "KANEOHE 838.1, HI US", 21.4234, -157.8015, 14.6),
    ("USC3", "MANOA LYON ARBO 785.2, HI US", 21.3331, -157.8025, 152.4),
];

pub const MEASUREMENTS: &[(&str, &str, Option<f64>, f64)] = &[
    ("USC1", "2016-08-22", Some(0.2), 65.0),
    ("USC1", "2016-08-23", Some(0.0), 75.0),
    ("USC2", "2016-08-23", None, 77.0),
    ("USC1", "2017-01-01", Some(0.5), 70.0),
    ("USC2", "2017-01-01", Some(0.1), 72.0),
    ("USC3", "2017-08-23", Some(0.3), 80.0),
];

pub fn url_for(path: &Path) -> String {
    format!("sqlite://{}", path.display())
}

/// Creates `climate.sqlite` inside a fresh temp dir, runs `statements`, and
/// returns the dir (which must outlive the test) and the store URL.
pub async fn store_with(statements: &[&str]) -> (TempDir, String) {
    let dir = tempfile::tempdir().unwrap();
    let url = url_for(&dir.path().join("climate.sqlite"));

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

/// A store holding `STATIONS` and `MEASUREMENTS`.
pub async fn hawaii_store() -> (TempDir, String) {
    let mut statements = vec![MEASUREMENT_DDL.to_string(), STATION_DDL.to_string()];
    for (station, name, lat, lon, elev) in STATIONS {
        statements.push(format!(
            "INSERT INTO station (station, name, latitude, longitude, elevation) \
             VALUES ('{station}', '{name}', {lat}, {lon}, {elev})"
        ));
    }
    for (station, date, prcp, tobs) in MEASUREMENTS {
        let prcp = prcp.map_or("NULL".to_string(), |p| p.to_string());
        statements.push(format!(
            "INSERT INTO measurement (station, date, prcp, tobs) \
             VALUES ('{station}', '{date}', {prcp}, {tobs})"
        ));
    }
    let refs: Vec<&str> = statements.iter().map(String::as_str).collect();
    store_with(&refs).await
}
