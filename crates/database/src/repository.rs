use crate::connection::{connect, verify_schema};
use crate::DbError;
use sqlx::sqlite::SqlitePool;
use sqlx::FromRow;

/// A table the repository reads, and the columns it needs from it.
pub trait StoreTable {
    const TABLE: &'static str;
    const COLUMNS: &'static [&'static str];
}

/// Represents a row from the `station` table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Station {
    pub id: i64,
    /// The station code, e.g. `USC00519397`. Unique across the table.
    pub station: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

impl StoreTable for Station {
    const TABLE: &'static str = "station";
    const COLUMNS: &'static [&'static str] =
        &["id", "station", "name", "latitude", "longitude", "elevation"];
}

/// Represents a row from the `measurement` table: one daily observation.
///
/// Queries select narrower projections of this table; the full record
/// declares the columns the schema check requires.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub id: i64,
    /// References `Station::station`. Not enforced.
    pub station: String,
    /// `YYYY-MM-DD`.
    pub date: String,
    /// Precipitation. Missing readings are NULL in the store.
    pub prcp: Option<f64>,
    /// Temperature observation.
    pub tobs: f64,
}

impl StoreTable for Measurement {
    const TABLE: &'static str = "measurement";
    const COLUMNS: &'static [&'static str] = &["id", "station", "date", "prcp", "tobs"];
}

/// MIN/MAX/AVG of `tobs` over a date range. All three are `None` when no row matched.
#[derive(Debug, Clone, Copy, PartialEq, FromRow)]
pub struct TemperatureSummary {
    pub min_tobs: Option<f64>,
    pub max_tobs: Option<f64>,
    pub avg_tobs: Option<f64>,
}

impl TemperatureSummary {
    /// True for the all-NULL row an aggregate over zero rows produces.
    pub fn is_empty(&self) -> bool {
        self.min_tobs.is_none() && self.max_tobs.is_none() && self.avg_tobs.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct PrecipitationReading {
    pub date: String,
    pub prcp: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct TemperatureObservation {
    pub station: String,
    pub date: String,
    pub tobs: f64,
}

/// The `DbRepository` provides a high-level, application-specific interface
/// to the climate store. It encapsulates all SQL queries and data access logic.
#[derive(Debug, Clone)]
pub struct DbRepository {
    pool: SqlitePool,
}

impl DbRepository {
    /// Wraps an already-open pool. Prefer `open`, which also checks the schema.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens the store at `database_url` read-only and verifies its schema.
    pub async fn open(database_url: &str) -> Result<Self, DbError> {
        let pool = connect(database_url).await?;
        verify_schema(&pool).await?;
        Ok(Self::new(pool))
    }

    /// MIN, MAX and AVG of `tobs` for `start <= date` and, when given, `date <= end`.
    ///
    /// Always returns exactly one row. No matching measurements is not an
    /// error: the row is all `None`.
    pub async fn temperature_summary(
        &self,
        start: &str,
        end: Option<&str>,
    ) -> Result<TemperatureSummary, DbError> {
        let summary = match end {
            Some(end) => {
                sqlx::query_as::<_, TemperatureSummary>(
                    r#"
                    SELECT MIN(tobs) AS min_tobs, MAX(tobs) AS max_tobs, AVG(tobs) AS avg_tobs
                    FROM measurement
                    WHERE date >= ? AND date <= ?
                    "#,
                )
                .bind(start)
                .bind(end)
                .fetch_one(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, TemperatureSummary>(
                    r#"
                    SELECT MIN(tobs) AS min_tobs, MAX(tobs) AS max_tobs, AVG(tobs) AS avg_tobs
                    FROM measurement
                    WHERE date >= ?
                    "#,
                )
                .bind(start)
                .fetch_one(&self.pool)
                .await?
            }
        };

        tracing::debug!(start, ?end, ?summary, "Temperature summary computed.");
        Ok(summary)
    }

    /// Every `(date, prcp)` on or after `cutoff`, oldest first. NULL precipitation is kept.
    pub async fn precipitation_since(
        &self,
        cutoff: &str,
    ) -> Result<Vec<PrecipitationReading>, DbError> {
        let readings = sqlx::query_as::<_, PrecipitationReading>(
            "SELECT date, prcp FROM measurement WHERE date >= ? ORDER BY date ASC",
        )
        .bind(cutoff)
        .fetch_all(&self.pool)
        .await?;
        Ok(readings)
    }

    /// Fetches all stations, in whatever order the store returns them.
    pub async fn all_stations(&self) -> Result<Vec<Station>, DbError> {
        let stations = sqlx::query_as::<_, Station>(
            "SELECT id, station, name, latitude, longitude, elevation FROM station",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(stations)
    }

    /// Temperature observations on or after `cutoff`, one row per distinct date.
    ///
    /// Grouping happens before ordering: the store picks which station's
    /// reading represents each date, then the surviving rows are ordered by
    /// station code.
    pub async fn temperature_observations_since(
        &self,
        cutoff: &str,
    ) -> Result<Vec<TemperatureObservation>, DbError> {
        let observations = sqlx::query_as::<_, TemperatureObservation>(
            r#"
            SELECT station, date, tobs
            FROM measurement
            WHERE date >= ?
            GROUP BY date
            ORDER BY station ASC
            "#,
        )
        .bind(cutoff)
        .fetch_all(&self.pool)
        .await?;
        Ok(observations)
    }

    /// The most recent measurement date, or `None` for an empty table.
    pub async fn latest_observation_date(&self) -> Result<Option<String>, DbError> {
        let latest: Option<String> = sqlx::query_scalar("SELECT MAX(date) FROM measurement")
            .fetch_one(&self.pool)
            .await?;
        Ok(latest)
    }

    pub async fn station_count(&self) -> Result<i64, DbError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM station")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
