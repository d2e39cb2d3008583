use crate::error::DbError;
use crate::repository::{Measurement, Station, StoreTable};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

/// Opens the climate store read-only.
///
/// The pool holds exactly one connection for the whole process lifetime; the
/// workload is read-only and requests are served one at a time. The file must
/// already exist: nothing here creates or migrates a schema.
pub async fn connect(database_url: &str) -> Result<SqlitePool, DbError> {
    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| {
            DbError::StoreUnavailable(format!("invalid database url '{database_url}': {e}"))
        })?
        .read_only(true)
        .create_if_missing(false);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .acquire_timeout(Duration::from_secs(5))
        .connect_with(options)
        .await
        .map_err(|e| DbError::StoreUnavailable(format!("cannot open '{database_url}': {e}")))?;

    tracing::info!(url = %database_url, "Opened climate store (read-only).");
    Ok(pool)
}

/// Checks that the `measurement` and `station` tables exist with every column
/// the repository reads. Extra columns are ignored.
pub async fn verify_schema(pool: &SqlitePool) -> Result<(), DbError> {
    check_table::<Measurement>(pool).await?;
    check_table::<Station>(pool).await?;
    Ok(())
}

async fn check_table<T: StoreTable>(pool: &SqlitePool) -> Result<(), DbError> {
    let present: Vec<String> = sqlx::query_scalar("SELECT name FROM pragma_table_info(?)")
        .bind(T::TABLE)
        .fetch_all(pool)
        .await
        .map_err(|e| {
            DbError::StoreUnavailable(format!("cannot inspect table '{}': {e}", T::TABLE))
        })?;

    if present.is_empty() {
        return Err(DbError::StoreUnavailable(format!(
            "table '{}' not found",
            T::TABLE
        )));
    }

    let missing: Vec<&str> = T::COLUMNS
        .iter()
        .copied()
        .filter(|column| !present.iter().any(|p| p.as_str() == *column))
        .collect();
    if !missing.is_empty() {
        return Err(DbError::StoreUnavailable(format!(
            "table '{}' is missing column(s): {}",
            T::TABLE,
            missing.join(", ")
        )));
    }

    tracing::debug!(table = T::TABLE, columns = ?present, "Table schema verified.");
    Ok(())
}
