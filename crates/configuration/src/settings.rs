use crate::error::ConfigError;
use chrono::{Duration, NaiveDate};
use serde::Deserialize;

/// The format dates are stored in, and compared as, inside the store.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub server: ServerSettings,
    pub observations: ObservationSettings,
}

/// Where the climate store lives.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// An sqlx SQLite URL, e.g. `sqlite://Resources/hawaii.sqlite`.
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

/// Controls the "last 12 months" window used by the precipitation and tobs routes.
#[derive(Debug, Clone, Deserialize)]
pub struct ObservationSettings {
    /// The last date the dataset is known to contain. This is a fixed literal,
    /// not read from the store, unless `cutoff_source` is `latest`.
    pub last_observed_date: NaiveDate,
    /// How many days before the last observed date the window starts.
    pub window_days: i64,
    #[serde(default)]
    pub cutoff_source: CutoffSource,
}

/// Where the last observed date comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CutoffSource {
    /// Use `last_observed_date` as configured.
    #[default]
    Fixed,
    /// Use `MAX(date)` over the measurement table at startup.
    Latest,
}

impl ObservationSettings {
    /// `last_observed_date - window_days`, formatted the way the store holds dates.
    ///
    /// `None` when the window reaches past the earliest representable date.
    /// `Settings::validate` rejects such configurations.
    pub fn fixed_cutoff(&self) -> Option<String> {
        self.cutoff_from(self.last_observed_date)
    }

    /// Applies the configured window to an arbitrary last observed date.
    pub fn cutoff_from(&self, last_observed: NaiveDate) -> Option<String> {
        let window = Duration::try_days(self.window_days)?;
        let cutoff = last_observed.checked_sub_signed(window)?;
        Some(cutoff.format(DATE_FORMAT).to_string())
    }
}

impl ServerSettings {
    /// The `host:port` string the listener binds to.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Settings {
    /// Rejects values that deserialize fine but can never work.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.url.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "database.url must not be empty".to_string(),
            ));
        }
        if self.server.port == 0 {
            return Err(ConfigError::ValidationError(
                "server.port must be non-zero".to_string(),
            ));
        }
        if self.observations.window_days < 0 {
            return Err(ConfigError::ValidationError(format!(
                "observations.window_days must not be negative, got {}",
                self.observations.window_days
            )));
        }
        if self.observations.fixed_cutoff().is_none() {
            return Err(ConfigError::ValidationError(format!(
                "observations.window_days of {} reaches before the earliest supported date",
                self.observations.window_days
            )));
        }
        Ok(())
    }
}
