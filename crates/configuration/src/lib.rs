use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{
    CutoffSource, DatabaseSettings, ObservationSettings, ServerSettings, Settings, DATE_FORMAT,
};

/// Loads the application configuration.
///
/// Sources are layered, later ones overriding earlier ones:
/// 1. built-in defaults (the Hawaii dataset and its fixed last observed date),
/// 2. the TOML file at `path`, if it exists,
/// 3. `CLIMATE__*` environment variables, e.g. `CLIMATE__SERVER__PORT=8080`.
pub fn load_config(path: &Path) -> Result<Settings, ConfigError> {
    let builder = config::Config::builder()
        .set_default("database.url", "sqlite://Resources/hawaii.sqlite")?
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 5000_i64)?
        .set_default("observations.last_observed_date", "2017-08-23")?
        .set_default("observations.window_days", 365_i64)?
        .set_default("observations.cutoff_source", "fixed")?
        .add_source(config::File::from(path).required(false))
        .add_source(
            config::Environment::with_prefix("CLIMATE")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Settings` struct
    let settings = builder.try_deserialize::<Settings>()?;
    settings.validate()?;

    tracing::debug!(path = %path.display(), "Configuration loaded.");
    Ok(settings)
}
