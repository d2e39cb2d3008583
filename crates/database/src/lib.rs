//! # Climate Database Crate
//!
//! This crate is the read-only data access layer over the climate store, an
//! SQLite file holding daily `measurement` rows and `station` metadata.
//!
//! ## Architectural Principles
//!
//! - **Adapter:** All SQL lives here. Callers get typed rows and never see
//!   the query text.
//! - **Fail Fast:** The store is opened and its schema checked once at startup
//!   (`DbRepository::open`). A missing file, an empty database, or a missing
//!   column is a `DbError::StoreUnavailable` before anything is served.
//! - **Read-Only:** There is no write path. Dates are ISO `YYYY-MM-DD` text, so
//!   plain string comparison in SQL is chronological comparison; inputs are
//!   never validated as dates.
//!
//! ## Public API
//!
//! - `connect` / `verify_schema`: open the store and check its shape.
//! - `DbRepository`: holds the connection pool and provides the queries.
//! - `DbError`: the error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
pub mod repository;

// Re-export the key components to create a clean, public-facing API.
pub use connection::{connect, verify_schema};
pub use error::DbError;
pub use repository::{
    DbRepository, Measurement, PrecipitationReading, Station, StoreTable, TemperatureObservation,
    TemperatureSummary,
};
