use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    /// The store could not be opened, or does not look like the climate dataset.
    /// Raised at startup only.
    #[error("The climate store is unavailable: {0}")]
    StoreUnavailable(String),

    #[error("A query against the climate store failed: {0}")]
    Query(#[from] sqlx::Error),
}
