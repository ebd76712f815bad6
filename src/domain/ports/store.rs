use thiserror::Error;

use crate::domain::entities::location::LocationMeta;
use crate::domain::entities::snapshot::Snapshot;

#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("snapshot history unavailable: {0}")]
    Unavailable(String),
    #[error("stored snapshot is corrupt: {0}")]
    Corrupt(String),
    #[error("location not found: {0}")]
    NotFound(String),
}

pub trait SnapshotHistoryReader: Send + Sync {
    /// Return every snapshot recorded for a location, in any order.
    ///
    /// A location with no history yields an empty vector, not an error.
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::Unavailable` if the backing storage cannot be
    /// reached, or `HistoryError::Corrupt` if a stored row cannot be decoded.
    fn history(&self, location_id: &str) -> Result<Vec<Snapshot>, HistoryError>;
}

pub trait LocationDirectory: Send + Sync {
    /// Look up the metadata of one location.
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::NotFound` for an unknown id, or
    /// `HistoryError::Unavailable` if the storage cannot be reached.
    fn location(&self, location_id: &str) -> Result<LocationMeta, HistoryError>;

    /// List the locations belonging to an account, ordered by location id.
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::Unavailable` if the storage cannot be reached.
    fn locations_for_account(&self, account_id: &str) -> Result<Vec<LocationMeta>, HistoryError>;
}
