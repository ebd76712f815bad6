use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::domain::entities::location::LocationMeta;
use crate::domain::entities::snapshot::Snapshot;
use crate::domain::ports::store::{HistoryError, LocationDirectory, SnapshotHistoryReader};

/// In-memory store for tests and fixtures.
pub struct InMemoryStore {
    locations: Mutex<BTreeMap<String, (String, LocationMeta)>>,
    snapshots: Mutex<Vec<Snapshot>>,
}

impl InMemoryStore {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            locations: Mutex::new(BTreeMap::new()),
            snapshots: Mutex::new(Vec::new()),
        }
    }

    /// Register a location under an account, replacing any previous entry.
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::Unavailable` if the lock is poisoned.
    pub fn insert_location(&self, account_id: &str, meta: LocationMeta) -> Result<(), HistoryError> {
        self.locations
            .lock()
            .map_err(|_| HistoryError::Unavailable("lock poisoned".into()))?
            .insert(meta.location_id.clone(), (account_id.to_string(), meta));
        Ok(())
    }

    /// Append a snapshot.
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::Unavailable` if the lock is poisoned.
    pub fn insert_snapshot(&self, snapshot: Snapshot) -> Result<(), HistoryError> {
        self.snapshots
            .lock()
            .map_err(|_| HistoryError::Unavailable("lock poisoned".into()))?
            .push(snapshot);
        Ok(())
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotHistoryReader for InMemoryStore {
    fn history(&self, location_id: &str) -> Result<Vec<Snapshot>, HistoryError> {
        Ok(self
            .snapshots
            .lock()
            .map_err(|_| HistoryError::Unavailable("lock poisoned".into()))?
            .iter()
            .filter(|s| s.location_id == location_id)
            .cloned()
            .collect())
    }
}

impl LocationDirectory for InMemoryStore {
    fn location(&self, location_id: &str) -> Result<LocationMeta, HistoryError> {
        self.locations
            .lock()
            .map_err(|_| HistoryError::Unavailable("lock poisoned".into()))?
            .get(location_id)
            .map(|(_, meta)| meta.clone())
            .ok_or_else(|| HistoryError::NotFound(location_id.to_string()))
    }

    fn locations_for_account(&self, account_id: &str) -> Result<Vec<LocationMeta>, HistoryError> {
        Ok(self
            .locations
            .lock()
            .map_err(|_| HistoryError::Unavailable("lock poisoned".into()))?
            .values()
            .filter(|(account, _)| account == account_id)
            .map(|(_, meta)| meta.clone())
            .collect())
    }
}
