use std::path::PathBuf;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use crate::domain::entities::location::LocationMeta;
use crate::domain::entities::snapshot::Snapshot;
use crate::domain::ports::store::{HistoryError, LocationDirectory, SnapshotHistoryReader};

use super::migrations;

/// SQLite-backed reader over the collector's locations and snapshots.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open the `SQLite` database at the given path.
    ///
    /// Expands `~`, creates parent directories, opens the connection, sets WAL mode
    /// and pragmas, and makes sure the schema exists.
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::Unavailable` if the database cannot be opened or initialized.
    pub fn new(path: &str) -> Result<Self, HistoryError> {
        let expanded = shellexpand::tilde(path);
        let db_path = PathBuf::from(expanded.as_ref());

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| HistoryError::Unavailable(e.to_string()))?;
        }

        let conn =
            Connection::open(&db_path).map_err(|e| HistoryError::Unavailable(e.to_string()))?;

        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(|e| HistoryError::Unavailable(e.to_string()))?;
        conn.pragma_update(None, "busy_timeout", 5000)
            .map_err(|e| HistoryError::Unavailable(e.to_string()))?;

        migrations::initialize_schema(&conn)
            .map_err(|e| HistoryError::Unavailable(e.to_string()))?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

fn parse_snapshot_row(row: &rusqlite::Row<'_>) -> Result<Snapshot, rusqlite::Error> {
    let captured_at: String = row.get(2)?;
    let captured_at = DateTime::parse_from_rfc3339(&captured_at)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(2, rusqlite::types::Type::Text, Box::new(e))
        })?;

    Ok(Snapshot {
        id: row.get(0)?,
        location_id: row.get(1)?,
        captured_at,
        rating: row.get(3)?,
        reviews_count: row.get(4)?,
        unanswered_reviews_count: row.get(5)?,
        news_count: row.get(6)?,
        photos_count: row.get(7)?,
        report_path: row.get(8)?,
    })
}

fn parse_location_row(row: &rusqlite::Row<'_>) -> Result<LocationMeta, rusqlite::Error> {
    Ok(LocationMeta {
        location_id: row.get(0)?,
        location_name: row.get(1)?,
        location_type: row.get(2)?,
    })
}

fn read_error(e: rusqlite::Error) -> HistoryError {
    match e {
        rusqlite::Error::FromSqlConversionFailure(..)
        | rusqlite::Error::InvalidColumnType(..)
        | rusqlite::Error::IntegralValueOutOfRange(..) => HistoryError::Corrupt(e.to_string()),
        other => HistoryError::Unavailable(other.to_string()),
    }
}

impl SnapshotHistoryReader for SqliteStore {
    fn history(&self, location_id: &str) -> Result<Vec<Snapshot>, HistoryError> {
        let conn = self
            .conn
            .lock()
            .map_err(|_| HistoryError::Unavailable("lock poisoned".into()))?;

        let mut stmt = conn
            .prepare(
                "SELECT id, location_id, captured_at, rating, reviews_count, \
                 unanswered_reviews_count, news_count, photos_count, report_path \
                 FROM snapshots WHERE location_id = ?1 ORDER BY captured_at ASC",
            )
            .map_err(read_error)?;

        let rows = stmt
            .query_map(params![location_id], parse_snapshot_row)
            .map_err(read_error)?;

        let mut snapshots = Vec::new();
        for row in rows {
            snapshots.push(row.map_err(read_error)?);
        }
        Ok(snapshots)
    }
}

impl LocationDirectory for SqliteStore {
    fn location(&self, location_id: &str) -> Result<LocationMeta, HistoryError> {
        let conn = self
            .conn
            .lock()
            .map_err(|_| HistoryError::Unavailable("lock poisoned".into()))?;

        conn.query_row(
            "SELECT id, name, location_type FROM locations WHERE id = ?1",
            params![location_id],
            parse_location_row,
        )
        .optional()
        .map_err(read_error)?
        .ok_or_else(|| HistoryError::NotFound(location_id.to_string()))
    }

    fn locations_for_account(&self, account_id: &str) -> Result<Vec<LocationMeta>, HistoryError> {
        let conn = self
            .conn
            .lock()
            .map_err(|_| HistoryError::Unavailable("lock poisoned".into()))?;

        let mut stmt = conn
            .prepare(
                "SELECT id, name, location_type FROM locations \
                 WHERE account_id = ?1 ORDER BY id ASC",
            )
            .map_err(read_error)?;

        let rows = stmt
            .query_map(params![account_id], parse_location_row)
            .map_err(read_error)?;

        let mut locations = Vec::new();
        for row in rows {
            locations.push(row.map_err(read_error)?);
        }
        Ok(locations)
    }
}
