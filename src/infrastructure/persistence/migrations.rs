use rusqlite::Connection;

/// Ensure the listing tables exist. The collector owns their contents; this only
/// guarantees that reads against a fresh database succeed.
///
/// # Errors
/// Returns `rusqlite::Error` if any SQL statement fails.
pub fn initialize_schema(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS locations (
            id             TEXT    PRIMARY KEY,
            account_id     TEXT    NOT NULL,
            name           TEXT    NOT NULL,
            location_type  TEXT    NOT NULL
        );

        CREATE TABLE IF NOT EXISTS snapshots (
            id                        TEXT    PRIMARY KEY,
            location_id               TEXT    NOT NULL REFERENCES locations(id),
            captured_at               TEXT    NOT NULL,
            rating                    REAL,
            reviews_count             INTEGER NOT NULL,
            unanswered_reviews_count  INTEGER NOT NULL,
            news_count                INTEGER NOT NULL,
            photos_count              INTEGER NOT NULL,
            report_path               TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_locations_account ON locations(account_id);
        CREATE INDEX IF NOT EXISTS idx_snapshots_location_captured
            ON snapshots(location_id, captured_at);",
    )?;
    Ok(())
}
