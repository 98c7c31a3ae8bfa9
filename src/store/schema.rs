//! SQLite schema for the topic and card collections.

use rusqlite::Connection;

/// Current schema version written to `schema_version`.
pub const SCHEMA_VERSION: i64 = 1;

/// Creates the collections and their lookup indexes.
///
/// Idempotent. Topics and cards are stored as flat documents: there are no
/// foreign keys between them, so removing a topic never removes anything
/// else behind the caller's back. The `parents` column holds the cached
/// ancestry chain as a JSON array.
pub fn create_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS topics (
            id TEXT PRIMARY KEY,
            user TEXT NOT NULL,
            title TEXT NOT NULL,
            parent TEXT,
            parents TEXT NOT NULL DEFAULT '[]',
            date TEXT NOT NULL
        );",
    )?;

    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS cards (
            id TEXT PRIMARY KEY,
            user TEXT NOT NULL,
            topic TEXT NOT NULL,
            text TEXT NOT NULL,
            sanitized_text TEXT NOT NULL,
            date TEXT NOT NULL
        );",
    )?;

    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_topics_parent ON topics(parent);
         CREATE INDEX IF NOT EXISTS idx_topics_user ON topics(user);
         CREATE INDEX IF NOT EXISTS idx_cards_topic ON cards(topic);
         CREATE INDEX IF NOT EXISTS idx_cards_user ON cards(user);",
    )?;

    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL
        );",
    )?;

    conn.execute(
        "INSERT OR IGNORE INTO schema_version (version, applied_at) VALUES (?1, datetime('now'))",
        [SCHEMA_VERSION],
    )?;

    Ok(())
}

/// Returns the current schema version.
pub fn get_schema_version(conn: &Connection) -> rusqlite::Result<i64> {
    conn.query_row("SELECT MAX(version) FROM schema_version", [], |row| {
        row.get(0)
    })
}
