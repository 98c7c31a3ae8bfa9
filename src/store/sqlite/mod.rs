//! SQLite-backed document store.

mod connection;
mod repo_impl;
mod rows;


use rusqlite::Connection;

/// SQLite-backed topic and card store.
///
/// Owns the database connection; every `NoteStore` call runs as its own
/// statement with no surrounding transaction.
pub struct SqliteStore {
    pub(crate) conn: Connection,
}
