//! Snapshot blob-store contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide a string-keyed read/write API over persisted list snapshots.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - One key holds at most one blob; writes replace the previous value.
//! - Construction rejects connections without the migrated schema.

use crate::db::{migrations::latest_version, DbError};
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key holding the serialized entry list.
pub const SNAPSHOT_KEY: &str = "items";

const SNAPSHOT_TABLE: &str = "snapshots";
const REQUIRED_COLUMNS: &[&str] = &["key", "value"];

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for snapshot persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    Encode(serde_json::Error),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode snapshot: {err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Encode(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Blob-store interface the list store persists through.
///
/// The store treats the backend as an opaque synchronous string-keyed
/// value store; this trait is the seam for alternative backends.
pub trait SnapshotRepository {
    /// Reads the blob stored under `key`, if any.
    fn read_blob(&self, key: &str) -> RepoResult<Option<String>>;

    /// Writes `value` under `key`, replacing any previous blob.
    fn write_blob(&self, key: &str, value: &str) -> RepoResult<()>;
}

/// SQLite-backed snapshot repository.
pub struct SqliteSnapshotRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSnapshotRepository<'conn> {
    /// Wraps a migrated connection after validating its schema.
    ///
    /// # Errors
    /// - `UninitializedConnection` when `PRAGMA user_version` does not
    ///   match the latest migration known to this binary.
    /// - `MissingRequiredTable` / `MissingRequiredColumn` when the
    ///   snapshot table shape is not usable.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let expected_version = latest_version();
        let actual_version: u32 =
            conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
        if actual_version != expected_version {
            return Err(RepoError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }

        let table_exists: i64 = conn.query_row(
            "SELECT EXISTS(
                SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1
            );",
            [SNAPSHOT_TABLE],
            |row| row.get(0),
        )?;
        if table_exists == 0 {
            return Err(RepoError::MissingRequiredTable(SNAPSHOT_TABLE));
        }

        let mut stmt = conn.prepare(&format!("PRAGMA table_info({SNAPSHOT_TABLE});"))?;
        let mut rows = stmt.query([])?;
        let mut columns = Vec::new();
        while let Some(row) = rows.next()? {
            columns.push(row.get::<_, String>("name")?);
        }
        for column in REQUIRED_COLUMNS {
            if !columns.iter().any(|name| name == column) {
                return Err(RepoError::MissingRequiredColumn {
                    table: SNAPSHOT_TABLE,
                    column,
                });
            }
        }

        Ok(Self { conn })
    }
}

impl SnapshotRepository for SqliteSnapshotRepository<'_> {
    fn read_blob(&self, key: &str) -> RepoResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM snapshots WHERE key = ?1;",
                [key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write_blob(&self, key: &str, value: &str) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO snapshots (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }
}
