//! Per-request connection acquisition.
//!
//! Every handler opens its own connection and drops it before returning.
//! No pooling, no retry: an unreachable store is logged and surfaced.

use std::path::{Path, PathBuf};

use rusqlite::{Connection, OpenFlags};

use super::sqlite::configure_pragmas;
use super::DatabaseError;

#[derive(Debug, Clone)]
pub struct ConnectionProvider {
    path: PathBuf,
}

impl ConnectionProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a fresh connection to the store.
    ///
    /// The file must already exist; a missing or unreadable database is a
    /// [`DatabaseError::Connectivity`], never silently created.
    pub fn acquire(&self) -> Result<Connection, DatabaseError> {
        let conn = Connection::open_with_flags(
            &self.path,
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .and_then(|conn| {
            // A non-database file opens lazily; force a read so it fails here.
            conn.query_row("SELECT COUNT(*) FROM sqlite_master", [], |row| {
                row.get::<_, i64>(0)
            })?;
            Ok(conn)
        })
        .map_err(|source| {
            tracing::error!(
                path = %self.path.display(),
                error = %source,
                "Error connecting to database"
            );
            DatabaseError::Connectivity {
                path: self.path.clone(),
                source,
            }
        })?;

        configure_pragmas(&conn)?;
        Ok(conn)
    }
}
