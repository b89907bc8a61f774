//! Database Module
//!
//! SQLite access with one short-lived connection per operation.
//!
//! Every call runs on tokio's blocking pool so request handlers never block
//! the async runtime while SQLite does I/O. The connection is opened at the
//! start of [`Database::call`] and dropped when the closure returns, whether
//! it succeeded or not.

mod migrations;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use rusqlite::Connection;
use tracing::debug;

use crate::error::{AppError, Result};

pub use migrations::{run_migrations, Migration, MIGRATIONS};

/// How long a connection waits on a locked database before giving up.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

// == Database Handle ==
/// Cheaply cloneable handle to the SQLite database file.
#[derive(Debug, Clone)]
pub struct Database {
    path: Arc<PathBuf>,
}

impl Database {
    /// Opens (creating if needed) the database at `path` and applies pending migrations.
    pub async fn connect(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::Internal(format!(
                    "Failed to create database directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let db = Self {
            path: Arc::new(path),
        };
        let applied = db.call(run_migrations).await?;
        debug!(
            "Database ready at {} ({} migrations applied)",
            db.path.display(),
            applied
        );
        Ok(db)
    }

    /// Runs `f` with a fresh connection on the blocking pool.
    pub async fn call<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Connection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let path = Arc::clone(&self.path);
        tokio::task::spawn_blocking(move || {
            let mut conn = open_connection(&path)?;
            f(&mut conn)
        })
        .await
        .map_err(|e| AppError::Internal(format!("Database task failed: {}", e)))?
    }
}

fn open_connection(path: &Path) -> Result<Connection> {
    let conn = Connection::open(path)?;
    conn.busy_timeout(BUSY_TIMEOUT)?;
    // WAL lets readers proceed while another connection writes
    conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| {
        row.get::<_, String>(0)
    })?;
    Ok(conn)
}
