//! Schema Migrations
//!
//! Ordered, versioned schema changes. Each applied version is recorded in
//! `schema_migrations` so restarting the service only runs what is pending.

use rusqlite::{params, Connection};
use tracing::info;

use crate::error::Result;

/// A single forward-only schema change.
#[derive(Debug, Clone, Copy)]
pub struct Migration {
    pub version: i64,
    pub name: &'static str,
    pub sql: &'static str,
}

/// All migrations, in application order.
pub const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        name: "create_transform_cache",
        sql: "
            CREATE TABLE transform_cache (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                input_string TEXT NOT NULL,
                transformed_string TEXT NOT NULL,
                created_at TEXT NOT NULL
            );
            CREATE UNIQUE INDEX ix_transform_cache_input_string
                ON transform_cache (input_string);
        ",
    },
    Migration {
        version: 2,
        name: "create_payloads",
        sql: "
            CREATE TABLE payloads (
                id TEXT PRIMARY KEY NOT NULL,
                input_hash TEXT NOT NULL,
                list1_json TEXT NOT NULL,
                list2_json TEXT NOT NULL,
                output TEXT NOT NULL,
                created_at TEXT NOT NULL
            );
            CREATE UNIQUE INDEX ix_payloads_input_hash ON payloads (input_hash);
            CREATE INDEX ix_payloads_created_at ON payloads (created_at);
        ",
    },
];

/// Applies every pending migration. Returns how many were applied.
pub fn run_migrations(conn: &mut Connection) -> Result<usize> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_migrations (
            version INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            applied_at TEXT NOT NULL
        );",
    )?;

    let current: i64 = conn
        .query_row("SELECT MAX(version) FROM schema_migrations", [], |row| {
            row.get::<_, Option<i64>>(0)
        })?
        .unwrap_or(0);

    let mut applied = 0;
    for migration in MIGRATIONS.iter().filter(|m| m.version > current) {
        let tx = conn.transaction()?;
        tx.execute_batch(migration.sql)?;
        tx.execute(
            "INSERT INTO schema_migrations (version, name, applied_at) VALUES (?1, ?2, ?3)",
            params![migration.version, migration.name, chrono::Utc::now()],
        )?;
        tx.commit()?;

        info!(
            "Applied migration {} ({})",
            migration.version, migration.name
        );
        applied += 1;
    }

    Ok(applied)
}
