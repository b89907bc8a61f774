//! Payload Store
//!
//! Durable payload rows in the `payloads` table.

use chrono::{DateTime, Utc};
use rusqlite::{params, OptionalExtension, Row};

use crate::db::Database;
use crate::error::{AppError, Result};

const SELECT_COLUMNS: &str =
    "SELECT id, input_hash, list1_json, list2_json, output, created_at FROM payloads";

// == Payload ==
/// One generated payload and the inputs it was generated from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    pub id: String,
    pub input_hash: String,
    pub list1: Vec<String>,
    pub list2: Vec<String>,
    pub output: String,
    pub created_at: DateTime<Utc>,
}

impl Payload {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            input_hash: row.get(1)?,
            list1: decode_list(row, 2)?,
            list2: decode_list(row, 3)?,
            output: row.get(4)?,
            created_at: row.get(5)?,
        })
    }
}

fn decode_list(row: &Row<'_>, idx: usize) -> rusqlite::Result<Vec<String>> {
    let raw: String = row.get(idx)?;
    serde_json::from_str(&raw).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
    })
}

// == Payload Store ==
#[derive(Debug, Clone)]
pub struct PayloadStore {
    db: Database,
}

impl PayloadStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Finds the payload generated from inputs with this digest.
    pub async fn find_by_hash(&self, input_hash: &str) -> Result<Option<Payload>> {
        let input_hash = input_hash.to_string();
        self.db
            .call(move |conn| {
                let sql = format!("{} WHERE input_hash = ?1", SELECT_COLUMNS);
                Ok(conn
                    .query_row(&sql, params![input_hash], Payload::from_row)
                    .optional()?)
            })
            .await
    }

    /// Fetches a payload by id, failing with `NotFound` when absent.
    pub async fn get_by_id(&self, id: &str) -> Result<Payload> {
        let id = id.to_string();
        self.db
            .call(move |conn| {
                let sql = format!("{} WHERE id = ?1", SELECT_COLUMNS);
                conn.query_row(&sql, params![id], Payload::from_row)
                    .optional()?
                    .ok_or_else(|| AppError::NotFound(format!("Payload with ID {} not found", id)))
            })
            .await
    }

    /// Inserts a new payload.
    ///
    /// Fails with `Conflict` when a payload with the same `input_hash` (or id)
    /// already exists.
    pub async fn insert(&self, payload: Payload) -> Result<Payload> {
        let list1_json = serde_json::to_string(&payload.list1)?;
        let list2_json = serde_json::to_string(&payload.list2)?;
        self.db
            .call(move |conn| {
                let result = conn.execute(
                    "INSERT INTO payloads
                     (id, input_hash, list1_json, list2_json, output, created_at)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                    params![
                        payload.id,
                        payload.input_hash,
                        list1_json,
                        list2_json,
                        payload.output,
                        payload.created_at,
                    ],
                );
                match result {
                    Ok(_) => Ok(payload),
                    Err(e) if AppError::is_constraint_violation(&e) => Err(AppError::Conflict(
                        format!("Payload for input hash {} already exists", payload.input_hash),
                    )),
                    Err(e) => Err(e.into()),
                }
            })
            .await
    }
}
