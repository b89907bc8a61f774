//! Transform Cache
//!
//! Write-once cache of string transformations backed by the `transform_cache` table.

use std::time::Duration;

use chrono::{DateTime, Utc};
use rusqlite::{params, OptionalExtension};
use tracing::debug;

use crate::db::Database;
use crate::error::Result;

/// A stored input/output pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedTransformation {
    pub input_string: String,
    pub transformed_string: String,
    pub created_at: DateTime<Utc>,
}

/// Uppercases strings, remembering every result in the database.
///
/// Uncached transformations are artificially slowed down by `delay` to stand
/// in for an expensive external call.
#[derive(Debug, Clone)]
pub struct TransformCache {
    db: Database,
    delay: Duration,
}

impl TransformCache {
    // == Constructor ==
    pub fn new(db: Database, delay: Duration) -> Self {
        Self { db, delay }
    }

    // == Transform ==
    /// Returns the uppercase form of `value` and whether it came from the cache.
    pub async fn transform(&self, value: &str) -> Result<(String, bool)> {
        if let Some(hit) = self.lookup(value).await? {
            debug!("Transform cache hit for {:?}", value);
            return Ok((hit.transformed_string, true));
        }

        debug!("Transform cache miss for {:?}", value);
        let transformed = self.compute(value).await;
        self.store(value, &transformed).await?;

        Ok((transformed, false))
    }

    /// Transforms every value in order. Returns the results and the number of cache hits.
    pub async fn transform_all(&self, values: &[String]) -> Result<(Vec<String>, usize)> {
        let mut results = Vec::with_capacity(values.len());
        let mut cache_hits = 0;

        for value in values {
            let (transformed, cached) = self.transform(value).await?;
            if cached {
                cache_hits += 1;
            }
            results.push(transformed);
        }

        Ok((results, cache_hits))
    }

    // == Lookup ==
    /// Fetches the cached row for `value`, if any.
    pub async fn lookup(&self, value: &str) -> Result<Option<CachedTransformation>> {
        let value = value.to_string();
        self.db
            .call(move |conn| {
                let row = conn
                    .query_row(
                        "SELECT input_string, transformed_string, created_at
                         FROM transform_cache WHERE input_string = ?1",
                        params![value],
                        |row| {
                            Ok(CachedTransformation {
                                input_string: row.get(0)?,
                                transformed_string: row.get(1)?,
                                created_at: row.get(2)?,
                            })
                        },
                    )
                    .optional()?;
                Ok(row)
            })
            .await
    }

    async fn compute(&self, value: &str) -> String {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        uppercase(value)
    }

    /// Inserts the pair unless another request already cached it.
    async fn store(&self, input: &str, transformed: &str) -> Result<()> {
        let input = input.to_string();
        let transformed = transformed.to_string();
        self.db
            .call(move |conn| {
                let inserted = conn.execute(
                    "INSERT OR IGNORE INTO transform_cache
                     (input_string, transformed_string, created_at)
                     VALUES (?1, ?2, ?3)",
                    params![input, transformed, Utc::now()],
                )?;
                if inserted == 0 {
                    debug!("Transform for {:?} was cached concurrently", input);
                }
                Ok(())
            })
            .await
    }
}

/// The transformation itself.
pub fn uppercase(value: &str) -> String {
    value.to_uppercase()
}
