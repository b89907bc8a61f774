//! Payload Generator
//!
//! Validate, deduplicate, transform, interleave and store.

use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::payload::hash::{compute_input_hash, interleave, validate_lists};
use crate::payload::store::{Payload, PayloadStore};
use crate::transform::TransformCache;

/// Result of a [`PayloadGenerator::generate`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    /// Payload identifier
    pub id: String,
    /// True when an existing payload was returned instead of creating one
    pub cached: bool,
}

#[derive(Debug, Clone)]
pub struct PayloadGenerator {
    transformer: TransformCache,
    store: PayloadStore,
}

impl PayloadGenerator {
    pub fn new(transformer: TransformCache, store: PayloadStore) -> Self {
        Self { transformer, store }
    }

    /// Creates a payload for the two lists, or returns the one already stored
    /// for identical inputs.
    pub async fn generate(&self, list1: Vec<String>, list2: Vec<String>) -> Result<Generated> {
        validate_lists(&list1, &list2)?;

        let input_hash = compute_input_hash(&list1, &list2)?;
        if let Some(existing) = self.store.find_by_hash(&input_hash).await? {
            debug!("Payload {} already exists for hash {}", existing.id, input_hash);
            return Ok(Generated {
                id: existing.id,
                cached: true,
            });
        }

        let (transformed1, hits1) = self.transformer.transform_all(&list1).await?;
        let (transformed2, hits2) = self.transformer.transform_all(&list2).await?;
        let output = interleave(&transformed1, &transformed2);

        let payload = Payload {
            id: Uuid::new_v4().to_string(),
            input_hash,
            list1,
            list2,
            output,
            created_at: Utc::now(),
        };
        let input_hash = payload.input_hash.clone();

        match self.store.insert(payload).await {
            Ok(stored) => {
                info!(
                    "Created payload {} ({} of {} transforms cached)",
                    stored.id,
                    hits1 + hits2,
                    stored.list1.len() + stored.list2.len()
                );
                Ok(Generated {
                    id: stored.id,
                    cached: false,
                })
            }
            Err(AppError::Conflict(_)) => {
                // Lost the race to an identical request; return the winner
                let winner = self.store.find_by_hash(&input_hash).await?.ok_or_else(|| {
                    AppError::Internal(format!(
                        "Payload for hash {} conflicted but could not be read back",
                        input_hash
                    ))
                })?;
                warn!(
                    "Concurrent insert for hash {}; returning payload {}",
                    input_hash, winner.id
                );
                Ok(Generated {
                    id: winner.id,
                    cached: true,
                })
            }
            Err(e) => Err(e),
        }
    }

    /// Fetches a stored payload by id.
    pub async fn get(&self, id: &str) -> Result<Payload> {
        self.store.get_by_id(id).await
    }
}
