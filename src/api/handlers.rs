//! API Handlers
//!
//! HTTP request handlers for each payload service endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::config::Config;
use crate::db::Database;
use crate::error::Result;
use crate::models::{
    CreatePayloadRequest, CreatePayloadResponse, GetPayloadResponse, HealthResponse,
};
use crate::payload::{PayloadGenerator, PayloadStore};
use crate::transform::TransformCache;

/// Application state shared across all handlers.
///
/// Holds no mutable data; all durable state lives in the database.
#[derive(Clone)]
pub struct AppState {
    pub generator: PayloadGenerator,
}

impl AppState {
    /// Creates a new AppState with the given generator.
    pub fn new(generator: PayloadGenerator) -> Self {
        Self { generator }
    }

    /// Wires the generator to an already migrated database.
    pub fn with_database(db: Database, config: &Config) -> Self {
        let transformer = TransformCache::new(db.clone(), config.transformer_delay);
        let store = PayloadStore::new(db);
        Self::new(PayloadGenerator::new(transformer, store))
    }

    /// Opens the configured database, runs migrations and builds the state.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let db = Database::connect(config.database_path()).await?;
        Ok(Self::with_database(db, config))
    }
}

/// Handler for POST /payload
///
/// Returns 201 for a newly generated payload and 200 when identical inputs
/// were already stored.
pub async fn create_payload_handler(
    State(state): State<AppState>,
    Json(req): Json<CreatePayloadRequest>,
) -> Result<(StatusCode, Json<CreatePayloadResponse>)> {
    let generated = state.generator.generate(req.list1, req.list2).await?;

    let status = if generated.cached {
        StatusCode::OK
    } else {
        StatusCode::CREATED
    };

    Ok((
        status,
        Json(CreatePayloadResponse::new(generated.id, generated.cached)),
    ))
}

/// Handler for GET /payload/:id
pub async fn get_payload_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<GetPayloadResponse>> {
    let payload = state.generator.get(&id).await?;
    Ok(Json(GetPayloadResponse::new(payload.output)))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
