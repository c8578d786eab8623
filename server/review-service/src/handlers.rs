//! HTTP handlers for the review service.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{body::Bytes, extract::State, Json};
use review_engine::{Decision, EnrichedReview, RawReview};
use serde_json::{json, Value};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::ServiceError;
use crate::export;
use crate::formats::{self, InputFormat};
use crate::state::AppState;
use crate::types::{BulkRequest, BulkResponse, SummaryReport};

pub async fn health() -> Json<Value> {
  Json(json!({ "status": "ok" }))
}

pub async fn analyze_one(
  State(state): State<Arc<AppState>>,
  Json(review): Json<RawReview>,
) -> Result<Json<EnrichedReview>, ServiceError> {
  let enriched = state.analyzer.analyze(&review)?;
  Ok(Json(enriched))
}

fn parse_bulk_request(body: &[u8]) -> Result<BulkRequest, ServiceError> {
  if body.iter().all(u8::is_ascii_whitespace) {
    return Ok(BulkRequest::default());
  }
  serde_json::from_slice(body).map_err(|e| ServiceError::format(format!("bulk request body: {e}")))
}

/// Analyze a whole batch file, store it, and export it as CSV.
///
/// An empty body runs the configured defaults. A body that is not a valid
/// `BulkRequest` is a format error. Any malformed or invalid record aborts the
/// run before anything is stored.
pub async fn analyze_bulk(
  State(state): State<Arc<AppState>>,
  body: Bytes,
) -> Result<Json<BulkResponse>, ServiceError> {
  let req = parse_bulk_request(&body)?;
  let run_id = Uuid::new_v4();

  let input_path = req
    .input_path
    .map(PathBuf::from)
    .unwrap_or_else(|| state.config.input_path.clone());
  let output_path = req
    .output_path
    .map(PathBuf::from)
    .unwrap_or_else(|| state.config.output_path.clone());
  let format = match req.format {
    Some(f) => f,
    None => InputFormat::from_path(&input_path)?,
  };

  let bytes = tokio::fs::read(&input_path).await.map_err(|e| {
    warn!(%run_id, path = %input_path.display(), "cannot read batch input: {}", e);
    ServiceError::Io(e)
  })?;
  let raws = formats::parse_batch(&bytes, format)?;
  let enriched = state.analyzer.analyze_batch(&raws)?;
  let rejected = enriched
    .iter()
    .filter(|r| r.publish_decision == Decision::Reject)
    .count();

  let stored = state.store.insert_batch(&enriched).await?;
  export::write_csv(&output_path, &enriched).await?;

  info!(
    %run_id,
    input = %input_path.display(),
    ?format,
    total = enriched.len(),
    rejected,
    stored,
    store = state.store.name(),
    "bulk analysis finished"
  );

  Ok(Json(BulkResponse {
    run_id,
    total_processed: enriched.len(),
    rejected,
    stored,
    csv_output: output_path.display().to_string(),
  }))
}

pub async fn summary_report(
  State(state): State<Arc<AppState>>,
) -> Result<Json<SummaryReport>, ServiceError> {
  Ok(Json(state.store.summary().await?))
}
