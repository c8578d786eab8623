//! Hotel Review Analysis Service
//!
//! HTTP service around the review engine: single and bulk analysis, storage
//! of enriched reviews, CSV export and summary reports.
//! Bind to 127.0.0.1 by default (internal only).

pub mod config;
pub mod error;
pub mod export;
pub mod formats;
mod handlers;
pub mod state;
pub mod store;
pub mod types;

use std::sync::Arc;

use axum::{routing::get, routing::post, Router};

pub use config::ServiceConfig;
pub use error::ServiceError;
pub use handlers::{analyze_bulk, analyze_one, health, summary_report};
pub use state::AppState;
pub use store::{MemoryStore, PgReviewStore, ReviewStore};

pub fn build_router(state: Arc<AppState>) -> Router {
  Router::new()
    .route("/", get(health))
    .route("/health", get(health))
    .route("/reviews/analyze-one", post(analyze_one))
    .route("/reviews/analyze-bulk", post(analyze_bulk))
    .route("/reports/summary", get(summary_report))
    .with_state(state)
}
