//! Structured error types for the review engine.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
  /// A field the pipeline cannot proceed without is absent or null.
  #[error(
    "input: review {}: missing required field {field}",
    .review_id.as_deref().unwrap_or("<unknown>")
  )]
  Input {
    review_id: Option<String>,
    field: &'static str,
  },

  #[error("json: {0}")]
  Json(#[from] serde_json::Error),
}

impl EngineError {
  pub fn missing(review_id: Option<&str>, field: &'static str) -> Self {
    Self::Input {
      review_id: review_id.map(str::to_string),
      field,
    }
  }
}
