//! Service error taxonomy and its HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use review_engine::EngineError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ServiceError {
  /// A review is missing a required field.
  #[error(transparent)]
  Input(#[from] EngineError),

  /// Unsupported or malformed batch encoding.
  #[error("format: {0}")]
  Format(String),

  /// Storage unavailable or write rejected.
  #[error("persistence: {0}")]
  Persistence(#[from] sqlx_core::error::Error),

  #[error("io: {0}")]
  Io(#[from] std::io::Error),

  #[error("csv: {0}")]
  Csv(#[from] csv::Error),

  #[error("config: {0}")]
  Config(String),
}

impl ServiceError {
  pub fn format(msg: impl Into<String>) -> Self {
    Self::Format(msg.into())
  }

  pub fn config(msg: impl Into<String>) -> Self {
    Self::Config(msg.into())
  }

  fn status_and_code(&self) -> (StatusCode, &'static str) {
    match self {
      Self::Input(_) => (StatusCode::UNPROCESSABLE_ENTITY, "INPUT_ERROR"),
      Self::Format(_) => (StatusCode::BAD_REQUEST, "FORMAT_ERROR"),
      Self::Persistence(_) => (StatusCode::SERVICE_UNAVAILABLE, "PERSISTENCE_ERROR"),
      Self::Io(_) | Self::Csv(_) | Self::Config(_) => {
        (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
      }
    }
  }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
  code: &'static str,
  message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  review_id: Option<String>,
}

impl IntoResponse for ServiceError {
  fn into_response(self) -> Response {
    let (status, code) = self.status_and_code();
    if status.is_server_error() {
      error!(code, "request failed: {}", self);
    }

    let review_id = match &self {
      Self::Input(EngineError::Input { review_id, .. }) => review_id.clone(),
      _ => None,
    };
    let body = serde_json::json!({
      "error": ErrorBody {
        code,
        message: self.to_string(),
        review_id,
      }
    });

    (status, Json(body)).into_response()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn status_mapping() {
    let input = ServiceError::from(EngineError::missing(Some("R1"), "review_text"));
    assert_eq!(input.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);

    let format = ServiceError::format("line 3: expected value");
    assert_eq!(format.into_response().status(), StatusCode::BAD_REQUEST);

    let io = ServiceError::from(std::io::Error::other("disk full"));
    assert_eq!(io.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
  }

  #[test]
  fn input_error_message_is_engine_message() {
    let err = ServiceError::from(EngineError::missing(Some("R1"), "review_text"));
    assert_eq!(err.to_string(), "input: review R1: missing required field review_text");
  }
}
