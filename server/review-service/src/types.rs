//! Request/response types for the review service.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::formats::InputFormat;

/// Optional overrides for a bulk run; every field falls back to the service config.
#[derive(Debug, Default, Deserialize)]
pub struct BulkRequest {
  #[serde(default)]
  pub input_path: Option<String>,
  #[serde(default)]
  pub output_path: Option<String>,
  #[serde(default)]
  pub format: Option<InputFormat>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BulkResponse {
  pub run_id: Uuid,
  pub total_processed: usize,
  pub rejected: usize,
  pub stored: u64,
  pub csv_output: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishCount {
  pub publish_decision: String,
  pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentCount {
  pub sentiment: String,
  pub count: i64,
}

/// Aggregate counts over every stored review. Stats are ordered by key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryReport {
  pub total_reviews: i64,
  pub publish_stats: Vec<PublishCount>,
  pub sentiment_stats: Vec<SentimentCount>,
}
