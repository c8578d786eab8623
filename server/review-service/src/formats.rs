//! Batch ingestion: JSON lines, JSON array and CSV-with-header files.

use std::path::Path;

use review_engine::RawReview;
use serde::{Deserialize, Serialize};

use crate::error::ServiceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputFormat {
  /// One JSON object per line; blank lines are skipped.
  JsonLines,
  /// A single JSON array of objects.
  JsonArray,
  /// Header row with RawReview field names, one review per row.
  Csv,
}

impl InputFormat {
  /// Infer the format from the file extension.
  pub fn from_path(path: &Path) -> Result<Self, ServiceError> {
    let ext = path
      .extension()
      .and_then(|e| e.to_str())
      .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
      Some("jsonl") | Some("ndjson") => Ok(Self::JsonLines),
      Some("json") => Ok(Self::JsonArray),
      Some("csv") => Ok(Self::Csv),
      _ => Err(ServiceError::format(format!(
        "unsupported input file {}: expected .jsonl, .json or .csv",
        path.display()
      ))),
    }
  }
}

/// Parse a whole batch. Any malformed record fails the batch with its position.
pub fn parse_batch(bytes: &[u8], format: InputFormat) -> Result<Vec<RawReview>, ServiceError> {
  match format {
    InputFormat::JsonLines => parse_json_lines(bytes),
    InputFormat::JsonArray => serde_json::from_slice(bytes)
      .map_err(|e| ServiceError::format(format!("json array: {e}"))),
    InputFormat::Csv => parse_csv(bytes),
  }
}

fn parse_json_lines(bytes: &[u8]) -> Result<Vec<RawReview>, ServiceError> {
  let text =
    std::str::from_utf8(bytes).map_err(|e| ServiceError::format(format!("json lines: {e}")))?;

  let mut out = Vec::new();
  for (idx, line) in text.lines().enumerate() {
    let trimmed = line.trim();
    if trimmed.is_empty() {
      continue;
    }
    let raw: RawReview = serde_json::from_str(trimmed)
      .map_err(|e| ServiceError::format(format!("line {}: {e}", idx + 1)))?;
    out.push(raw);
  }
  Ok(out)
}

fn parse_csv(bytes: &[u8]) -> Result<Vec<RawReview>, ServiceError> {
  let mut reader = csv::ReaderBuilder::new()
    .has_headers(true)
    .trim(csv::Trim::Headers)
    .from_reader(bytes);

  reader
    .deserialize::<RawReview>()
    .enumerate()
    .map(|(idx, row)| row.map_err(|e| ServiceError::format(format!("csv record {}: {e}", idx + 1))))
    .collect()
}
