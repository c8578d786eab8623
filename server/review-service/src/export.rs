//! CSV export of enriched reviews.

use std::path::Path;

use review_engine::EnrichedReview;
use serde::Serialize;
use serde_json::Value;

use crate::error::ServiceError;

/// Header row; matches EnrichedReview's field names.
pub const CSV_HEADER: [&str; 7] = [
  "review_id",
  "hotel_id",
  "rating",
  "publish_decision",
  "rejection_reasons",
  "sentiment",
  "summary",
];

/// Flat CSV row. Rejection reasons are a JSON list inside one cell.
#[derive(Serialize)]
struct CsvRow<'a> {
  review_id: &'a str,
  hotel_id: &'a str,
  rating: Option<i32>,
  publish_decision: &'static str,
  rejection_reasons: String,
  sentiment: &'static str,
  summary: &'a str,
}

impl<'a> CsvRow<'a> {
  fn from_review(r: &'a EnrichedReview) -> Self {
    let reasons: Vec<&str> = r.rejection_reasons.iter().map(|c| c.as_str()).collect();
    Self {
      review_id: &r.review_id,
      hotel_id: &r.hotel_id,
      rating: r.rating,
      publish_decision: r.publish_decision.as_str(),
      rejection_reasons: Value::from(reasons).to_string(),
      sentiment: r.sentiment.as_str(),
      summary: &r.summary,
    }
  }
}

/// Render rows as CSV bytes. The header is written even for an empty batch.
pub fn to_csv(rows: &[EnrichedReview]) -> Result<Vec<u8>, ServiceError> {
  let mut writer = csv::WriterBuilder::new()
    .has_headers(false)
    .from_writer(Vec::new());
  writer.write_record(CSV_HEADER)?;
  for r in rows {
    writer.serialize(CsvRow::from_review(r))?;
  }
  writer
    .into_inner()
    .map_err(|e| ServiceError::Io(e.into_error()))
}

/// Write the CSV export, creating the parent directory if needed.
pub async fn write_csv(path: &Path, rows: &[EnrichedReview]) -> Result<(), ServiceError> {
  let bytes = to_csv(rows)?;
  if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
    tokio::fs::create_dir_all(parent).await?;
  }
  tokio::fs::write(path, bytes).await?;
  Ok(())
}
