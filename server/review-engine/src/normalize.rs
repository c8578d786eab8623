//! Validate raw reviews into the canonical internal Review model.

use crate::error::EngineError;
use crate::types::{RawReview, Review};

/// Validate a RawReview.
///
/// Only `review_text` is required: every detector reads it. Missing ids fall
/// back to empty strings and a missing rating stays absent.
pub fn normalize(raw: &RawReview) -> Result<Review, EngineError> {
  let text = raw
    .review_text
    .as_ref()
    .ok_or_else(|| EngineError::missing(raw.review_id.as_deref(), "review_text"))?;

  Ok(Review {
    review_id: raw.review_id.clone().unwrap_or_default(),
    hotel_id: raw.hotel_id.clone().unwrap_or_default(),
    rating: raw.rating,
    text: text.clone(),
  })
}
