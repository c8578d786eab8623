//! Core types for the review engine (JSON contracts + internal models).

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Inbound types (JSON contract — what the caller sends)
// ---------------------------------------------------------------------------

/// One raw review as supplied by a request body or a batch file line.
///
/// Every field is optional at this boundary so that a missing `review_text`
/// surfaces as an input error from [`crate::normalize`] rather than a parse
/// failure. Unknown fields are silently ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawReview {
  #[serde(default)]
  pub review_id: Option<String>,
  #[serde(default)]
  pub hotel_id: Option<String>,
  #[serde(default)]
  pub reviewer_name: Option<String>,
  #[serde(default)]
  pub rating: Option<i32>,
  #[serde(default)]
  pub review_text: Option<String>,
  #[serde(default)]
  pub source: Option<String>,
  #[serde(default)]
  pub created_at: Option<String>,
}

impl RawReview {
  /// Minimal record with the fields the pipeline carries through.
  pub fn new(review_id: &str, hotel_id: &str, rating: i32, review_text: &str) -> Self {
    Self {
      review_id: Some(review_id.to_string()),
      hotel_id: Some(hotel_id.to_string()),
      rating: Some(rating),
      review_text: Some(review_text.to_string()),
      ..Self::default()
    }
  }
}

// ---------------------------------------------------------------------------
// Internal normalized types
// ---------------------------------------------------------------------------

/// Validated review: the text is guaranteed present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
  pub review_id: String,
  pub hotel_id: String,
  pub rating: Option<i32>,
  pub text: String,
}

/// Presence flags for content the platform does not allow in published reviews.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SignalSet {
  pub price: bool,
  pub phone: bool,
  pub email: bool,
  pub link: bool,
}

// ---------------------------------------------------------------------------
// Verdict enums (normalized)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Decision {
  Publish,
  Reject,
}

impl Decision {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Publish => "PUBLISH",
      Self::Reject => "REJECT",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReasonCode {
  PriceMentioned,
  PhoneNumberMentioned,
  EmailMentioned,
  LinkMentioned,
}

impl ReasonCode {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::PriceMentioned => "PRICE_MENTIONED",
      Self::PhoneNumberMentioned => "PHONE_NUMBER_MENTIONED",
      Self::EmailMentioned => "EMAIL_MENTIONED",
      Self::LinkMentioned => "LINK_MENTIONED",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
  #[serde(rename = "SENTIMENT_POSITIVE")]
  Positive,
  #[serde(rename = "SENTIMENT_NEGATIVE")]
  Negative,
  #[serde(rename = "SENTIMENT_NEUTRAL")]
  Neutral,
}

impl Sentiment {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Positive => "SENTIMENT_POSITIVE",
      Self::Negative => "SENTIMENT_NEGATIVE",
      Self::Neutral => "SENTIMENT_NEUTRAL",
    }
  }
}

// ---------------------------------------------------------------------------
// Output types (JSON contract — what we emit)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedReview {
  pub review_id: String,
  pub hotel_id: String,
  pub rating: Option<i32>,
  pub publish_decision: Decision,
  pub rejection_reasons: Vec<ReasonCode>,
  pub sentiment: Sentiment,
  pub summary: String,
}

// ---------------------------------------------------------------------------
// CLI stream wrappers
// ---------------------------------------------------------------------------

/// Structured error output for invalid input lines.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
  pub error: bool,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub field: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub review_id: Option<String>,
}

impl ErrorOutput {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: true,
      message: message.into(),
      field: None,
      review_id: None,
    }
  }

  pub fn with_field(mut self, field: impl Into<String>) -> Self {
    self.field = Some(field.into());
    self
  }

  pub fn with_review_id(mut self, review_id: Option<String>) -> Self {
    self.review_id = review_id;
    self
  }
}
