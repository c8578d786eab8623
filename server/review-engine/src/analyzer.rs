//! Analyzer: runs the detectors over one review and assembles the verdict.

use tracing::debug;

use crate::config::Config;
use crate::decision;
use crate::error::EngineError;
use crate::normalize;
use crate::sentiment;
use crate::signals;
use crate::summary;
use crate::types::*;

/// The review analyzer. Holds only immutable configuration, so one instance
/// can be shared across threads and requests.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
  config: Config,
}

impl Analyzer {
  pub fn new(config: Config) -> Self {
    Self { config }
  }

  pub fn with_defaults() -> Self {
    Self::new(Config::default())
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  /// Validate and analyze a single raw review.
  ///
  /// Fails only when `review_text` is missing.
  pub fn analyze(&self, raw: &RawReview) -> Result<EnrichedReview, EngineError> {
    let review = normalize::normalize(raw)?;
    Ok(self.analyze_review(&review))
  }

  /// Analyze an already validated review. Total.
  pub fn analyze_review(&self, review: &Review) -> EnrichedReview {
    let signals = signals::detect_signals(&review.text);
    let sentiment = sentiment::detect_sentiment(&review.text, &self.config.lexicon);
    let summary = summary::generate_summary(&review.text);
    let (publish_decision, rejection_reasons) = decision::decide(&signals);

    if publish_decision == Decision::Reject {
      debug!(
        review_id = %review.review_id,
        reasons = ?rejection_reasons,
        "review rejected"
      );
    }

    EnrichedReview {
      review_id: review.review_id.clone(),
      hotel_id: review.hotel_id.clone(),
      rating: review.rating,
      publish_decision,
      rejection_reasons,
      sentiment,
      summary,
    }
  }

  /// Analyze a batch in order. The first invalid review aborts the batch.
  pub fn analyze_batch(&self, raws: &[RawReview]) -> Result<Vec<EnrichedReview>, EngineError> {
    raws.iter().map(|raw| self.analyze(raw)).collect()
  }
}
