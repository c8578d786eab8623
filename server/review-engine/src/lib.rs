//! Hotel review analysis engine — deterministic, rule-based.
//!
//! Detects price/phone/email/link mentions, classifies sentiment from keyword
//! lists, truncates a summary preview, and decides PUBLISH or REJECT with
//! ordered rejection reasons.
//!
//! No AI, no DB, no network; pure computation.

pub mod analyzer;
pub mod config;
pub mod decision;
pub mod error;
pub mod normalize;
pub mod sentiment;
pub mod signals;
pub mod summary;
pub mod types;

pub use analyzer::Analyzer;
pub use config::{Config, Lexicon};
pub use decision::decide;
pub use error::EngineError;
pub use sentiment::detect_sentiment;
pub use signals::detect_signals;
pub use summary::generate_summary;
pub use types::{Decision, EnrichedReview, RawReview, ReasonCode, Review, Sentiment, SignalSet};

/// Analyze one review with the default configuration (no I/O).
pub fn analyze(raw: &RawReview) -> Result<EnrichedReview, EngineError> {
  Analyzer::with_defaults().analyze(raw)
}
