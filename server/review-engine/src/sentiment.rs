//! Keyword sentiment: substring containment against the lexicon.

use crate::config::Lexicon;
use crate::types::Sentiment;

/// Positive wins whenever any positive word is present, even alongside
/// negative ones. Containment is not word-bounded: "badminton" counts as "bad".
pub fn detect_sentiment(text: &str, lexicon: &Lexicon) -> Sentiment {
  let text = text.to_lowercase();
  if lexicon.positive().iter().any(|w| text.contains(w.as_str())) {
    return Sentiment::Positive;
  }
  if lexicon.negative().iter().any(|w| text.contains(w.as_str())) {
    return Sentiment::Negative;
  }
  Sentiment::Neutral
}
