//! Engine configuration with sane defaults.

const POSITIVE_WORDS: [&str; 6] = ["good", "great", "excellent", "nice", "amazing", "clean"];
const NEGATIVE_WORDS: [&str; 6] = ["bad", "poor", "dirty", "worst", "terrible", "noisy"];

/// Keyword lists for the sentiment classifier. Words are stored lower-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
  positive: Vec<String>,
  negative: Vec<String>,
}

impl Lexicon {
  /// Build a lexicon; words are lower-cased and empty entries dropped
  /// (an empty word would be contained in every text).
  pub fn new<P, N>(positive: P, negative: N) -> Self
  where
    P: IntoIterator,
    P::Item: AsRef<str>,
    N: IntoIterator,
    N::Item: AsRef<str>,
  {
    Self {
      positive: clean_words(positive),
      negative: clean_words(negative),
    }
  }

  pub fn positive(&self) -> &[String] {
    &self.positive
  }

  pub fn negative(&self) -> &[String] {
    &self.negative
  }
}

impl Default for Lexicon {
  fn default() -> Self {
    Self::new(POSITIVE_WORDS, NEGATIVE_WORDS)
  }
}

fn clean_words<I>(words: I) -> Vec<String>
where
  I: IntoIterator,
  I::Item: AsRef<str>,
{
  words
    .into_iter()
    .map(|w| w.as_ref().trim().to_lowercase())
    .filter(|w| !w.is_empty())
    .collect()
}

/// Immutable analyzer configuration, injected at construction.
#[derive(Debug, Clone, Default)]
pub struct Config {
  /// Sentiment keyword lists.
  pub lexicon: Lexicon,
}
