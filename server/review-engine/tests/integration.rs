//! Integration tests for the review engine.

use proptest::prelude::*;
use review_engine::{
  analyze, detect_signals, Analyzer, Decision, EngineError, EnrichedReview, RawReview, Sentiment,
};

fn fixture_review(text: &str) -> RawReview {
  let json = format!(
    r#"{{
      "review_id": "R1",
      "hotel_id": "H1",
      "reviewer_name": "Sneha",
      "rating": 5,
      "review_text": {},
      "source": "google",
      "created_at": "2025-01-15T10:30:00"
    }}"#,
    serde_json::to_string(text).unwrap()
  );
  serde_json::from_str(&json).unwrap()
}

#[test]
fn price_mention_is_rejected_with_positive_sentiment() {
  let out = analyze(&fixture_review(
    "Great stay, very clean rooms. I paid 6000 per night.",
  ))
  .unwrap();

  let json = serde_json::to_value(&out).unwrap();
  assert_eq!(json["review_id"], "R1");
  assert_eq!(json["hotel_id"], "H1");
  assert_eq!(json["rating"], 5);
  assert_eq!(json["publish_decision"], "REJECT");
  assert_eq!(json["rejection_reasons"], serde_json::json!(["PRICE_MENTIONED"]));
  assert_eq!(json["sentiment"], "SENTIMENT_POSITIVE");
  assert_eq!(
    json["summary"],
    "Great stay, very clean rooms. I paid 6000 per night."
  );
}

#[test]
fn clean_negative_review_is_published() {
  let out = analyze(&fixture_review("Worst stay ever, very dirty rooms")).unwrap();

  assert_eq!(out.publish_decision, Decision::Publish);
  assert!(out.rejection_reasons.is_empty());
  assert_eq!(out.sentiment, Sentiment::Negative);
  assert_eq!(out.summary, "Worst stay ever, very dirty rooms");

  let json = serde_json::to_value(&out).unwrap();
  assert_eq!(json["rejection_reasons"], serde_json::json!([]));
  assert_eq!(json["sentiment"], "SENTIMENT_NEGATIVE");
}

#[test]
fn missing_text_is_an_input_error() {
  let raw: RawReview =
    serde_json::from_str(r#"{"review_id": "R8", "hotel_id": "H1", "rating": 2}"#).unwrap();
  match analyze(&raw) {
    Err(EngineError::Input { review_id, field }) => {
      assert_eq!(review_id.as_deref(), Some("R8"));
      assert_eq!(field, "review_text");
    }
    other => panic!("expected input error, got {other:?}"),
  }
}

#[test]
fn all_reasons_keep_fixed_order() {
  let out = analyze(&fixture_review(
    "More details at http://spamlink.com. Email me at test@gmail.com. Call me at 9876543210. Cost was ₹4500",
  ))
  .unwrap();
  let json = serde_json::to_value(&out).unwrap();
  assert_eq!(
    json["rejection_reasons"],
    serde_json::json!([
      "PRICE_MENTIONED",
      "PHONE_NUMBER_MENTIONED",
      "EMAIL_MENTIONED",
      "LINK_MENTIONED"
    ])
  );
}

#[test]
fn long_review_summary_is_truncated() {
  let text = "Amazing service and clean bathroom. ".repeat(4);
  let out = analyze(&fixture_review(&text)).unwrap();
  assert_eq!(out.summary.chars().count(), 83);
  assert!(out.summary.ends_with("..."));
}

#[test]
fn deterministic_output_across_runs() {
  let raw = fixture_review("Bad experience, noisy at night. Check www.fakehotel.com");

  let s1 = Analyzer::with_defaults().analyze(&raw).unwrap();
  let s2 = Analyzer::with_defaults().analyze(&raw).unwrap();
  assert_eq!(
    serde_json::to_string(&s1).unwrap(),
    serde_json::to_string(&s2).unwrap()
  );

  let back: EnrichedReview = serde_json::from_str(&serde_json::to_string(&s1).unwrap()).unwrap();
  assert_eq!(back, s1);
}

#[test]
fn shared_analyzer_across_threads() {
  let analyzer = std::sync::Arc::new(Analyzer::with_defaults());
  let handles: Vec<_> = (0..4)
    .map(|i| {
      let analyzer = analyzer.clone();
      std::thread::spawn(move || {
        let raw = RawReview::new(&format!("R{i}"), "H1", 4, "Very nice hotel, will visit again");
        analyzer.analyze(&raw).unwrap()
      })
    })
    .collect();
  for h in handles {
    let out = h.join().unwrap();
    assert_eq!(out.publish_decision, Decision::Publish);
    assert_eq!(out.sentiment, Sentiment::Positive);
  }
}

proptest! {
  #[test]
  fn appending_a_signal_never_hides_earlier_ones(text in "[ -~]{0,120}") {
    let before = detect_signals(&text);
    let after = detect_signals(&format!("{text} https://x.io"));

    prop_assert!(after.link);
    prop_assert!(after.price || !before.price);
    prop_assert!(after.phone || !before.phone);
    prop_assert!(after.email || !before.email);
  }

  #[test]
  fn verdict_matches_reasons(text in "\\PC{0,160}") {
    let out = analyze(&RawReview::new("P", "H", 3, &text)).unwrap();
    prop_assert_eq!(
      out.publish_decision == Decision::Reject,
      !out.rejection_reasons.is_empty()
    );
  }
}
