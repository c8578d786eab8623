//! Signal detection: price, phone, email and link mentions in review text.
//!
//! The patterns are high-recall: they over-trigger rather than miss.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::SignalSet;

/// Any currency symbol, the standalone tokens "rs"/"rs."/"inr", or a
/// standalone 4–6 digit run.
///
/// A bare 4–6 digit number counts as a price even without currency context
/// ("room 1204" is rejected). "rs" and "inr" only match as whole words, so
/// "worst" and "hours" do not trigger.
///
/// `\b` on both sides means the digit run never matches inside a longer run of
/// digits, so a 10-digit phone number is not also a price.
const PRICE_PATTERN: &str = r"(\p{Sc}|\brs\b\.?|\binr\b|\b\d{4,6}\b)";
const PHONE_PATTERN: &str = r"\b\d{10}\b";
const EMAIL_PATTERN: &str = r"[a-z0-9_.+-]+@[a-z0-9-]+(?:\.[a-z0-9-]+)*\.[a-z0-9-]{2,}";
const LINK_PATTERN: &str = r"(https?://|www\.)";

static PRICE: Lazy<Regex> = Lazy::new(|| Regex::new(PRICE_PATTERN).expect("price pattern"));
static PHONE: Lazy<Regex> = Lazy::new(|| Regex::new(PHONE_PATTERN).expect("phone pattern"));
static EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern"));
static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(LINK_PATTERN).expect("link pattern"));

/// Detect all four signals. Every category is evaluated; none short-circuits another.
pub fn detect_signals(text: &str) -> SignalSet {
  let text = text.to_lowercase();
  let price = PRICE.is_match(&text);
  let phone = PHONE.is_match(&text);
  let email = EMAIL.is_match(&text);
  let link = LINK.is_match(&text);
  SignalSet {
    price,
    phone,
    email,
    link,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_text_has_no_signals() {
    assert_eq!(detect_signals(""), SignalSet::default());
  }

  #[test]
  fn price_currency_markers() {
    assert!(detect_signals("Cost was ₹4500").price);
    assert!(detect_signals("Cost was $80").price);
    assert!(detect_signals("Tariff was 5000 INR").price);
    assert!(detect_signals("paid Rs. 300 only").price);
    assert!(!detect_signals("Price is too high for this hotel").price);
  }

  #[test]
  fn price_bare_digit_runs() {
    assert!(detect_signals("I paid 6000 per night").price);
    assert!(detect_signals("room 1204 was fine").price);
    assert!(detect_signals("123456").price);
    assert!(!detect_signals("stayed 3 nights in room 204").price);
    // Seven digits: no standalone 4-6 run.
    assert!(!detect_signals("booking 1234567").price);
  }

  #[test]
  fn currency_words_match_only_as_whole_tokens() {
    assert!(!detect_signals("Worst stay ever, very dirty rooms").price);
    assert!(!detect_signals("Waited two hours at check-in").price);
    assert!(!detect_signals("Others said the linen was fine").price);
    assert!(!detect_signals("The dinner was cold").price);
    assert!(detect_signals("paid rs 300 at the desk").price);
    assert!(detect_signals("RS.300 for breakfast").price);
    assert!(detect_signals("charged 300 inr extra").price);
  }

  #[test]
  fn phone_requires_exactly_ten_digits() {
    let s = detect_signals("Call me at 9876543210");
    assert!(s.phone);
    assert!(!s.price, "ten digit run is not a 4-6 digit run");
    assert!(!detect_signals("call 98765432101").phone);
    assert!(!detect_signals("call 987654321").phone);
  }

  #[test]
  fn email_shapes() {
    assert!(detect_signals("Email me at test@gmail.com").email);
    assert!(detect_signals("Contact: First.Last+tag@mail.example.co.in").email);
    assert!(!detect_signals("ping me @ the desk").email);
    assert!(!detect_signals("user@localhost").email);
    assert!(!detect_signals("a@b.c").email);
  }

  #[test]
  fn link_prefixes() {
    assert!(detect_signals("Check www.fakehotel.com").link);
    assert!(detect_signals("More details at http://spamlink.com").link);
    assert!(detect_signals("HTTPS://EXAMPLE.ORG").link);
    assert!(!detect_signals("visit our website").link);
  }

  #[test]
  fn all_categories_evaluated_together() {
    let s = detect_signals("Paid ₹4500, call 9876543210, mail a.b@x.com or see https://x.io");
    assert_eq!(
      s,
      SignalSet {
        price: true,
        phone: true,
        email: true,
        link: true
      }
    );
  }
}
