//! Decision policy: signals to ordered rejection reasons and a verdict.

use crate::types::{Decision, ReasonCode, SignalSet};

/// Reasons are appended in fixed order PRICE, PHONE, EMAIL, LINK.
/// REJECT iff at least one reason was appended.
pub fn decide(signals: &SignalSet) -> (Decision, Vec<ReasonCode>) {
  let mut reasons = Vec::new();
  if signals.price {
    reasons.push(ReasonCode::PriceMentioned);
  }
  if signals.phone {
    reasons.push(ReasonCode::PhoneNumberMentioned);
  }
  if signals.email {
    reasons.push(ReasonCode::EmailMentioned);
  }
  if signals.link {
    reasons.push(ReasonCode::LinkMentioned);
  }

  let decision = if reasons.is_empty() {
    Decision::Publish
  } else {
    Decision::Reject
  };
  (decision, reasons)
}
