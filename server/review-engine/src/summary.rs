//! Summary preview: character-bounded truncation.

/// Characters kept before the ellipsis.
pub const SUMMARY_MAX_CHARS: usize = 80;
pub const ELLIPSIS: &str = "...";

/// First 80 characters plus "..." when the text is longer, else the text as-is.
/// Counts chars, so multi-byte characters are never split.
pub fn generate_summary(text: &str) -> String {
  match text.char_indices().nth(SUMMARY_MAX_CHARS) {
    Some((cut, _)) => format!("{}{}", &text[..cut], ELLIPSIS),
    None => text.to_string(),
  }
}
