//! Binary entrypoint: read JSON lines from stdin, write JSON lines to stdout.
//!
//! Each input line is a RawReview. Each output line is either:
//! - An EnrichedReview
//! - An ErrorOutput (when the line is not JSON or the review is invalid)

use review_engine::types::ErrorOutput;
use review_engine::{Analyzer, EngineError, RawReview};
use std::io::{self, BufRead, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
    .with_writer(io::stderr)
    .init();

  let stdin = io::stdin();
  let stdout = io::stdout();
  let mut out = io::BufWriter::new(stdout.lock());
  let analyzer = Analyzer::with_defaults();
  let mut processed = 0usize;
  let mut failed = 0usize;

  for line in stdin.lock().lines() {
    let line = match line {
      Ok(l) => l,
      Err(e) => {
        error!("read error: {}", e);
        std::process::exit(1);
      }
    };

    let trimmed = line.trim();
    if trimmed.is_empty() {
      continue;
    }

    let raw: RawReview = match serde_json::from_str(trimmed) {
      Ok(v) => v,
      Err(e) => {
        failed += 1;
        emit(&mut out, &ErrorOutput::new(EngineError::from(e).to_string()));
        continue;
      }
    };

    match analyzer.analyze(&raw) {
      Ok(enriched) => {
        processed += 1;
        emit(&mut out, &enriched);
      }
      Err(e) => {
        failed += 1;
        let err = match &e {
          EngineError::Input { review_id, field } => ErrorOutput::new(e.to_string())
            .with_field(*field)
            .with_review_id(review_id.clone()),
          _ => ErrorOutput::new(e.to_string()),
        };
        emit(&mut out, &err);
      }
    }
  }

  let _ = out.flush();
  info!(processed, failed, "review-engine finished");
}

fn emit<T: serde::Serialize>(out: &mut impl Write, value: &T) {
  let _ = serde_json::to_writer(&mut *out, value);
  let _ = writeln!(out);
}
