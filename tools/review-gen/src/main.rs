//! review-gen: synthetic hotel reviews for the review engine
//!
//! Usage:
//!   review-gen                         # 716 reviews into data/
//!   review-gen <count> <out_dir>       # custom size and directory
//!   review-gen <count> <out_dir> --seed 7
//!
//! Writes `reviews_raw.jsonl` and `reviews_raw.csv` with the same records.
//! Review content is reproducible for a given seed; `created_at` is relative
//! to the current time.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use chrono::{Duration, SecondsFormat, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use review_engine::RawReview;

const HOTEL_ID: &str = "HOTEL_001";
const DEFAULT_COUNT: usize = 716;
const DEFAULT_SEED: u64 = 42;

const REVIEWERS: [&str; 10] = [
  "Amit", "Rohit", "Sneha", "Pooja", "Rahul", "Ankit", "Neha", "Karan", "Simran", "Vikas",
];
const SOURCES: [&str; 3] = ["google", "booking", "internal"];

const POSITIVE_TEMPLATES: [&str; 5] = [
  "Great stay, very clean rooms and friendly staff",
  "Excellent hotel with nice location",
  "Amazing service and clean bathroom",
  "Loved the breakfast and the staff behavior",
  "Very nice hotel, will visit again",
];
const NEGATIVE_TEMPLATES: [&str; 5] = [
  "Worst stay ever, very dirty rooms",
  "Bad experience, noisy at night",
  "Poor maintenance and rude staff",
  "Terrible hotel, bathroom was dirty",
  "Not good, rooms were smelly",
];
const NEUTRAL_TEMPLATES: [&str; 5] = [
  "Hotel was okay, nothing special",
  "Average stay, decent location",
  "Rooms were fine but service was slow",
  "Okay experience, food was average",
  "Nothing great, nothing terrible",
];

const PRICE_SNIPPETS: [&str; 4] = [
  "I paid 6000 per night",
  "Cost was ₹4500",
  "Price is too high for this hotel",
  "Tariff was 5000 INR",
];
const PHONE_SNIPPETS: [&str; 2] = ["Call me at 9876543210", "My number is 9123456789"];
const EMAIL_SNIPPETS: [&str; 2] = ["Email me at test@gmail.com", "Contact: demo@yahoo.com"];
const LINK_SNIPPETS: [&str; 2] = ["Check www.fakehotel.com", "More details at http://spamlink.com"];

/// Injection rate per snippet family: price, phone, email, link.
const SNIPPET_RATES: [(f64, &[&str]); 4] = [
  (0.3, &PRICE_SNIPPETS),
  (0.15, &PHONE_SNIPPETS),
  (0.1, &EMAIL_SNIPPETS),
  (0.1, &LINK_SNIPPETS),
];

struct Args {
  count: usize,
  out_dir: PathBuf,
  seed: u64,
}

fn parse_args(args: &[String]) -> Result<Args, String> {
  let mut positional = Vec::new();
  let mut seed = DEFAULT_SEED;
  let mut it = args.iter();
  while let Some(arg) = it.next() {
    if arg == "--seed" {
      let v = it.next().ok_or("--seed needs a value")?;
      seed = v.parse().map_err(|e| format!("invalid seed {:?}: {}", v, e))?;
    } else {
      positional.push(arg.as_str());
    }
  }
  if positional.len() > 2 {
    return Err("too many arguments".into());
  }

  let count = match positional.first() {
    Some(v) => v.parse().map_err(|e| format!("invalid count {:?}: {}", v, e))?,
    None => DEFAULT_COUNT,
  };
  let out_dir = PathBuf::from(positional.get(1).copied().unwrap_or("data"));
  Ok(Args {
    count,
    out_dir,
    seed,
  })
}

fn pick<'a>(rng: &mut StdRng, pool: &[&'a str]) -> &'a str {
  pool.choose(rng).copied().unwrap_or_default()
}

fn generate_review(i: usize, rng: &mut StdRng) -> RawReview {
  let (template, rating) = match rng.gen_range(0..3) {
    0 => (pick(rng, &POSITIVE_TEMPLATES), rng.gen_range(4..=5)),
    1 => (pick(rng, &NEGATIVE_TEMPLATES), rng.gen_range(1..=2)),
    _ => (pick(rng, &NEUTRAL_TEMPLATES), 3),
  };

  let mut text = template.to_string();
  for (rate, snippets) in SNIPPET_RATES {
    if rng.gen_bool(rate) {
      text.push_str(". ");
      text.push_str(pick(rng, snippets));
    }
  }

  let age = Duration::minutes(rng.gen_range(0..90 * 24 * 60));
  RawReview {
    review_id: Some(format!("R{}", i + 1)),
    hotel_id: Some(HOTEL_ID.to_string()),
    reviewer_name: Some(pick(rng, &REVIEWERS).to_string()),
    rating: Some(rating),
    review_text: Some(text),
    source: Some(pick(rng, &SOURCES).to_string()),
    created_at: Some((Utc::now() - age).to_rfc3339_opts(SecondsFormat::Secs, true)),
  }
}

fn generate(count: usize, seed: u64) -> Vec<RawReview> {
  let mut rng = StdRng::seed_from_u64(seed);
  (0..count).map(|i| generate_review(i, &mut rng)).collect()
}

fn write_jsonl(path: &Path, reviews: &[RawReview]) -> Result<(), Box<dyn std::error::Error>> {
  let mut out = String::new();
  for r in reviews {
    out.push_str(&serde_json::to_string(r)?);
    out.push('\n');
  }
  fs::write(path, out)?;
  Ok(())
}

fn write_csv(path: &Path, reviews: &[RawReview]) -> Result<(), Box<dyn std::error::Error>> {
  let mut writer = csv::Writer::from_path(path)?;
  for r in reviews {
    writer.serialize(r)?;
  }
  writer.flush()?;
  Ok(())
}

fn run(args: &Args) -> Result<(PathBuf, PathBuf), Box<dyn std::error::Error>> {
  let reviews = generate(args.count, args.seed);
  fs::create_dir_all(&args.out_dir)?;

  let jsonl = args.out_dir.join("reviews_raw.jsonl");
  let csv = args.out_dir.join("reviews_raw.csv");
  write_jsonl(&jsonl, &reviews)?;
  write_csv(&csv, &reviews)?;
  Ok((jsonl, csv))
}

fn main() {
  let argv: Vec<String> = env::args().skip(1).collect();
  let args = parse_args(&argv).unwrap_or_else(|e| {
    eprintln!("review-gen: {}", e);
    eprintln!("usage: review-gen [count] [out_dir] [--seed N]");
    process::exit(2);
  });

  match run(&args) {
    Ok((jsonl, csv)) => {
      println!("Generated {} reviews", args.count);
      println!("JSONL: {}", jsonl.display());
      println!("CSV: {}", csv.display());
    }
    Err(e) => {
      eprintln!("review-gen: {}", e);
      process::exit(1);
    }
  }
}
