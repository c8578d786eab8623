//! Persistence boundary for enriched reviews.
//!
//! Writes are all-or-nothing per batch and keyed by `review_id`: storing a
//! review that already exists replaces it.

use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;
use review_engine::EnrichedReview;
use sqlx_core::query::query;
use sqlx_core::query_as::query_as;
use sqlx_core::query_scalar::query_scalar;
use sqlx_core::types::Json;
use sqlx_postgres::{PgPool, PgPoolOptions};
use tokio::sync::RwLock;
use tracing::info;

use crate::error::ServiceError;
use crate::types::{PublishCount, SentimentCount, SummaryReport};

#[async_trait]
pub trait ReviewStore: Send + Sync {
  /// Backend name for logs.
  fn name(&self) -> &str;

  /// Store a batch atomically. Returns the number of distinct `review_id`s
  /// the batch left in the store; a batch that repeats an id counts it once.
  async fn insert_batch(&self, rows: &[EnrichedReview]) -> Result<u64, ServiceError>;

  /// Total count plus counts by publish decision and by sentiment.
  async fn summary(&self) -> Result<SummaryReport, ServiceError>;
}

fn distinct_ids(rows: &[EnrichedReview]) -> u64 {
  rows
    .iter()
    .map(|r| r.review_id.as_str())
    .collect::<BTreeSet<_>>()
    .len() as u64
}

// ---------------------------------------------------------------------------
// PostgreSQL
// ---------------------------------------------------------------------------

pub struct PgReviewStore {
  pool: PgPool,
}

impl PgReviewStore {
  pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, ServiceError> {
    let pool = PgPoolOptions::new()
      .max_connections(max_connections)
      .connect(database_url)
      .await?;
    Ok(Self { pool })
  }

  pub fn from_pool(pool: PgPool) -> Self {
    Self { pool }
  }

  /// Create the table if it does not exist.
  pub async fn init_schema(&self) -> Result<(), ServiceError> {
    query(
      r#"
      CREATE TABLE IF NOT EXISTS reviews_enriched (
        review_id VARCHAR PRIMARY KEY,
        hotel_id VARCHAR NOT NULL,
        rating INTEGER,
        publish_decision VARCHAR NOT NULL,
        rejection_reasons JSONB NOT NULL DEFAULT '[]'::jsonb,
        sentiment VARCHAR NOT NULL,
        summary TEXT NOT NULL,
        analyzed_at TIMESTAMPTZ NOT NULL DEFAULT now()
      )
      "#,
    )
    .execute(&self.pool)
    .await?;
    Ok(())
  }
}

#[async_trait]
impl ReviewStore for PgReviewStore {
  fn name(&self) -> &str {
    "postgres"
  }

  async fn insert_batch(&self, rows: &[EnrichedReview]) -> Result<u64, ServiceError> {
    let mut tx = self.pool.begin().await?;

    for r in rows {
      query(
        r#"
        INSERT INTO reviews_enriched
          (review_id, hotel_id, rating, publish_decision, rejection_reasons, sentiment, summary)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        ON CONFLICT (review_id) DO UPDATE SET
          hotel_id = EXCLUDED.hotel_id,
          rating = EXCLUDED.rating,
          publish_decision = EXCLUDED.publish_decision,
          rejection_reasons = EXCLUDED.rejection_reasons,
          sentiment = EXCLUDED.sentiment,
          summary = EXCLUDED.summary,
          analyzed_at = now()
        "#,
      )
      .bind(&r.review_id)
      .bind(&r.hotel_id)
      .bind(r.rating)
      .bind(r.publish_decision.as_str())
      .bind(Json(&r.rejection_reasons))
      .bind(r.sentiment.as_str())
      .bind(&r.summary)
      .execute(&mut *tx)
      .await?;
    }

    // Dropping `tx` on an error above rolls the whole batch back.
    tx.commit().await?;
    let stored = distinct_ids(rows);
    info!(rows = rows.len(), stored, "stored batch in postgres");
    Ok(stored)
  }

  async fn summary(&self) -> Result<SummaryReport, ServiceError> {
    let total_reviews: i64 = query_scalar("SELECT COUNT(*) FROM reviews_enriched")
      .fetch_one(&self.pool)
      .await?;

    let publish_stats = query_as::<_, (String, i64)>(
      "SELECT publish_decision, COUNT(*) FROM reviews_enriched \
       GROUP BY publish_decision ORDER BY publish_decision",
    )
    .fetch_all(&self.pool)
    .await?
    .into_iter()
    .map(|(publish_decision, count)| PublishCount {
      publish_decision,
      count,
    })
    .collect();

    let sentiment_stats = query_as::<_, (String, i64)>(
      "SELECT sentiment, COUNT(*) FROM reviews_enriched GROUP BY sentiment ORDER BY sentiment",
    )
    .fetch_all(&self.pool)
    .await?
    .into_iter()
    .map(|(sentiment, count)| SentimentCount { sentiment, count })
    .collect();

    Ok(SummaryReport {
      total_reviews,
      publish_stats,
      sentiment_stats,
    })
  }
}

// ---------------------------------------------------------------------------
// In-memory (no DATABASE_URL, tests)
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct MemoryStore {
  rows: RwLock<BTreeMap<String, EnrichedReview>>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub async fn len(&self) -> usize {
    self.rows.read().await.len()
  }

  pub async fn get(&self, review_id: &str) -> Option<EnrichedReview> {
    self.rows.read().await.get(review_id).cloned()
  }
}

#[async_trait]
impl ReviewStore for MemoryStore {
  fn name(&self) -> &str {
    "memory"
  }

  async fn insert_batch(&self, rows: &[EnrichedReview]) -> Result<u64, ServiceError> {
    let mut guard = self.rows.write().await;
    for r in rows {
      guard.insert(r.review_id.clone(), r.clone());
    }
    Ok(distinct_ids(rows))
  }

  async fn summary(&self) -> Result<SummaryReport, ServiceError> {
    let guard = self.rows.read().await;

    let mut by_decision: BTreeMap<&'static str, i64> = BTreeMap::new();
    let mut by_sentiment: BTreeMap<&'static str, i64> = BTreeMap::new();
    for r in guard.values() {
      *by_decision.entry(r.publish_decision.as_str()).or_insert(0) += 1;
      *by_sentiment.entry(r.sentiment.as_str()).or_insert(0) += 1;
    }

    Ok(SummaryReport {
      total_reviews: guard.len() as i64,
      publish_stats: by_decision
        .into_iter()
        .map(|(k, count)| PublishCount {
          publish_decision: k.to_string(),
          count,
        })
        .collect(),
      sentiment_stats: by_sentiment
        .into_iter()
        .map(|(k, count)| SentimentCount {
          sentiment: k.to_string(),
          count,
        })
        .collect(),
    })
  }
}
