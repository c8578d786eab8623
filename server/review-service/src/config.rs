//! Service configuration from environment variables.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::error::ServiceError;

/// Immutable service settings, read once at startup.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
  /// PostgreSQL URL. `None` keeps results in memory.
  pub database_url: Option<String>,
  pub db_max_connections: u32,
  pub bind_addr: IpAddr,
  pub port: u16,
  /// Default batch file for `POST /reviews/analyze-bulk`.
  pub input_path: PathBuf,
  /// Default CSV export path.
  pub output_path: PathBuf,
}

impl Default for ServiceConfig {
  fn default() -> Self {
    Self {
      database_url: None,
      db_max_connections: 5,
      bind_addr: IpAddr::from([127, 0, 0, 1]),
      port: 5005,
      input_path: PathBuf::from("data/reviews_raw.jsonl"),
      output_path: PathBuf::from("output/reviews_enriched.csv"),
    }
  }
}

impl ServiceConfig {
  pub fn from_env() -> Result<Self, ServiceError> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Build from any key lookup; unset or blank keys keep their defaults.
  pub fn from_lookup<F>(lookup: F) -> Result<Self, ServiceError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
    let mut cfg = Self::default();

    cfg.database_url = get("DATABASE_URL");
    if let Some(v) = get("DB_MAX_CONNECTIONS") {
      cfg.db_max_connections = parse(&v, "DB_MAX_CONNECTIONS")?;
    }
    if let Some(v) = get("BIND_ADDR") {
      cfg.bind_addr = parse(&v, "BIND_ADDR")?;
    }
    if let Some(v) = get("PORT") {
      cfg.port = parse(&v, "PORT")?;
    }
    if let Some(v) = get("REVIEWS_INPUT_PATH") {
      cfg.input_path = PathBuf::from(v);
    }
    if let Some(v) = get("REVIEWS_OUTPUT_PATH") {
      cfg.output_path = PathBuf::from(v);
    }
    Ok(cfg)
  }

  pub fn socket_addr(&self) -> SocketAddr {
    SocketAddr::new(self.bind_addr, self.port)
  }
}

fn parse<T>(value: &str, key: &str) -> Result<T, ServiceError>
where
  T: std::str::FromStr,
  T::Err: std::fmt::Display,
{
  value
    .trim()
    .parse()
    .map_err(|e| ServiceError::config(format!("{key}={value:?}: {e}")))
}
