//! Shared application state.

use std::sync::Arc;

use review_engine::Analyzer;

use crate::config::ServiceConfig;
use crate::store::ReviewStore;

pub struct AppState {
  pub analyzer: Analyzer,
  pub store: Arc<dyn ReviewStore>,
  pub config: ServiceConfig,
}

impl AppState {
  pub fn new(analyzer: Analyzer, store: Arc<dyn ReviewStore>, config: ServiceConfig) -> Self {
    Self {
      analyzer,
      store,
      config,
    }
  }
}
