//! Binary entrypoint for the review analysis service.

use std::sync::Arc;

use review_engine::Analyzer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use review_service::{
  build_router, AppState, MemoryStore, PgReviewStore, ReviewStore, ServiceConfig,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let config = ServiceConfig::from_env()?;

  let store: Arc<dyn ReviewStore> = match &config.database_url {
    Some(url) => {
      let store = PgReviewStore::connect(url, config.db_max_connections).await?;
      store.init_schema().await?;
      Arc::new(store)
    }
    None => {
      warn!("DATABASE_URL not set; enriched reviews are kept in memory only");
      Arc::new(MemoryStore::new())
    }
  };

  let addr = config.socket_addr();
  let state = Arc::new(AppState::new(Analyzer::with_defaults(), store, config));

  let app = build_router(state)
    .layer(TraceLayer::new_for_http())
    .layer(CorsLayer::permissive());

  info!("review-service listening on http://{}", addr);

  let listener = tokio::net::TcpListener::bind(addr).await?;
  axum::serve(listener, app).await?;

  Ok(())
}
