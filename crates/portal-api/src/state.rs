//! Application state.

use std::sync::Arc;

use portal_store::{BidRepository, JobRepository, StoreClient, StoreConfig};

use crate::auth::TokenService;
use crate::config::ApiConfig;

/// Shared application state.
///
/// Repositories are constructed once and handed to handlers through
/// state rather than captured by closures, so every dependency a
/// handler uses is explicit.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub tokens: Arc<TokenService>,
    pub jobs: Arc<JobRepository>,
    pub bids: Arc<BidRepository>,
}

impl AppState {
    /// Create new application state, connecting to the store.
    pub async fn new(config: ApiConfig) -> anyhow::Result<Self> {
        let store_config = StoreConfig::from_env()?;
        let store = StoreClient::connect(&store_config).await?;
        Ok(Self::with_store(config, &store))
    }

    /// Build state over an already-connected store handle.
    pub fn with_store(config: ApiConfig, store: &StoreClient) -> Self {
        let tokens = TokenService::new(
            &config.token_secret,
            config.token_ttl_secs,
            config.is_production(),
        );

        Self {
            tokens: Arc::new(tokens),
            jobs: Arc::new(JobRepository::new(store)),
            bids: Arc::new(BidRepository::new(store)),
            config,
        }
    }
}
