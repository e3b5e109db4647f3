use futures::future::join_all;
use std::sync::Arc;
use tracing::{debug, error, info};

use crate::exchanges::api_clients::PoolApiClient;
use crate::exchanges::types::{Pool, TokenPair};
use crate::shared::errors::FetchError;
use super::{flatten_pools, PairFetch, PairResult};

/// Every unordered pair `{tokens[i], tokens[j]}` with `i < j`, in order.
pub fn enumerate_pairs(tokens: &[String]) -> Vec<TokenPair> {
    let mut pairs = Vec::with_capacity(tokens.len() * tokens.len().saturating_sub(1) / 2);

    for (i, token_a) in tokens.iter().enumerate() {
        for token_b in &tokens[i + 1..] {
            pairs.push(TokenPair::new(token_a.clone(), token_b.clone()));
        }
    }

    pairs
}

/// Fetches pools for all pairs of a token set
pub struct PairScanner {
    client: Arc<dyn PoolApiClient>,
}

impl PairScanner {
    pub fn new(client: Arc<dyn PoolApiClient>) -> Self {
        Self { client }
    }

    /// One request for one pair. Never fails: errors are logged and turned
    /// into `NotFound` / `Failed`.
    pub async fn fetch_pools_for_pair(&self, pair: &TokenPair) -> PairFetch {
        let key = pair.key();

        match self.client.get_group_pair(&key).await {
            Ok(pools) => {
                debug!("{} pools for {}", pools.len(), key);
                PairFetch::Found(pools)
            }
            Err(FetchError::NotFound(status)) => {
                info!(
                    "Pair not found (status {}) for tokens: {} and {}",
                    status.as_u16(),
                    pair.token_a,
                    pair.token_b
                );
                PairFetch::NotFound
            }
            Err(e) => {
                error!("Error fetching pair for {} and {}: {}", pair.token_a, pair.token_b, e);
                PairFetch::Failed(e)
            }
        }
    }

    /// Fetch every pair concurrently and wait for all of them.
    ///
    /// Results come back in enumeration order regardless of completion order.
    pub async fn scan_pairs(&self, tokens: &[String]) -> Vec<PairResult> {
        let pairs = enumerate_pairs(tokens);
        info!("Scanning {} pairs across {} tokens", pairs.len(), tokens.len());

        let fetches = pairs.into_iter().map(|pair| async move {
            let fetch = self.fetch_pools_for_pair(&pair).await;
            PairResult {
                key: pair.key(),
                pair,
                fetch,
            }
        });

        join_all(fetches).await
    }

    pub async fn enumerate_and_fetch_all(&self, tokens: &[String]) -> Vec<Pool> {
        flatten_pools(self.scan_pairs(tokens).await)
    }
}
