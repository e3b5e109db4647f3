pub mod meteora_dlmm_client;

pub use meteora_dlmm_client::MeteoraDlmmApiClient;

use async_trait::async_trait;
use crate::exchanges::types::{PairKey, Pool};
use crate::shared::errors::FetchError;

/// Source of pool metadata for a token pair
#[async_trait]
pub trait PoolApiClient: Send + Sync {
    /// All pools listed for the pair, in API response order.
    ///
    /// Returns `FetchError::NotFound` when the API reports that the pair has
    /// no pools.
    async fn get_group_pair(&self, pair_key: &PairKey) -> Result<Vec<Pool>, FetchError>;
}
