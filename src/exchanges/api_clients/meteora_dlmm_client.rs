use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use serde_json::Value;
use tracing::{debug, warn};

use crate::exchanges::types::{PairKey, Pool};
use crate::shared::errors::FetchError;
use super::PoolApiClient;

pub const DEFAULT_BASE_URL: &str = "https://dlmm-api.meteora.ag";

/// Meteora DLMM metadata API client
pub struct MeteoraDlmmApiClient {
    http_client: Client,
    base_url: String,
}

impl MeteoraDlmmApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            base_url: base_url.into(),
        })
    }

    pub fn group_pair_url(&self, pair_key: &PairKey) -> String {
        format!(
            "{}/pair/group_pair/{}",
            self.base_url.trim_end_matches('/'),
            pair_key
        )
    }
}

/// Maps a `group_pair` response onto pools or a typed failure.
///
/// The API answers 500 for pairs it has no pools for. A body that is not a
/// JSON array is a decode error; a single record that does not fit `Pool` is
/// skipped so its siblings still get ranked.
pub fn parse_group_pair_response(status: StatusCode, body: &str) -> Result<Vec<Pool>, FetchError> {
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        return Err(FetchError::NotFound(status));
    }
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }

    let records: Vec<Value> = serde_json::from_str(body)?;
    let pools = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value::<Pool>(record) {
            Ok(pool) => Some(pool),
            Err(e) => {
                warn!("Skipping pool record #{}: {}", index, e);
                None
            }
        })
        .collect();
    Ok(pools)
}

#[async_trait]
impl PoolApiClient for MeteoraDlmmApiClient {
    async fn get_group_pair(&self, pair_key: &PairKey) -> Result<Vec<Pool>, FetchError> {
        let url = self.group_pair_url(pair_key);
        debug!("Fetching DLMM pools from: {}", url);

        let response = self.http_client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        parse_group_pair_response(status, &body)
    }
}
