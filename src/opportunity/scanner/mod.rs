pub mod pair_scanner;

pub use pair_scanner::{enumerate_pairs, PairScanner};

use crate::exchanges::types::{PairKey, Pool, TokenPair};
use crate::shared::errors::FetchError;

/// Outcome of fetching one pair.
///
/// `NotFound` and `Failed` both contribute no pools to a scan, but they are
/// kept apart so the cause stays visible in statistics and tests.
#[derive(Debug)]
pub enum PairFetch {
    Found(Vec<Pool>),
    NotFound,
    Failed(FetchError),
}

impl PairFetch {
    pub fn pools(&self) -> &[Pool] {
        match self {
            PairFetch::Found(pools) => pools,
            PairFetch::NotFound | PairFetch::Failed(_) => &[],
        }
    }

    pub fn into_pools(self) -> Vec<Pool> {
        match self {
            PairFetch::Found(pools) => pools,
            PairFetch::NotFound | PairFetch::Failed(_) => Vec::new(),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, PairFetch::Failed(_))
    }
}

/// A pair together with what its fetch produced.
#[derive(Debug)]
pub struct PairResult {
    pub pair: TokenPair,
    pub key: PairKey,
    pub fetch: PairFetch,
}

/// Flatten per-pair results into one collection, keeping pair order and the
/// API's order within each pair.
pub fn flatten_pools(results: Vec<PairResult>) -> Vec<Pool> {
    results
        .into_iter()
        .flat_map(|result| result.fetch.into_pools())
        .collect()
}
