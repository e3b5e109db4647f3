use serde::Serialize;

use crate::math::is_eligible;
use super::scanner::{PairFetch, PairResult};

/// Counters for one scan cycle
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanStats {
    pub pairs_scanned: usize,
    pub pairs_with_pools: usize,
    pub pairs_not_found: usize,
    pub pairs_failed: usize,
    pub pools_collected: usize,
    pub eligible_pools: usize,
}

impl ScanStats {
    pub fn from_results(results: &[PairResult]) -> Self {
        let mut stats = Self {
            pairs_scanned: results.len(),
            ..Self::default()
        };

        for result in results {
            match &result.fetch {
                PairFetch::Found(pools) if !pools.is_empty() => {
                    stats.pairs_with_pools += 1;
                    stats.pools_collected += pools.len();
                    stats.eligible_pools += pools.iter().filter(|p| is_eligible(p)).count();
                }
                PairFetch::Found(_) => {}
                PairFetch::NotFound => stats.pairs_not_found += 1,
                PairFetch::Failed(_) => stats.pairs_failed += 1,
            }
        }

        stats
    }
}
