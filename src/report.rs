// src/report.rs
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

use crate::exchanges::types::Pool;
use crate::math::{compute_yield, select_best};
use crate::opportunity::ScanStats;

/// Terminal state of a scan
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScanOutcome {
    NoPairsRetrieved,
    NoBestPool,
    BestPool { pool: Pool, yield_24h: f64 },
}

impl ScanOutcome {
    pub fn from_pools(pools: &[Pool]) -> Self {
        if pools.is_empty() {
            return ScanOutcome::NoPairsRetrieved;
        }

        match select_best(pools) {
            Some(pool) => ScanOutcome::BestPool {
                yield_24h: compute_yield(pool),
                pool: pool.clone(),
            },
            None => ScanOutcome::NoBestPool,
        }
    }

    pub fn best_pool(&self) -> Option<&Pool> {
        match self {
            ScanOutcome::BestPool { pool, .. } => Some(pool),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub scan_id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub tokens: Vec<String>,
    pub stats: ScanStats,
    pub outcome: ScanOutcome,
}

impl ScanReport {
    pub fn new(scan_id: Uuid, tokens: Vec<String>, stats: ScanStats, outcome: ScanOutcome) -> Self {
        Self {
            scan_id,
            timestamp: Utc::now(),
            tokens,
            stats,
            outcome,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for ScanOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanOutcome::NoPairsRetrieved => write!(f, "No pairs retrieved."),
            ScanOutcome::NoBestPool => write!(f, "No best pool identified."),
            ScanOutcome::BestPool { pool, yield_24h } => {
                writeln!(f, "--- Best Pool ---")?;
                writeln!(f, "Pool: {}", pool.name)?;
                writeln!(f, "Bin Step: {}", pool.bin_step)?;
                writeln!(f, "Base Fee: {}", pool.base_fee_percentage)?;
                writeln!(f, "24 hr Fees: {}", pool.fees_24h)?;
                writeln!(f, "Yield (24h Fee/TVL): {:.6}", yield_24h)?;
                write!(f, "-----------------")
            }
        }
    }
}

impl fmt::Display for ScanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.outcome)
    }
}
