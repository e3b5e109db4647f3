// src/app.rs
use anyhow::{Context, Result};
use solana_sdk::pubkey::Pubkey;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{Interval, MissedTickBehavior};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::Config;
use crate::exchanges::api_clients::MeteoraDlmmApiClient;
use crate::math::rank_pools;
use crate::opportunity::scanner::flatten_pools;
use crate::opportunity::{PairScanner, ScanStats};
use crate::report::{ScanOutcome, ScanReport};
use crate::shared::errors::ConfigError;

#[derive(Debug, Clone)]
pub struct AppCfg {
    pub base_url: String,
    pub timeout_ms: u64,
    pub tokens: Vec<String>,
    pub interval_secs: Option<u64>,
    pub json_output: bool,
}

impl AppCfg {
    pub fn from_config(cfg: Config) -> Self {
        Self {
            base_url: cfg.api.base_url,
            timeout_ms: cfg.api.timeout_ms,
            tokens: cfg.scan.tokens,
            interval_secs: cfg.scan.interval_secs,
            json_output: false,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tokens.len() < 2 {
            return Err(ConfigError::TooFewTokens(self.tokens.len()));
        }

        let mut seen = HashSet::new();
        for token in &self.tokens {
            token
                .parse::<Pubkey>()
                .map_err(|e| ConfigError::InvalidToken {
                    address: token.clone(),
                    reason: e.to_string(),
                })?;
            if !seen.insert(token.as_str()) {
                return Err(ConfigError::DuplicateToken(token.clone()));
            }
        }

        let url = self.base_url.trim();
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(ConfigError::InvalidBaseUrl(self.base_url.clone()));
        }
        if self.timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        if self.interval_secs == Some(0) {
            return Err(ConfigError::ZeroInterval);
        }

        Ok(())
    }
}

pub async fn run(app_cfg: AppCfg) -> Result<()> {
    app_cfg.validate().context("invalid configuration")?;

    info!("🚀 Starting DLMM pool scanner");
    info!("Configuration: {:?}", app_cfg);

    let client = MeteoraDlmmApiClient::new(
        app_cfg.base_url.trim(),
        Duration::from_millis(app_cfg.timeout_ms),
    )
    .context("build HTTP client")?;
    let scanner = PairScanner::new(Arc::new(client));

    match app_cfg.interval_secs {
        Some(secs) => run_polling_mode(&app_cfg, &scanner, Duration::from_secs(secs)).await,
        None => {
            let report = run_scan_cycle(&scanner, &app_cfg.tokens).await;
            emit_report(&report, app_cfg.json_output)
        }
    }
}

async fn run_polling_mode(app_cfg: &AppCfg, scanner: &PairScanner, period: Duration) -> Result<()> {
    info!("🔁 Running in polling mode, every {:?}", period);

    let mut interval = polling_interval(period);
    loop {
        interval.tick().await;

        let report = run_scan_cycle(scanner, &app_cfg.tokens).await;
        emit_report(&report, app_cfg.json_output)?;
    }
}

/// A slow scan pushes the next one back instead of triggering a burst.
fn polling_interval(period: Duration) -> Interval {
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    interval
}

/// One full scan: fetch every pair, pick the best pool, build the report.
pub async fn run_scan_cycle(scanner: &PairScanner, tokens: &[String]) -> ScanReport {
    let scan_id = Uuid::new_v4();
    info!("[{}] Scanning pools for {} tokens", scan_id, tokens.len());

    let results = scanner.scan_pairs(tokens).await;
    let stats = ScanStats::from_results(&results);
    let pools = flatten_pools(results);
    let outcome = ScanOutcome::from_pools(&pools);

    info!(
        "[{}] {} pairs scanned: {} with pools, {} not found, {} failed; {} pools ({} eligible)",
        scan_id,
        stats.pairs_scanned,
        stats.pairs_with_pools,
        stats.pairs_not_found,
        stats.pairs_failed,
        stats.pools_collected,
        stats.eligible_pools
    );
    for (rank, (pool, pool_yield)) in rank_pools(&pools).iter().take(5).enumerate() {
        debug!("[{}] #{} {} ({}) yield={:.6}", scan_id, rank + 1, pool.name, pool.address, pool_yield);
    }
    if stats.pairs_failed > 0 {
        warn!("[{}] {} pair requests failed", scan_id, stats.pairs_failed);
    }

    ScanReport::new(scan_id, tokens.to_vec(), stats, outcome)
}

fn emit_report(report: &ScanReport, json_output: bool) -> Result<()> {
    if json_output {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", report);
    }
    Ok(())
}
