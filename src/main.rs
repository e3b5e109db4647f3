use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use dlmm_scanner::app::{self, AppCfg};
use dlmm_scanner::config::Config;

#[derive(Parser, Debug)]
#[command(version, about = "Find the best-yielding Meteora DLMM pool across token pairs")]
struct Args {
    /// Path to config file (optional)
    #[arg(long)]
    config: Option<String>,

    /// DLMM API base URL (overrides config)
    #[arg(long)]
    api_url: Option<String>,

    /// Token mint addresses to pair up (comma-separated, overrides config)
    #[arg(long)]
    tokens: Option<String>,

    /// Per-request timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Rescan every N seconds instead of exiting after one scan
    #[arg(long)]
    interval_secs: Option<u64>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let args = Args::parse();

    // Priority: CLI args > Config file > Defaults
    let base_config = match &args.config {
        Some(config_path) => Config::from_file(config_path)?,
        None => Config::default(),
    };
    let mut app_cfg = AppCfg::from_config(base_config);

    if let Some(api_url) = args.api_url {
        app_cfg.base_url = api_url;
    }
    if let Some(tokens) = args.tokens {
        app_cfg.tokens = tokens
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
    }
    if let Some(timeout_ms) = args.timeout_ms {
        app_cfg.timeout_ms = timeout_ms;
    }
    if let Some(interval_secs) = args.interval_secs {
        app_cfg.interval_secs = Some(interval_secs);
    }
    app_cfg.json_output = args.json;

    app::run(app_cfg).await
}
