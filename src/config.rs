use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

use crate::exchanges::api_clients::meteora_dlmm_client::DEFAULT_BASE_URL;

/// SOL, JUP, GRASS and CLOUD mints
pub const DEFAULT_TOKENS: [&str; 4] = [
    "So11111111111111111111111111111111111111112",
    "JUPyiwrYJFskUPiHa7hkeR8VUtAeFoSYbKedZNsDvCN",
    "27G8MtK7VtTcCHkpASjSDdkWWYfoqT6ggEuKidVJidD4",
    "CLoUDKc4Ane7HeQcPpE3YHnznRxhMimJ4MyaUqyHFzAu",
];

pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiCfg {
    pub base_url: String,
    pub timeout_ms: u64,
}

impl Default for ApiCfg {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScanCfg {
    pub tokens: Vec<String>,
    /// Seconds between scans; unset means a single scan.
    pub interval_secs: Option<u64>,
}

impl Default for ScanCfg {
    fn default() -> Self {
        Self {
            tokens: DEFAULT_TOKENS.iter().map(|t| t.to_string()).collect(),
            interval_secs: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiCfg,
    pub scan: ScanCfg,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let s = fs::read_to_string(path.as_ref())
            .with_context(|| format!("read {}", path.as_ref().display()))?;
        let cfg: Self = toml::from_str(&s).context("parse Config.toml")?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.api.base_url, "https://dlmm-api.meteora.ag");
        assert_eq!(cfg.api.timeout_ms, 10_000);
        assert_eq!(cfg.scan.tokens.len(), 4);
        assert_eq!(cfg.scan.tokens[0], DEFAULT_TOKENS[0]);
        assert_eq!(cfg.scan.interval_secs, None);
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let cfg: Config = toml::from_str(
            r#"
            [scan]
            interval_secs = 30
            "#,
        )
        .unwrap();

        assert_eq!(cfg.scan.interval_secs, Some(30));
        assert_eq!(cfg.scan.tokens.len(), 4);
        assert_eq!(cfg.api.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [api]
            base_url = "http://localhost:9000"
            timeout_ms = 2500

            [scan]
            tokens = ["So11111111111111111111111111111111111111112", "JUPyiwrYJFskUPiHa7hkeR8VUtAeFoSYbKedZNsDvCN"]
            "#
        )
        .unwrap();

        let cfg = Config::from_file(file.path()).unwrap();
        assert_eq!(cfg.api.base_url, "http://localhost:9000");
        assert_eq!(cfg.api.timeout_ms, 2500);
        assert_eq!(cfg.scan.tokens.len(), 2);
    }

    #[test]
    fn test_from_file_reports_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[scan]\ntokens = 5").unwrap();

        let err = Config::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("parse Config.toml"));
    }

    #[test]
    fn test_from_missing_file() {
        assert!(Config::from_file("/nonexistent/Config.toml").is_err());
    }
}
