//! DLMM pool scanner
//! Finds the Meteora DLMM pool with the best 24h fee/TVL yield across all
//! pairs of a token set.

pub mod app;
pub mod config;
pub mod exchanges;
pub mod math;
pub mod opportunity;
pub mod report;
pub mod shared;

// Re-export main types for convenience
pub use exchanges::types::{PairKey, Pool, TokenPair};
pub use math::{compute_yield, select_best};
pub use opportunity::PairScanner;
pub use report::{ScanOutcome, ScanReport};
