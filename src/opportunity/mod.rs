pub mod scanner;
pub mod types;

pub use scanner::{PairFetch, PairResult, PairScanner};
pub use types::ScanStats;
