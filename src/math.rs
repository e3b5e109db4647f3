// src/math.rs
use crate::exchanges::types::Pool;

/// Parse a pool's liquidity string.
///
/// Returns `None` for malformed or non-finite values.
pub fn parse_liquidity(liquidity: &str) -> Option<f64> {
    liquidity
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// A pool can be ranked only when its liquidity is a positive number.
pub fn is_eligible(pool: &Pool) -> bool {
    matches!(parse_liquidity(&pool.liquidity), Some(liquidity) if liquidity > 0.0)
}

/// Fee income relative to liquidity over the last 24 hours.
///
/// The API's precomputed `fee_tvl_ratio.hour_24` wins when it is a valid
/// positive number; otherwise `fees_24h / liquidity` is used. Pools without
/// positive liquidity yield 0.
pub fn compute_yield(pool: &Pool) -> f64 {
    let liquidity = match parse_liquidity(&pool.liquidity) {
        Some(liquidity) if liquidity > 0.0 => liquidity,
        _ => return 0.0,
    };

    if let Some(ratio) = pool.fee_tvl_ratio.as_ref().and_then(|r| r.valid_hour_24()) {
        return ratio;
    }

    pool.fees_24h / liquidity
}

/// Highest-yield eligible pool.
///
/// Ties go to the pool seen first. `None` when nothing is eligible.
pub fn select_best(pools: &[Pool]) -> Option<&Pool> {
    let mut best_pool = None;
    let mut best_yield = f64::NEG_INFINITY;

    for pool in pools {
        if !is_eligible(pool) {
            continue;
        }

        let pool_yield = compute_yield(pool);
        if pool_yield > best_yield {
            best_yield = pool_yield;
            best_pool = Some(pool);
        }
    }

    best_pool
}

/// Eligible pools with their yields, best first.
///
/// The sort is stable, so equal yields keep their input order and the first
/// entry is always the pool `select_best` picks.
pub fn rank_pools(pools: &[Pool]) -> Vec<(&Pool, f64)> {
    let mut ranked: Vec<(&Pool, f64)> = pools
        .iter()
        .filter(|pool| is_eligible(pool))
        .map(|pool| (pool, compute_yield(pool)))
        .collect();

    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exchanges::types::FeeTvlRatio;
    use serde_json::Map;

    fn pool(name: &str, liquidity: &str, fees_24h: f64) -> Pool {
        Pool {
            address: String::new(),
            name: name.to_string(),
            mint_x: String::new(),
            mint_y: String::new(),
            bin_step: 10,
            base_fee_percentage: "0.1".to_string(),
            liquidity: liquidity.to_string(),
            fees_24h,
            fee_tvl_ratio: None,
            extra: Map::new(),
        }
    }

    fn with_ratio(mut pool: Pool, hour_24: f64) -> Pool {
        pool.fee_tvl_ratio = Some(FeeTvlRatio {
            hour_24: Some(hour_24),
            ..FeeTvlRatio::default()
        });
        pool
    }

    #[test]
    fn test_parse_liquidity() {
        assert_eq!(parse_liquidity("100"), Some(100.0));
        assert_eq!(parse_liquidity(" 12.5 "), Some(12.5));
        assert_eq!(parse_liquidity("-5"), Some(-5.0));
        assert_eq!(parse_liquidity("abc"), None);
        assert_eq!(parse_liquidity(""), None);
        assert_eq!(parse_liquidity("NaN"), None);
        assert_eq!(parse_liquidity("inf"), None);
    }

    #[test]
    fn test_yield_zero_for_non_positive_liquidity() {
        assert_eq!(compute_yield(&pool("a", "0", 1_000.0)), 0.0);
        assert_eq!(compute_yield(&pool("b", "-5", 1_000.0)), 0.0);
        assert_eq!(compute_yield(&with_ratio(pool("c", "0", 1.0), 0.5)), 0.0);
    }

    #[test]
    fn test_yield_zero_for_malformed_liquidity() {
        assert_eq!(compute_yield(&pool("a", "not-a-number", 10.0)), 0.0);
        assert_eq!(compute_yield(&with_ratio(pool("b", "", 10.0), 0.5)), 0.0);
    }

    #[test]
    fn test_yield_from_fees_and_liquidity() {
        let value = compute_yield(&pool("a", "100", 10.0));
        assert!((value - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_yield_prefers_precomputed_ratio() {
        assert_eq!(compute_yield(&with_ratio(pool("a", "100", 10.0), 0.25)), 0.25);
    }

    #[test]
    fn test_yield_ignores_non_positive_ratio() {
        let value = compute_yield(&with_ratio(pool("a", "100", 10.0), 0.0));
        assert!((value - 0.1).abs() < 1e-12);

        let value = compute_yield(&with_ratio(pool("b", "100", 10.0), -1.0));
        assert!((value - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_select_best_skips_ineligible() {
        let pools = vec![
            with_ratio(pool("empty", "0", 0.0), 99.0),
            pool("low", "50", 5.0),
            pool("high", "50", 10.0),
        ];
        let best = select_best(&pools).unwrap();
        assert_eq!(best.name, "high");
    }

    #[test]
    fn test_select_best_first_wins_ties() {
        let pools = vec![
            pool("first", "100", 10.0),
            pool("second", "200", 20.0),
            with_ratio(pool("third", "1", 0.0), 0.1),
        ];
        assert_eq!(select_best(&pools).unwrap().name, "first");
    }

    #[test]
    fn test_select_best_none_for_empty_or_ineligible() {
        assert!(select_best(&[]).is_none());

        let pools = vec![pool("a", "0", 10.0), pool("b", "-1", 10.0), pool("c", "x", 10.0)];
        assert!(select_best(&pools).is_none());
    }

    #[test]
    fn test_select_best_accepts_zero_yield() {
        let pools = vec![pool("idle", "100", 0.0)];
        assert_eq!(select_best(&pools).unwrap().name, "idle");
    }

    #[test]
    fn test_rank_pools_orders_by_yield() {
        let pools = vec![
            pool("mid", "100", 10.0),
            pool("skip", "0", 10.0),
            pool("top", "100", 30.0),
            pool("mid-2", "50", 5.0),
        ];
        let ranked = rank_pools(&pools);
        let names: Vec<&str> = ranked.iter().map(|(p, _)| p.name.as_str()).collect();
        assert_eq!(names, vec!["top", "mid", "mid-2"]);
        assert_eq!(ranked[0].0.name, select_best(&pools).unwrap().name);
    }
}
