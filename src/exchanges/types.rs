use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Canonical lookup key for an unordered token pair.
///
/// The DLMM API indexes pairs by their lexically ordered mints joined with a
/// hyphen, so `PairKey::new(a, b) == PairKey::new(b, a)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PairKey(String);

impl PairKey {
    pub fn new(token_a: &str, token_b: &str) -> Self {
        let (first, second) = if token_a <= token_b {
            (token_a, token_b)
        } else {
            (token_b, token_a)
        };
        Self(format!("{}-{}", first, second))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Two token addresses in enumeration order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TokenPair {
    pub token_a: String,
    pub token_b: String,
}

impl TokenPair {
    pub fn new(token_a: impl Into<String>, token_b: impl Into<String>) -> Self {
        Self {
            token_a: token_a.into(),
            token_b: token_b.into(),
        }
    }

    pub fn key(&self) -> PairKey {
        PairKey::new(&self.token_a, &self.token_b)
    }
}

impl fmt::Display for TokenPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.token_a, self.token_b)
    }
}

/// Fee/TVL ratios precomputed by the API over several trailing windows.
///
/// Windows whose value is missing or not a number are `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FeeTvlRatio {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_30: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hour_1: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hour_2: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hour_4: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hour_12: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hour_24: Option<f64>,
}

impl FeeTvlRatio {
    /// Returns `None` unless `value` is a JSON object.
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let window = |name: &str| obj.get(name).and_then(Value::as_f64);

        Some(Self {
            min_30: window("min_30"),
            hour_1: window("hour_1"),
            hour_2: window("hour_2"),
            hour_4: window("hour_4"),
            hour_12: window("hour_12"),
            hour_24: window("hour_24"),
        })
    }

    /// The 24h ratio when it is a finite, strictly positive number.
    pub fn valid_hour_24(&self) -> Option<f64> {
        self.hour_24.filter(|r| r.is_finite() && *r > 0.0)
    }
}

/// A DLMM pool as returned by `GET /pair/group_pair/{key}`.
///
/// Only the fields the ranking and the report look at are typed; everything
/// else the API sends is kept in `extra` and serialized back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pool {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub mint_x: String,
    #[serde(default)]
    pub mint_y: String,
    #[serde(default)]
    pub bin_step: u16,
    #[serde(default)]
    pub base_fee_percentage: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub liquidity: String,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub fees_24h: f64,
    #[serde(
        default,
        deserialize_with = "lenient_fee_tvl_ratio",
        skip_serializing_if = "Option::is_none"
    )]
    pub fee_tvl_ratio: Option<FeeTvlRatio>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `null` becomes an empty string, which never parses as liquidity.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "expected a string or number, got {}",
            other
        ))),
    }
}

/// Numeric strings are accepted; anything else that is not a finite number is 0.
fn number_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(value.filter(|v| v.is_finite()).unwrap_or_default())
}

fn lenient_fee_tvl_ratio<'de, D>(deserializer: D) -> Result<Option<FeeTvlRatio>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(FeeTvlRatio::from_value))
}
