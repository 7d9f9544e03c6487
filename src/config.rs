//! Configuration loader and application settings.

use crate::arbitrage::{DEFAULT_TRADE_SIZE_SCALE, SizerConfig};
use crate::dex::PoolReserves;
use crate::errors::{AppError, Result};
use bigdecimal::BigDecimal;
use std::str::FromStr;

/// Consolidated application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Reserves of pool A as `"<asset X>,<asset Y>"`.
    pub pool_a: PoolReserves,
    /// Reserves of pool B, same asset order as pool A.
    pub pool_b: PoolReserves,
    pub sizer: SizerConfig,
    /// Opportunities below this profit are logged but not emitted.
    pub min_profit: BigDecimal,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key).ok_or_else(|| AppError::Config(format!("Set {key} to \"<in>,<out>\"")))
        };

        let pool_a = parse_reserves("POOL_A_RESERVES", &required("POOL_A_RESERVES")?)?;
        let pool_b = parse_reserves("POOL_B_RESERVES", &required("POOL_B_RESERVES")?)?;

        let trade_size_scale = match lookup("TRADE_SIZE_SCALE") {
            Some(raw) => raw.trim().parse::<i64>().map_err(|e| {
                AppError::Config(format!("TRADE_SIZE_SCALE must be an integer: {e}"))
            })?,
            None => DEFAULT_TRADE_SIZE_SCALE,
        };
        if trade_size_scale < 0 {
            return Err(AppError::Config(format!(
                "TRADE_SIZE_SCALE must not be negative, got {trade_size_scale}"
            )));
        }

        let min_profit = match lookup("MIN_PROFIT") {
            Some(raw) => BigDecimal::from_str(raw.trim())?,
            None => BigDecimal::from(0),
        };

        Ok(Self {
            pool_a,
            pool_b,
            sizer: SizerConfig { trade_size_scale },
            min_profit,
        })
    }
}

fn parse_reserves(key: &str, raw: &str) -> Result<PoolReserves> {
    let Some((reserve_in, reserve_out)) = raw.split_once(',') else {
        return Err(AppError::Config(format!(
            "{key} must be \"<in>,<out>\", got {raw:?}"
        )));
    };
    PoolReserves::parse(reserve_in, reserve_out)
}
