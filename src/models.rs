//! Shared data structures used throughout the application.

use crate::dex::PoolReserves;
use bigdecimal::BigDecimal;
use serde::Serialize;

/// Which asset of the pair is sold first.
///
/// `PoolReserves` store asset X as `reserve_in`; selling asset Y first swaps
/// the in/out roles of both pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeDirection {
    SellAssetXFirst,
    SellAssetYFirst,
}

impl TradeDirection {
    pub const BOTH: [TradeDirection; 2] = [Self::SellAssetXFirst, Self::SellAssetYFirst];

    /// `(reserve_in, reserve_out)` of `pool` as seen by this direction.
    pub fn oriented<'a>(&self, pool: &'a PoolReserves) -> (&'a BigDecimal, &'a BigDecimal) {
        match self {
            Self::SellAssetXFirst => (&pool.reserve_in, &pool.reserve_out),
            Self::SellAssetYFirst => (&pool.reserve_out, &pool.reserve_in),
        }
    }

    pub fn reversed(&self) -> Self {
        match self {
            Self::SellAssetXFirst => Self::SellAssetYFirst,
            Self::SellAssetYFirst => Self::SellAssetXFirst,
        }
    }
}

impl std::fmt::Display for TradeDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SellAssetXFirst => f.write_str("X->Y"),
            Self::SellAssetYFirst => f.write_str("Y->X"),
        }
    }
}
