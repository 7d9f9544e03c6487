use crate::errors::Result;
use crate::models::TradeDirection;
use bigdecimal::BigDecimal;
use serde::Serialize;

/// Fractional digits kept in trade sizes, matching 18-decimal ERC-20 tokens.
pub const DEFAULT_TRADE_SIZE_SCALE: i64 = 18;

/// Configuration for arbitrage sizing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizerConfig {
    /// Trade size and profit are rounded down to this many fractional digits.
    pub trade_size_scale: i64,
}

impl Default for SizerConfig {
    fn default() -> Self {
        Self {
            trade_size_scale: DEFAULT_TRADE_SIZE_SCALE,
        }
    }
}

/// A sized, profitable cycle. Both amounts are denominated in the asset sold
/// first (asset X for `SellAssetXFirst`, asset Y otherwise).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArbitrageOpportunity {
    pub direction: TradeDirection,
    pub optimal_trade_size: BigDecimal,
    pub expected_profit: BigDecimal,
}

impl ArbitrageOpportunity {
    /// Single-line JSON record for the execution layer.
    pub fn to_json_line(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Outcome of sizing one direction of a pool pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ArbitrageResult {
    Opportunity(ArbitrageOpportunity),
    NoOpportunity,
}

impl ArbitrageResult {
    pub fn is_opportunity(&self) -> bool {
        matches!(self, Self::Opportunity(_))
    }

    pub fn opportunity(&self) -> Option<&ArbitrageOpportunity> {
        match self {
            Self::Opportunity(opp) => Some(opp),
            Self::NoOpportunity => None,
        }
    }

    pub fn into_opportunity(self) -> Option<ArbitrageOpportunity> {
        match self {
            Self::Opportunity(opp) => Some(opp),
            Self::NoOpportunity => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    #[test]
    fn opportunity_serializes_amounts_as_strings() {
        let opp = ArbitrageOpportunity {
            direction: TradeDirection::SellAssetXFirst,
            optimal_trade_size: BigDecimal::from_str("0.5").unwrap(),
            expected_profit: BigDecimal::from_str("0.125").unwrap(),
        };
        let value: serde_json::Value = serde_json::from_str(&opp.to_json_line().unwrap()).unwrap();
        assert_eq!(value["direction"], "sell_asset_x_first");
        assert_eq!(value["optimal_trade_size"], "0.5");
        assert_eq!(value["expected_profit"], "0.125");
    }

    #[test]
    fn result_is_tagged() {
        let json = serde_json::to_value(ArbitrageResult::NoOpportunity).unwrap();
        assert_eq!(json, serde_json::json!({ "outcome": "no_opportunity" }));
        assert!(!ArbitrageResult::NoOpportunity.is_opportunity());
        assert!(ArbitrageResult::NoOpportunity.opportunity().is_none());
    }
}
