use super::types::{ArbitrageOpportunity, ArbitrageResult, SizerConfig};
use crate::dex::{PoolReserves, SwapLeg, simulate_round_trip};
use crate::errors::{AppError, Result};
use crate::models::TradeDirection;
use bigdecimal::{BigDecimal, RoundingMode};
use num_traits::Signed;
use tracing::debug;

/// Size the riskless cycle between two fee-less constant-product pools.
///
/// With `(x1, y1)` and `(x2, y2)` the in/out reserves of pool A and pool B
/// under `direction`, the optimal amount of the in-asset is
///
/// ```text
/// (sqrt(x1 * y1 * x2 * y2) - y1 * x2) / (y1 + y2)
/// ```
///
/// which is positive only when pool B values the in-asset higher than pool A
/// (`x1 / y1 > x2 / y2`). The cycle it sizes sells the in-asset into pool B
/// and sells the proceeds back through pool A; the expected profit is that
/// round trip simulated with the rounded size, net of the input.
///
/// The size is rounded down to `config.trade_size_scale` digits. Sizes or
/// profits that do not survive rounding are reported as `NoOpportunity`.
pub fn compute_optimal_arbitrage(
    pool_a: &PoolReserves,
    pool_b: &PoolReserves,
    direction: TradeDirection,
    config: &SizerConfig,
) -> Result<ArbitrageResult> {
    pool_a.validate("pool A")?;
    pool_b.validate("pool B")?;

    let (x1, y1) = direction.oriented(pool_a);
    let (x2, y2) = direction.oriented(pool_b);

    let product = x1 * y1 * x2 * y2;
    let sqrt_term = product.sqrt().ok_or_else(|| {
        AppError::invalid_reserves("pool pair", format!("no square root for {product}"))
    })?;
    let numerator = sqrt_term - y1 * x2;
    if !numerator.is_positive() {
        debug!(%direction, %numerator, "no opportunity: pools at or past parity");
        return Ok(ArbitrageResult::NoOpportunity);
    }

    let denominator = y1 + y2;
    let optimal_trade_size =
        (numerator / denominator).with_scale_round(config.trade_size_scale, RoundingMode::Down);
    if !optimal_trade_size.is_positive() {
        debug!(
            %direction,
            scale = config.trade_size_scale,
            "no opportunity: trade size rounds to zero"
        );
        return Ok(ArbitrageResult::NoOpportunity);
    }

    let trip = simulate_round_trip(
        &optimal_trade_size,
        SwapLeg::new(x2, y2),
        SwapLeg::new(y1, x1),
    );
    let expected_profit = (trip.final_out - &optimal_trade_size)
        .with_scale_round(config.trade_size_scale, RoundingMode::Down);
    if !expected_profit.is_positive() {
        debug!(%direction, %optimal_trade_size, %expected_profit, "no opportunity: profit rounds away");
        return Ok(ArbitrageResult::NoOpportunity);
    }

    debug!(
        %direction,
        %optimal_trade_size,
        intermediate_out = %trip.intermediate_out,
        %expected_profit,
        "sized arbitrage"
    );

    Ok(ArbitrageResult::Opportunity(ArbitrageOpportunity {
        direction,
        optimal_trade_size,
        expected_profit,
    }))
}

pub fn compute_optimal_arbitrage_default(
    pool_a: &PoolReserves,
    pool_b: &PoolReserves,
    direction: TradeDirection,
) -> Result<ArbitrageResult> {
    compute_optimal_arbitrage(pool_a, pool_b, direction, &SizerConfig::default())
}

/// Evaluate arbitrage opportunities in both directions
pub fn evaluate_opportunities(
    pool_a: &PoolReserves,
    pool_b: &PoolReserves,
    config: &SizerConfig,
) -> Result<Vec<ArbitrageOpportunity>> {
    let mut opportunities = Vec::new();

    for direction in TradeDirection::BOTH {
        if let Some(opp) =
            compute_optimal_arbitrage(pool_a, pool_b, direction, config)?.into_opportunity()
        {
            opportunities.push(opp);
        }
    }

    Ok(opportunities)
}
