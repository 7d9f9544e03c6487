use anyhow::Result;
use arbitrage_sizer::{arbitrage, config::AppConfig, dex::marginal_price, errors::AppError, utils};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    utils::init_logging();

    let config = AppConfig::from_env()?;
    tracing::info!(
        scale = config.sizer.trade_size_scale,
        min_profit = %config.min_profit,
        "[INIT] arbitrage-sizer starting"
    );

    let opportunities =
        match arbitrage::evaluate_opportunities(&config.pool_a, &config.pool_b, &config.sizer) {
            Ok(opps) => opps,
            Err(e @ AppError::InvalidReserves { .. }) => {
                tracing::warn!(error = %e, "[SKIP] pool pair has invalid reserves");
                return Err(e.into());
            }
            Err(e) => return Err(e.into()),
        };

    // Reserves are validated at this point.
    tracing::debug!(
        price_a = %marginal_price(&config.pool_a.reserve_in, &config.pool_a.reserve_out),
        price_b = %marginal_price(&config.pool_b.reserve_in, &config.pool_b.reserve_out),
        "pool prices of asset X in Y"
    );

    if opportunities.is_empty() {
        tracing::info!("[NONE] pools are price-aligned in both directions");
        return Ok(());
    }

    for opp in &opportunities {
        if opp.expected_profit < config.min_profit {
            tracing::info!(
                direction = %opp.direction,
                size = %opp.optimal_trade_size,
                profit = %opp.expected_profit,
                "[OPP] below MIN_PROFIT, not emitted"
            );
            continue;
        }
        tracing::info!(
            direction = %opp.direction,
            size = %opp.optimal_trade_size,
            profit = %opp.expected_profit,
            "[OPP] opportunity found"
        );
        println!("{}", opp.to_json_line()?);
    }

    Ok(())
}
