pub mod evaluator;
pub mod types;

pub use evaluator::{
    compute_optimal_arbitrage, compute_optimal_arbitrage_default, evaluate_opportunities,
};
pub use types::{ArbitrageOpportunity, ArbitrageResult, DEFAULT_TRADE_SIZE_SCALE, SizerConfig};
