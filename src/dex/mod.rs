//! Constant-product pool math and reserve snapshots.

pub mod calc;
pub mod state;

pub use calc::{RoundTrip, SwapLeg, get_amount_out, marginal_price, simulate_round_trip};
pub use state::PoolReserves;
