//! Optimal trade sizing for arbitrage between two constant-product pools
//! quoting the same asset pair.
//!
//! The core entry point is [`arbitrage::compute_optimal_arbitrage`]; reserve
//! snapshots come in as [`dex::PoolReserves`] and are never fetched here.

pub mod arbitrage;
pub mod config;
pub mod dex;
pub mod errors;
pub mod models;
pub mod utils;
