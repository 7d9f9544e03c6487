use crate::errors::{AppError, Result};
use alloy_primitives::U256;
use bigdecimal::BigDecimal;
use num_bigint::{BigInt, BigUint};
use num_traits::{FromPrimitive, Signed};
use serde::Serialize;
use std::str::FromStr;

/// Immutable snapshot of the two reserves of a constant-product pool.
///
/// `reserve_in` holds asset X and `reserve_out` holds asset Y, which are the
/// in/out roles when selling asset X first. Both pools of a pair must use the
/// same asset order and the same units.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PoolReserves {
    pub reserve_in: BigDecimal,
    pub reserve_out: BigDecimal,
}

impl PoolReserves {
    pub fn new(reserve_in: BigDecimal, reserve_out: BigDecimal) -> Self {
        Self {
            reserve_in,
            reserve_out,
        }
    }

    /// Parse both reserves from decimal strings (e.g. `"1500.25"`).
    pub fn parse(reserve_in: &str, reserve_out: &str) -> Result<Self> {
        Ok(Self::new(
            BigDecimal::from_str(reserve_in.trim())?,
            BigDecimal::from_str(reserve_out.trim())?,
        ))
    }

    /// Build a snapshot from floats. NaN and infinities have no decimal
    /// representation and are rejected as invalid reserves.
    pub fn from_f64(reserve_in: f64, reserve_out: f64) -> Result<Self> {
        let convert = |value: f64, side: &str| {
            BigDecimal::from_f64(value).ok_or_else(|| {
                AppError::invalid_reserves("snapshot", format!("{side} reserve is {value}"))
            })
        };
        Ok(Self::new(
            convert(reserve_in, "in")?,
            convert(reserve_out, "out")?,
        ))
    }

    /// Convert raw on-chain balances (token base units) into token units
    /// without going through floating point.
    pub fn from_base_units(
        reserve_in: U256,
        in_decimals: u8,
        reserve_out: U256,
        out_decimals: u8,
    ) -> Self {
        Self::new(
            base_units_to_decimal(reserve_in, in_decimals),
            base_units_to_decimal(reserve_out, out_decimals),
        )
    }

    /// Check that both reserves are strictly positive. `pool` names the
    /// snapshot in the returned error.
    pub fn validate(&self, pool: &str) -> Result<()> {
        for (side, value) in [("in", &self.reserve_in), ("out", &self.reserve_out)] {
            if !value.is_positive() {
                return Err(AppError::invalid_reserves(
                    pool,
                    format!("reserve {side} must be positive, got {value}"),
                ));
            }
        }
        Ok(())
    }
}

fn base_units_to_decimal(amount: U256, decimals: u8) -> BigDecimal {
    let magnitude = BigUint::from_bytes_be(&amount.to_be_bytes::<32>());
    BigDecimal::new(BigInt::from(magnitude), i64::from(decimals))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_decimal_strings() {
        let pool = PoolReserves::parse("10", " 1000.5 ").unwrap();
        assert_eq!(pool.reserve_in, BigDecimal::from(10));
        assert_eq!(pool.reserve_out, BigDecimal::from_str("1000.5").unwrap());
    }

    #[test]
    fn rejects_garbage_strings() {
        let err = PoolReserves::parse("ten", "1000").unwrap_err();
        assert!(matches!(err, AppError::ParseDecimal(_)));
    }

    #[test]
    fn rejects_non_finite_floats() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = PoolReserves::from_f64(bad, 1.0).unwrap_err();
            assert!(matches!(err, AppError::InvalidReserves { .. }), "{bad}");
        }
    }

    #[test]
    fn base_units_keep_full_precision() {
        // 2^200 wei is far beyond the f64 safe-integer range.
        let raw: U256 = "1606938044258990275541962092341162602522202993782792835301376"
            .parse()
            .unwrap();
        let pool = PoolReserves::from_base_units(raw, 18, U256::from(5_000_000u64), 6);
        let expected_in = BigDecimal::new(
            BigInt::from_str(
                "1606938044258990275541962092341162602522202993782792835301376",
            )
            .unwrap(),
            18,
        );
        assert_eq!(pool.reserve_in, expected_in);
        assert_eq!(pool.reserve_out, BigDecimal::from(5));
    }

    #[test]
    fn validate_flags_zero_and_negative() {
        let zero = PoolReserves::parse("0", "1").unwrap();
        let negative = PoolReserves::parse("1", "-3").unwrap();
        assert!(matches!(
            zero.validate("pool A"),
            Err(AppError::InvalidReserves { pool, .. }) if pool == "pool A"
        ));
        assert!(negative.validate("pool B").is_err());
        assert!(PoolReserves::parse("1", "3").unwrap().validate("ok").is_ok());
    }
}
