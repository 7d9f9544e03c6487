use bigdecimal::BigDecimal;

/// One side of a pool, already oriented for the swap being priced.
#[derive(Debug, Clone, Copy)]
pub struct SwapLeg<'a> {
    pub reserve_in: &'a BigDecimal,
    pub reserve_out: &'a BigDecimal,
}

impl<'a> SwapLeg<'a> {
    pub fn new(reserve_in: &'a BigDecimal, reserve_out: &'a BigDecimal) -> Self {
        Self {
            reserve_in,
            reserve_out,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoundTrip {
    /// Asset received from the first pool and sold into the second.
    pub intermediate_out: BigDecimal,
    /// Asset received back from the second pool.
    pub final_out: BigDecimal,
}

/// Output of selling `amount_in` into an `x * y = k` pool, ignoring fees.
///
/// `out = amount_in * reserve_out / (reserve_in + amount_in)`
///
/// Callers guarantee `reserve_in + amount_in > 0`.
pub fn get_amount_out(
    amount_in: &BigDecimal,
    reserve_in: &BigDecimal,
    reserve_out: &BigDecimal,
) -> BigDecimal {
    (amount_in * reserve_out) / (reserve_in + amount_in)
}

/// Instantaneous price of the in-asset, quoted in the out-asset.
pub fn marginal_price(reserve_in: &BigDecimal, reserve_out: &BigDecimal) -> BigDecimal {
    reserve_out / reserve_in
}

/// Sell `amount_in` into `first`, then sell everything received into `second`.
pub fn simulate_round_trip(amount_in: &BigDecimal, first: SwapLeg, second: SwapLeg) -> RoundTrip {
    let intermediate_out = get_amount_out(amount_in, first.reserve_in, first.reserve_out);
    let final_out = get_amount_out(&intermediate_out, second.reserve_in, second.reserve_out);
    RoundTrip {
        intermediate_out,
        final_out,
    }
}
