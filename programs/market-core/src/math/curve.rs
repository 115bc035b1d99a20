use super::fixed_point::mul_div_u128;
use super::{SHARE_SCALE, UNIT_PRICE};
use crate::error::ErrorCode;
use crate::state::Side;
use crate::utils::fees::split_platform_creator_fee;
use anchor_lang::prelude::*;

/// Virtual + real supply on both sides, and their sum.
///
/// `Y = yes_supply + VL`, `N = no_supply + VL`, `T = Y + N`, matching §4.1.
#[derive(Debug, Clone, Copy)]
pub struct CurveState {
    pub y: u128,
    pub n: u128,
    pub t: u128,
}

impl CurveState {
    pub fn new(yes_supply: u128, no_supply: u128, virtual_liquidity: u128) -> Result<Self> {
        let y = yes_supply
            .checked_add(virtual_liquidity)
            .ok_or(error!(ErrorCode::Overflow))?;
        let n = no_supply
            .checked_add(virtual_liquidity)
            .ok_or(error!(ErrorCode::Overflow))?;
        let t = y.checked_add(n).ok_or(error!(ErrorCode::Overflow))?;
        Ok(Self { y, n, t })
    }

    pub fn side_virtual(&self, side: Side) -> u128 {
        match side {
            Side::Yes => self.y,
            Side::No => self.n,
        }
    }
}

/// `P_yes = UNIT_PRICE * Y / T`. `P_no` is always derived as `UNIT_PRICE - P_yes`
/// so the two prices sum to exactly UNIT_PRICE (§4.1 invariant), never computed
/// independently.
pub fn price_yes(yes_supply: u128, no_supply: u128, virtual_liquidity: u128) -> Result<u64> {
    let state = CurveState::new(yes_supply, no_supply, virtual_liquidity)?;
    let p = mul_div_u128(UNIT_PRICE as u128, state.y, state.t)?;
    require!(p <= UNIT_PRICE as u128, ErrorCode::Overflow);
    Ok(p as u64)
}

/// Price pair `(P_yes, P_no)` with `P_yes + P_no == UNIT_PRICE` exactly.
pub fn price_pair(yes_supply: u128, no_supply: u128, virtual_liquidity: u128) -> Result<(u64, u64)> {
    let p_yes = price_yes(yes_supply, no_supply, virtual_liquidity)?;
    let p_no = UNIT_PRICE
        .checked_sub(p_yes)
        .ok_or(error!(ErrorCode::Underflow))?;
    Ok((p_yes, p_no))
}

pub fn price_of(side: Side, yes_supply: u128, no_supply: u128, virtual_liquidity: u128) -> Result<u64> {
    let (p_yes, p_no) = price_pair(yes_supply, no_supply, virtual_liquidity)?;
    Ok(match side {
        Side::Yes => p_yes,
        Side::No => p_no,
    })
}

/// Result of a buy quote: the pre-trade price determines how many shares
/// `net` (after fees) buys. Fees are reported separately so the caller can
/// transfer them to their respective destinations.
#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone, Copy)]
pub struct BuyQuote {
    pub net_in: u64,
    pub platform_fee: u64,
    pub creator_fee: u64,
    pub shares_out: u128,
}

/// Buy quote for `bnb_in` on `side` (§4.1).
///
/// `net = bnb_in * (10000 - platform_fee_bps - creator_fee_bps) / 10000`
/// `shares_out = net * T * SHARE_SCALE / (UNIT_PRICE * s_virtual)`
/// where `s_virtual` is the side's *pre-trade* virtual supply. Division floors,
/// which favors the pool over the trader.
pub fn quote_buy(
    yes_supply: u128,
    no_supply: u128,
    virtual_liquidity: u128,
    side: Side,
    bnb_in: u64,
    platform_fee_bps: u16,
    creator_fee_bps: u16,
) -> Result<BuyQuote> {
    let fb = split_platform_creator_fee(bnb_in, platform_fee_bps, creator_fee_bps)?;
    let net_in = fb.net;
    let platform_fee = fb.platform_fee;
    let creator_fee = fb.creator_fee;

    let state = CurveState::new(yes_supply, no_supply, virtual_liquidity)?;
    let s_virtual = state.side_virtual(side);
    require!(s_virtual > 0, ErrorCode::DivisionByZero);

    // divide down between multiplies instead of chaining all three terms
    // first: net_in * T * SHARE_SCALE overflows u128 well before any
    // realistic trade size. SHARE_SCALE / UNIT_PRICE is an exact 100, so the
    // first division loses no precision.
    let scaled_in = mul_div_u128(net_in as u128, SHARE_SCALE, UNIT_PRICE as u128)?;
    let shares_out = mul_div_u128(scaled_in, state.t, s_virtual)?;

    Ok(BuyQuote {
        net_in,
        platform_fee,
        creator_fee,
        shares_out,
    })
}

/// Post-sale gross proceeds for selling `shares_in` of `side` (§4.1).
///
/// Computed against the *post-sale* virtual supply, not the pre-sale one:
/// this is the concave-pricing solvency guarantee that stops a seller from
/// draining the pool at the pre-sale price.
pub fn sell_gross(
    yes_supply: u128,
    no_supply: u128,
    virtual_liquidity: u128,
    side: Side,
    shares_in: u128,
) -> Result<u64> {
    let (yes_after, no_after) = match side {
        Side::Yes => (yes_supply.saturating_sub(shares_in), no_supply),
        Side::No => (yes_supply, no_supply.saturating_sub(shares_in)),
    };
    let state_after = CurveState::new(yes_after, no_after, virtual_liquidity)?;
    let s_virtual_after = state_after.side_virtual(side);

    // same overflow hazard as quote_buy: divide down between multiplies
    // rather than chaining three raw checked_muls before a single divide.
    let scaled = mul_div_u128(shares_in, UNIT_PRICE as u128, SHARE_SCALE)?;
    let bnb_gross = mul_div_u128(scaled, s_virtual_after, state_after.t)?;

    require!(bnb_gross <= u64::MAX as u128, ErrorCode::Overflow);
    Ok(bnb_gross as u64)
}

/// Largest `shares <= user_shares` whose `sell_gross(shares) <= pool_balance`,
/// found by bisection on the boolean predicate (§4.1). `sell_gross` is
/// monotone non-decreasing in `shares_in` over the range exercised by this
/// engine, so bisection converges to the exact floor boundary.
pub fn max_sellable(
    yes_supply: u128,
    no_supply: u128,
    virtual_liquidity: u128,
    side: Side,
    user_shares: u128,
    pool_balance: u64,
) -> Result<(u128, u64)> {
    if user_shares == 0 {
        return Ok((0, 0));
    }

    let full = sell_gross(yes_supply, no_supply, virtual_liquidity, side, user_shares)?;
    if full <= pool_balance {
        return Ok((user_shares, full));
    }

    let mut lo: u128 = 0; // always satisfies the predicate (bnb_gross(0) == 0)
    let mut hi: u128 = user_shares; // known to violate the predicate
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        let gross = sell_gross(yes_supply, no_supply, virtual_liquidity, side, mid)?;
        if gross <= pool_balance {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    let bnb = sell_gross(yes_supply, no_supply, virtual_liquidity, side, lo)?;
    Ok((lo, bnb))
}
