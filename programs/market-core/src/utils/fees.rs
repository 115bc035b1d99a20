use crate::error::ErrorCode;
use crate::math::fixed_point::mul_div_u64;
use crate::math::BPS_DENOM;
use anchor_lang::prelude::*;

/// Platform/creator split of a trade's fee, guaranteed to sum back to the
/// input exactly (no per-fee rounding leakage).
#[derive(Debug, Clone, Copy)]
pub struct FeeBreakdown {
    pub net: u64,
    pub platform_fee: u64,
    pub creator_fee: u64,
}

/// "Total-first" accurate split: compute the combined fee with one
/// division, then allocate `platform_fee` proportionally and let
/// `creator_fee` absorb the remainder. Guarantees
/// `platform_fee + creator_fee + net == amount` for every input, the same
/// guarantee the teacher's three-way `calculate_fees_accurate` makes for
/// its protocol/resolver/LP split.
pub fn split_platform_creator_fee(
    amount: u64,
    platform_bps: u16,
    creator_bps: u16,
) -> Result<FeeBreakdown> {
    let total_bps = (platform_bps as u64)
        .checked_add(creator_bps as u64)
        .ok_or(error!(ErrorCode::Overflow))?;
    require!(total_bps <= BPS_DENOM, ErrorCode::InvalidFeeConfiguration);

    let total_fee = mul_div_u64(amount, total_bps, BPS_DENOM)?;
    let platform_fee = if total_bps == 0 {
        0
    } else {
        mul_div_u64(total_fee, platform_bps as u64, total_bps)?
    };
    let creator_fee = total_fee
        .checked_sub(platform_fee)
        .ok_or(error!(ErrorCode::Underflow))?;
    let net = amount
        .checked_sub(total_fee)
        .ok_or(error!(ErrorCode::Underflow))?;

    Ok(FeeBreakdown {
        net,
        platform_fee,
        creator_fee,
    })
}
