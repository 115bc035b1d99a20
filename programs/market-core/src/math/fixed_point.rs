use crate::error::ErrorCode;
use anchor_lang::prelude::*;

/// Checked `(a * b) / denom` over u128, flooring.
///
/// Used throughout the curve and bond math instead of raw `*`/`/` so that an
/// intermediate overflow or a zero divisor surfaces as a typed error rather
/// than a panic or a wrapped value.
pub fn mul_div_u128(a: u128, b: u128, denom: u128) -> Result<u128> {
    require!(denom > 0, ErrorCode::DivisionByZero);
    a.checked_mul(b)
        .ok_or(error!(ErrorCode::Overflow))?
        .checked_div(denom)
        .ok_or(error!(ErrorCode::DivisionByZero))
}

/// Checked `(a * b) / denom` over u64 via a u128 intermediate, flooring.
pub fn mul_div_u64(a: u64, b: u64, denom: u64) -> Result<u64> {
    let result = mul_div_u128(a as u128, b as u128, denom as u128)?;
    require!(result <= u64::MAX as u128, ErrorCode::Overflow);
    Ok(result as u64)
}

/// Basis-point fraction of a u64 amount, flooring.
pub fn bps_of(amount: u64, bps: u64) -> Result<u64> {
    mul_div_u64(amount, bps, crate::math::BPS_DENOM)
}
