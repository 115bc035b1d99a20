use crate::error::ErrorCode;
use crate::math::fixed_point::mul_div_u128;
use crate::state::{GlobalConfig, Ledger, Market, MarketStatus, Position};
use crate::utils::rent::move_lamports_with_rent_check;
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct EmergencyRefund<'info> {
    #[account(mut)]
    pub claimant: Signer<'info>,

    #[account(seeds = [b"config"], bump = config.bump)]
    pub config: Account<'info, GlobalConfig>,

    #[account(mut, seeds = [b"market", market.id.to_le_bytes().as_ref()], bump = market.bump)]
    pub market: Account<'info, Market>,

    #[account(
        mut,
        seeds = [b"position", market.key().as_ref(), claimant.key().as_ref()],
        bump = position.bump,
    )]
    pub position: Account<'info, Position>,

    #[account(
        init_if_needed,
        payer = claimant,
        space = Ledger::LEN,
        seeds = [b"ledger", claimant.key().as_ref()],
        bump,
    )]
    pub ledger: Account<'info, Ledger>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct EmergencyRefunded {
    pub market_id: u64,
    pub claimant: Pubkey,
    pub amount: u64,
}

/// Rule 7: once `status == Refundable`, or the market is Expired/Proposed/
/// Disputed past `EMERGENCY_REFUND_DELAY` with no active proposer (or the
/// protocol paused, with no proposer ever posted), any holder can recover a
/// pro-rata share of the pool.
fn is_refundable_now(market: &Market, now: i64, paused: bool) -> bool {
    if market.status == MarketStatus::Refundable {
        return true;
    }
    if market.status == MarketStatus::Resolved {
        return false;
    }
    if !market.past_refund_delay(now) {
        return false;
    }
    // A posted proposer bond always needs one `finalize_market` call to be
    // released before the market can go Refundable, paused or not (pinned
    // decision #4). The only way to reach this function with no proposer
    // and status still Active/Proposed/Disputed is: nobody ever proposed
    // (paused markets included), so the bond-release precondition is moot.
    let _ = paused;
    market.proposer == Pubkey::default()
}

pub fn handler(ctx: Context<EmergencyRefund>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let paused = ctx.accounts.config.paused;
    let market = &mut ctx.accounts.market;
    require!(is_refundable_now(market, now, paused), ErrorCode::NotRefundable);

    let position = &mut ctx.accounts.position;
    require!(!position.refunded, ErrorCode::AlreadyRefunded);
    let shares = position.total_shares();
    require!(shares > 0, ErrorCode::NoShares);

    // lazily snapshot the refund pool the first time a market that never
    // went through the tie path (rule 6 already snapshots it) reaches here
    if market.refund_total_supply == 0 {
        market.refund_pool_snapshot = market.pool_balance;
        market.refund_total_supply = market.yes_supply.checked_add(market.no_supply).ok_or(error!(ErrorCode::Overflow))?;
        market.status = MarketStatus::Refundable;
    }

    let amount_u128 = mul_div_u128(market.refund_pool_snapshot as u128, shares, market.refund_total_supply)?;
    require!(amount_u128 <= u64::MAX as u128, ErrorCode::Overflow);
    let amount = amount_u128 as u64;

    position.refunded = true;

    move_lamports_with_rent_check(&market.to_account_info(), &ctx.accounts.ledger.to_account_info(), amount)?;
    if ctx.accounts.ledger.owner == Pubkey::default() {
        ctx.accounts.ledger.owner = ctx.accounts.claimant.key();
        ctx.accounts.ledger.bump = ctx.bumps.ledger;
    }
    ctx.accounts.ledger.credit_withdrawable(amount)?;

    msg!("market {} emergency refund to {} amount={}", market.id, ctx.accounts.claimant.key(), amount);
    emit!(EmergencyRefunded {
        market_id: market.id,
        claimant: ctx.accounts.claimant.key(),
        amount,
    });
    Ok(())
}
