use crate::error::ErrorCode;
use crate::math::fixed_point::{mul_div_u128, mul_div_u64};
use crate::state::{GlobalConfig, Ledger, Market, MarketStatus, Position, Treasury};
use crate::utils::rent::move_lamports_with_rent_check;
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct Claim<'info> {
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

    #[account(mut, seeds = [b"treasury"], bump = treasury.bump)]
    pub treasury: Account<'info, Treasury>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct Claimed {
    pub market_id: u64,
    pub claimant: Pubkey,
    pub payout: u64,
}

/// `claim(market_id)`: pays winning_shares pro-rata of the resolved pool
/// snapshot, minus the resolution fee, into the claimant's ledger.
pub fn handler(ctx: Context<Claim>) -> Result<()> {
    require!(!ctx.accounts.config.paused, ErrorCode::Paused);

    let market = &mut ctx.accounts.market;
    require!(market.status == MarketStatus::Resolved, ErrorCode::InvalidMarketState);

    let position = &mut ctx.accounts.position;
    require!(!position.claimed, ErrorCode::AlreadyClaimed);

    let outcome = market.outcome.ok_or(error!(ErrorCode::InvalidMarketState))?;
    let winning_shares = position.winning_shares(outcome);
    require!(winning_shares > 0, ErrorCode::NoWinningShares);

    let gross_u128 = mul_div_u128(
        market.resolved_pool_snapshot as u128,
        winning_shares,
        market.resolved_winning_supply,
    )?;
    require!(gross_u128 <= u64::MAX as u128, ErrorCode::Overflow);
    let gross = gross_u128 as u64;
    let resolution_fee = mul_div_u64(gross, ctx.accounts.config.resolution_fee_bps as u64, crate::math::BPS_DENOM)?;
    let net = gross.checked_sub(resolution_fee).ok_or(error!(ErrorCode::Underflow))?;

    position.claimed = true;

    move_lamports_with_rent_check(&market.to_account_info(), &ctx.accounts.ledger.to_account_info(), net)?;
    move_lamports_with_rent_check(&market.to_account_info(), &ctx.accounts.treasury.to_account_info(), resolution_fee)?;
    ctx.accounts.treasury.credit(resolution_fee)?;

    if ctx.accounts.ledger.owner == Pubkey::default() {
        ctx.accounts.ledger.owner = ctx.accounts.claimant.key();
        ctx.accounts.ledger.bump = ctx.bumps.ledger;
    }
    ctx.accounts.ledger.credit_withdrawable(net)?;

    msg!("market {} claimed by {} payout={}", market.id, ctx.accounts.claimant.key(), net);
    emit!(Claimed {
        market_id: market.id,
        claimant: ctx.accounts.claimant.key(),
        payout: net,
    });
    Ok(())
}
