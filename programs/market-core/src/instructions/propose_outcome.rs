use crate::error::ErrorCode;
use crate::math::bonds::required_bond;
use crate::state::{GlobalConfig, Market, MarketStatus, Treasury};
use crate::utils::fees::split_platform_creator_fee;
use anchor_lang::prelude::*;
use anchor_lang::solana_program::program::invoke;
use anchor_lang::solana_program::system_instruction;

#[derive(Accounts)]
pub struct ProposeOutcome<'info> {
    #[account(mut)]
    pub proposer: Signer<'info>,

    #[account(seeds = [b"config"], bump = config.bump)]
    pub config: Account<'info, GlobalConfig>,

    #[account(mut, seeds = [b"market", market.id.to_le_bytes().as_ref()], bump = market.bump)]
    pub market: Account<'info, Market>,

    #[account(mut, seeds = [b"treasury"], bump = treasury.bump)]
    pub treasury: Account<'info, Treasury>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct OutcomeProposed {
    pub market_id: u64,
    pub proposer: Pubkey,
    pub outcome: bool,
    pub bond: u64,
}

/// `value_sent` is the lamports the caller attaches: resolution fee is
/// peeled off to treasury first, the remainder must cover the required
/// bond (Open Question #2).
pub fn handler(ctx: Context<ProposeOutcome>, outcome: bool, value_sent: u64) -> Result<()> {
    require!(!ctx.accounts.config.paused, ErrorCode::Paused);

    let now = Clock::get()?.unix_timestamp;
    let market = &mut ctx.accounts.market;
    require!(market.is_expired_untouched(now), ErrorCode::NotExpired);
    require!(market.proposed_outcome.is_none(), ErrorCode::AlreadyProposed);

    if market.in_creator_priority_window(now) {
        require!(ctx.accounts.proposer.key() == market.creator, ErrorCode::NotCreatorInWindow);
    }

    require!(!market.no_activity(), ErrorCode::NoActivity);
    require!(!market.one_sided(), ErrorCode::OneSidedMarket);

    let fb = split_platform_creator_fee(value_sent, ctx.accounts.config.resolution_fee_bps, 0)?;
    let resolution_fee = fb.platform_fee;
    let remainder = fb.net;

    let bond = required_bond(market.pool_balance, ctx.accounts.config.bond_floor, ctx.accounts.config.dynamic_bond_bps)?;
    require!(remainder >= bond, ErrorCode::InsufficientBond);

    invoke(
        &system_instruction::transfer(ctx.accounts.proposer.key, &market.key(), value_sent),
        &[
            ctx.accounts.proposer.to_account_info(),
            market.to_account_info(),
            ctx.accounts.system_program.to_account_info(),
        ],
    )
    .map_err(|_| error!(ErrorCode::TransferFailed))?;

    crate::utils::rent::move_lamports_with_rent_check(
        &market.to_account_info(),
        &ctx.accounts.treasury.to_account_info(),
        resolution_fee,
    )?;
    ctx.accounts.treasury.credit(resolution_fee)?;

    // any excess over the required bond is folded into the pool so every
    // lamport sitting in the market account stays accounted for.
    let excess = remainder.checked_sub(bond).ok_or(error!(ErrorCode::Underflow))?;
    market.pool_balance = market.pool_balance.checked_add(excess).ok_or(error!(ErrorCode::Overflow))?;

    market.proposer = ctx.accounts.proposer.key();
    market.proposer_bond = bond;
    market.proposed_outcome = Some(outcome);
    market.proposal_ts = now;
    market.status = MarketStatus::Proposed;

    msg!("market {} proposed outcome={} by {}", market.id, outcome, market.proposer);
    emit!(OutcomeProposed {
        market_id: market.id,
        proposer: market.proposer,
        outcome,
        bond,
    });
    Ok(())
}
