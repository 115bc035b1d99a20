use crate::error::ErrorCode;
use crate::math::bonds::juror_share;
use crate::state::{Ledger, Market, MarketStatus, Position};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct ClaimJuryFees<'info> {
    #[account(mut)]
    pub juror: Signer<'info>,

    #[account(seeds = [b"market", market.id.to_le_bytes().as_ref()], bump = market.bump)]
    pub market: Account<'info, Market>,

    #[account(
        mut,
        seeds = [b"position", market.key().as_ref(), juror.key().as_ref()],
        bump = position.bump,
    )]
    pub position: Account<'info, Position>,

    #[account(
        init_if_needed,
        payer = juror,
        space = Ledger::LEN,
        seeds = [b"ledger", juror.key().as_ref()],
        bump,
    )]
    pub ledger: Account<'info, Ledger>,

    pub system_program: Program<'info, System>,
}

/// Computes a juror's pro-rata share of the jury pool (already physically
/// held in the market account since finalize) and credits it to their
/// ledger's `jury_fees` balance; payout happens via a later `withdraw`.
pub fn handler(ctx: Context<ClaimJuryFees>) -> Result<()> {
    let market = &ctx.accounts.market;
    require!(market.status == MarketStatus::Resolved, ErrorCode::InvalidMarketState);
    require!(market.jury_pool > 0, ErrorCode::ZeroBalance);

    let outcome = market.outcome.ok_or(error!(ErrorCode::InvalidMarketState))?;
    let position = &mut ctx.accounts.position;
    require!(position.voted, ErrorCode::NoShares);
    require!(!position.jury_claimed, ErrorCode::AlreadyClaimed);
    require!(position.vote_choice == Some(outcome), ErrorCode::NoWinningShares);

    let share = juror_share(market.jury_pool, position.vote_weight(), market.jury_pool_weight)?;
    require!(share > 0, ErrorCode::ZeroBalance);

    position.jury_claimed = true;

    crate::utils::rent::move_lamports_with_rent_check(
        &market.to_account_info(),
        &ctx.accounts.ledger.to_account_info(),
        share,
    )?;
    if ctx.accounts.ledger.owner == Pubkey::default() {
        ctx.accounts.ledger.owner = ctx.accounts.juror.key();
        ctx.accounts.ledger.bump = ctx.bumps.ledger;
    }
    ctx.accounts.ledger.credit_jury_fees(share)?;

    msg!("market {} jury fee claimed by {} amount={}", market.id, ctx.accounts.juror.key(), share);
    Ok(())
}
