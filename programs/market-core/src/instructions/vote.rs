use crate::error::ErrorCode;
use crate::state::{GlobalConfig, Market, MarketStatus, Position};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct Vote<'info> {
    pub voter: Signer<'info>,

    #[account(seeds = [b"config"], bump = config.bump)]
    pub config: Account<'info, GlobalConfig>,

    #[account(mut, seeds = [b"market", market.id.to_le_bytes().as_ref()], bump = market.bump)]
    pub market: Account<'info, Market>,

    #[account(
        mut,
        seeds = [b"position", market.key().as_ref(), voter.key().as_ref()],
        bump = position.bump,
    )]
    pub position: Account<'info, Position>,
}

#[event]
pub struct VoteCast {
    pub market_id: u64,
    pub voter: Pubkey,
    pub outcome: bool,
    pub weight: u128,
}

pub fn handler(ctx: Context<Vote>, outcome: bool) -> Result<()> {
    require!(!ctx.accounts.config.paused, ErrorCode::Paused);

    let now = Clock::get()?.unix_timestamp;
    let market = &mut ctx.accounts.market;
    require!(market.status == MarketStatus::Disputed, ErrorCode::InvalidMarketState);
    require!(market.voting_window_open(now), ErrorCode::VotingWindowClosed);

    let position = &mut ctx.accounts.position;
    require!(position.has_shares(), ErrorCode::NoShares);
    require!(!position.voted, ErrorCode::AlreadyVoted);

    let weight = position.vote_weight();
    position.voted = true;
    position.vote_choice = Some(outcome);

    let proposed_outcome = market.proposed_outcome.ok_or(error!(ErrorCode::InvalidMarketState))?;
    if outcome == proposed_outcome {
        market.proposer_votes = market.proposer_votes.checked_add(weight).ok_or(error!(ErrorCode::Overflow))?;
    } else {
        market.disputer_votes = market.disputer_votes.checked_add(weight).ok_or(error!(ErrorCode::Overflow))?;
    }

    msg!("market {} vote by {} outcome={} weight={}", market.id, ctx.accounts.voter.key(), outcome, weight);
    emit!(VoteCast {
        market_id: market.id,
        voter: ctx.accounts.voter.key(),
        outcome,
        weight,
    });
    Ok(())
}
