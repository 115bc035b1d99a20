use crate::error::ErrorCode;
use crate::math::bonds::disputer_bond;
use crate::state::{GlobalConfig, Market, MarketStatus};
use anchor_lang::prelude::*;
use anchor_lang::solana_program::program::invoke;
use anchor_lang::solana_program::system_instruction;

#[derive(Accounts)]
pub struct Dispute<'info> {
    #[account(mut)]
    pub disputer: Signer<'info>,

    #[account(seeds = [b"config"], bump = config.bump)]
    pub config: Account<'info, GlobalConfig>,

    #[account(mut, seeds = [b"market", market.id.to_le_bytes().as_ref()], bump = market.bump)]
    pub market: Account<'info, Market>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct ProposalDisputed {
    pub market_id: u64,
    pub disputer: Pubkey,
    pub bond: u64,
}

pub fn handler(ctx: Context<Dispute>) -> Result<()> {
    require!(!ctx.accounts.config.paused, ErrorCode::Paused);

    let now = Clock::get()?.unix_timestamp;
    let market = &mut ctx.accounts.market;
    require!(market.status == MarketStatus::Proposed, ErrorCode::InvalidMarketState);
    require!(ctx.accounts.disputer.key() != market.proposer, ErrorCode::SelfDispute);
    require!(market.dispute_window_open(now), ErrorCode::DisputeWindowClosed);

    let bond = disputer_bond(market.proposer_bond)?;

    invoke(
        &system_instruction::transfer(ctx.accounts.disputer.key, &market.key(), bond),
        &[
            ctx.accounts.disputer.to_account_info(),
            market.to_account_info(),
            ctx.accounts.system_program.to_account_info(),
        ],
    )
    .map_err(|_| error!(ErrorCode::TransferFailed))?;

    market.disputer = ctx.accounts.disputer.key();
    market.disputer_bond = bond;
    market.dispute_ts = now;
    market.status = MarketStatus::Disputed;

    msg!("market {} disputed by {}", market.id, market.disputer);
    emit!(ProposalDisputed {
        market_id: market.id,
        disputer: market.disputer,
        bond,
    });
    Ok(())
}
