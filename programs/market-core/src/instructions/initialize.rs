use crate::math::{CREATOR_FEE_BPS, MAX_BOND_FLOOR, MIN_BOND_FLOOR};
use crate::state::{GlobalConfig, MarketCounter, Treasury};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct InitializeGlobalConfig<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        init,
        payer = payer,
        space = GlobalConfig::LEN,
        seeds = [b"config"],
        bump,
    )]
    pub config: Account<'info, GlobalConfig>,

    #[account(
        init,
        payer = payer,
        space = MarketCounter::LEN,
        seeds = [b"counter"],
        bump,
    )]
    pub counter: Account<'info, MarketCounter>,

    #[account(
        init,
        payer = payer,
        space = Treasury::LEN,
        seeds = [b"treasury"],
        bump,
    )]
    pub treasury: Account<'info, Treasury>,

    pub system_program: Program<'info, System>,
}

/// One-time setup: creates `GlobalConfig`, the `MarketCounter` singleton,
/// and the `Treasury` accrual account, seeding conservative defaults
/// within every governable bound.
pub fn handler(
    ctx: Context<InitializeGlobalConfig>,
    governance_authority: Pubkey,
    treasury_authority: Pubkey,
) -> Result<()> {
    let config = &mut ctx.accounts.config;
    config.governance_authority = governance_authority;
    config.treasury = treasury_authority;
    config.platform_fee_bps = 300;
    config.creator_fee_bps = CREATOR_FEE_BPS;
    config.resolution_fee_bps = 30;
    config.bond_floor = MIN_BOND_FLOOR;
    config.dynamic_bond_bps = 300;
    config.bond_winner_share_bps = 6_000;
    config.min_bet = 1_000_000;
    config.paused = false;
    config.bump = ctx.bumps.config;
    config.validate()?;

    ctx.accounts.counter.next_id = 0;
    ctx.accounts.counter.bump = ctx.bumps.counter;

    ctx.accounts.treasury.authority = treasury_authority;
    ctx.accounts.treasury.accrued = 0;
    ctx.accounts.treasury.bump = ctx.bumps.treasury;

    // bond_floor must not exceed MAX_BOND_FLOOR either, validate() already checks it
    require!(config.bond_floor <= MAX_BOND_FLOOR, crate::error::ErrorCode::ParameterOutOfBounds);

    msg!("global config initialized, governance_authority={}", governance_authority);
    Ok(())
}
