use crate::error::ErrorCode;
use crate::math::{
    MAX_BOND_FLOOR, MAX_BOND_WINNER_SHARE_BPS, MAX_DYNAMIC_BOND_BPS, MAX_PLATFORM_FEE_BPS,
    MAX_RESOLUTION_FEE_BPS, MIN_BOND_FLOOR, MIN_BOND_WINNER_SHARE_BPS, MIN_DYNAMIC_BOND_BPS,
};
use crate::state::{GlobalConfig, Treasury};
use crate::utils::rent::move_lamports_with_rent_check;
use anchor_lang::prelude::*;

/// One governable field per variant, applied by `apply_config_update`. The
/// caller is always `config.governance_authority` — either `market-governance`
/// acting via CPI after `execute_action` reaches quorum, or that authority
/// acting directly in a single-signer deployment (see DESIGN.md).
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigUpdate {
    PlatformFeeBps(u16),
    ResolutionFeeBps(u16),
    BondFloor(u64),
    DynamicBondBps(u16),
    BondWinnerShareBps(u16),
    MinBet(u64),
    Treasury(Pubkey),
}

#[derive(Accounts)]
pub struct ApplyConfigUpdate<'info> {
    #[account(address = config.governance_authority @ ErrorCode::NotGovernance)]
    pub governance_authority: Signer<'info>,

    #[account(mut, seeds = [b"config"], bump = config.bump)]
    pub config: Account<'info, GlobalConfig>,
}

#[event]
pub struct ConfigUpdated {
    pub update: ConfigUpdate,
}

pub fn apply_config_update(ctx: Context<ApplyConfigUpdate>, update: ConfigUpdate) -> Result<()> {
    let config = &mut ctx.accounts.config;
    match update {
        ConfigUpdate::PlatformFeeBps(bps) => {
            require!(bps <= MAX_PLATFORM_FEE_BPS, ErrorCode::ParameterOutOfBounds);
            config.platform_fee_bps = bps;
        }
        ConfigUpdate::ResolutionFeeBps(bps) => {
            require!(bps <= MAX_RESOLUTION_FEE_BPS, ErrorCode::ParameterOutOfBounds);
            config.resolution_fee_bps = bps;
        }
        ConfigUpdate::BondFloor(v) => {
            require!(v >= MIN_BOND_FLOOR && v <= MAX_BOND_FLOOR, ErrorCode::ParameterOutOfBounds);
            config.bond_floor = v;
        }
        ConfigUpdate::DynamicBondBps(bps) => {
            require!(bps >= MIN_DYNAMIC_BOND_BPS && bps <= MAX_DYNAMIC_BOND_BPS, ErrorCode::ParameterOutOfBounds);
            config.dynamic_bond_bps = bps;
        }
        ConfigUpdate::BondWinnerShareBps(bps) => {
            require!(
                bps >= MIN_BOND_WINNER_SHARE_BPS && bps <= MAX_BOND_WINNER_SHARE_BPS,
                ErrorCode::ParameterOutOfBounds
            );
            config.bond_winner_share_bps = bps;
        }
        ConfigUpdate::MinBet(v) => {
            require!(v > 0, ErrorCode::ParameterOutOfBounds);
            config.min_bet = v;
        }
        ConfigUpdate::Treasury(addr) => {
            config.treasury = addr;
        }
    }
    config.validate()?;

    msg!("config updated: {:?}", update);
    emit!(ConfigUpdated { update });
    Ok(())
}

#[derive(Accounts)]
pub struct SetPaused<'info> {
    #[account(address = config.governance_authority @ ErrorCode::NotGovernance)]
    pub governance_authority: Signer<'info>,

    #[account(mut, seeds = [b"config"], bump = config.bump)]
    pub config: Account<'info, GlobalConfig>,
}

#[event]
pub struct Paused {}

#[event]
pub struct Unpaused {}

pub fn set_paused(ctx: Context<SetPaused>, paused: bool) -> Result<()> {
    ctx.accounts.config.paused = paused;
    msg!("protocol paused={}", paused);
    if paused {
        emit!(Paused {});
    } else {
        emit!(Unpaused {});
    }
    Ok(())
}

#[derive(Accounts)]
pub struct SweepTreasury<'info> {
    #[account(address = config.governance_authority @ ErrorCode::NotGovernance)]
    pub governance_authority: Signer<'info>,

    #[account(seeds = [b"config"], bump = config.bump)]
    pub config: Account<'info, GlobalConfig>,

    #[account(mut, seeds = [b"treasury"], bump = treasury.bump)]
    pub treasury: Account<'info, Treasury>,

    /// CHECK: recipient is `config.treasury`, constrained by address
    #[account(mut, address = config.treasury)]
    pub destination: UncheckedAccount<'info>,
}

#[event]
pub struct TreasurySwept {
    pub amount: u64,
    pub destination: Pubkey,
}

pub fn sweep_treasury(ctx: Context<SweepTreasury>) -> Result<()> {
    let amount = ctx.accounts.treasury.take()?;
    move_lamports_with_rent_check(&ctx.accounts.treasury.to_account_info(), &ctx.accounts.destination.to_account_info(), amount)?;

    msg!("treasury swept amount={} to={}", amount, ctx.accounts.destination.key());
    emit!(TreasurySwept {
        amount,
        destination: ctx.accounts.destination.key(),
    });
    Ok(())
}
