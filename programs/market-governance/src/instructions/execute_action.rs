use crate::error::ErrorCode;
use crate::state::{ActionKind, GovernanceAction, GovernanceConfig};
use anchor_lang::prelude::*;
use market_core::cpi::accounts::{ApplyConfigUpdate, SetPaused};
use market_core::program::MarketCore;
use market_core::{ConfigUpdate, GlobalConfig};

#[derive(Accounts)]
#[instruction(action_id: u64)]
pub struct ExecuteAction<'info> {
    pub executor: Signer<'info>,

    #[account(seeds = [b"governance-config"], bump = config.bump)]
    pub config: Account<'info, GovernanceConfig>,

    #[account(
        mut,
        seeds = [b"action", &action_id.to_le_bytes()],
        bump = action.bump,
    )]
    pub action: Account<'info, GovernanceAction>,

    /// The `market-core` `GlobalConfig` this governance deployment owns.
    /// `config` (this program's PDA) is its `governance_authority`.
    #[account(mut, seeds = [b"config"], bump = market_core_config.bump, seeds::program = market_core_program.key())]
    pub market_core_config: Account<'info, GlobalConfig>,

    pub market_core_program: Program<'info, MarketCore>,
}

#[event]
pub struct ActionExecuted {
    pub id: u64,
    pub executor: Pubkey,
}

/// Executes a queued action once quorum is reached, CPI-ing into
/// `market-core` signed by this program's `governance-config` PDA — the
/// account `GlobalConfig::governance_authority` points at.
pub fn handler(ctx: Context<ExecuteAction>, _action_id: u64) -> Result<()> {
    require!(ctx.accounts.config.is_signer(&ctx.accounts.executor.key()), ErrorCode::NotASigner);

    let action = &mut ctx.accounts.action;
    require!(!action.executed, ErrorCode::AlreadyExecuted);
    let now = Clock::get()?.unix_timestamp;
    require!(!action.is_expired(now), ErrorCode::ActionExpired);
    require!(action.quorum_reached(ctx.accounts.config.quorum), ErrorCode::QuorumNotReached);

    let config_bump = ctx.accounts.config.bump;
    let signer_seeds: &[&[u8]] = &[b"governance-config", &[config_bump]];
    let signer_seeds = &[signer_seeds];

    let cpi_program = ctx.accounts.market_core_program.to_account_info();

    match action.kind {
        ActionKind::Pause => {
            let cpi_accounts = SetPaused {
                governance_authority: ctx.accounts.config.to_account_info(),
                config: ctx.accounts.market_core_config.to_account_info(),
            };
            market_core::cpi::set_paused(CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds), true)?;
        }
        ActionKind::Unpause => {
            let cpi_accounts = SetPaused {
                governance_authority: ctx.accounts.config.to_account_info(),
                config: ctx.accounts.market_core_config.to_account_info(),
            };
            market_core::cpi::set_paused(CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds), false)?;
        }
        other => {
            let update = match other {
                ActionKind::SetPlatformFeeBps(v) => ConfigUpdate::PlatformFeeBps(v),
                ActionKind::SetResolutionFeeBps(v) => ConfigUpdate::ResolutionFeeBps(v),
                ActionKind::SetBondFloor(v) => ConfigUpdate::BondFloor(v),
                ActionKind::SetDynamicBondBps(v) => ConfigUpdate::DynamicBondBps(v),
                ActionKind::SetBondWinnerShareBps(v) => ConfigUpdate::BondWinnerShareBps(v),
                ActionKind::SetMinBet(v) => ConfigUpdate::MinBet(v),
                ActionKind::SetTreasury(v) => ConfigUpdate::Treasury(v),
                ActionKind::Pause | ActionKind::Unpause => unreachable!("handled above"),
            };
            let cpi_accounts = ApplyConfigUpdate {
                governance_authority: ctx.accounts.config.to_account_info(),
                config: ctx.accounts.market_core_config.to_account_info(),
            };
            market_core::cpi::apply_config_update(CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds), update)?;
        }
    }

    action.executed = true;
    msg!("action {} executed by {}", action.id, ctx.accounts.executor.key());
    emit!(ActionExecuted {
        id: action.id,
        executor: ctx.accounts.executor.key(),
    });
    Ok(())
}
