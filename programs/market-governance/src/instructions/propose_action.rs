use crate::error::ErrorCode;
use crate::state::{ActionKind, GovernanceAction, GovernanceConfig};
use anchor_lang::prelude::*;
use market_core::math::{
    MAX_BOND_FLOOR, MAX_BOND_WINNER_SHARE_BPS, MAX_DYNAMIC_BOND_BPS, MAX_PLATFORM_FEE_BPS,
    MAX_RESOLUTION_FEE_BPS, MIN_BOND_FLOOR, MIN_BOND_WINNER_SHARE_BPS, MIN_DYNAMIC_BOND_BPS,
};

#[derive(Accounts)]
pub struct ProposeAction<'info> {
    #[account(mut)]
    pub proposer: Signer<'info>,

    #[account(mut, seeds = [b"governance-config"], bump = config.bump)]
    pub config: Account<'info, GovernanceConfig>,

    #[account(
        init,
        payer = proposer,
        space = GovernanceAction::LEN,
        seeds = [b"action", &config.next_action_id.to_le_bytes()],
        bump,
    )]
    pub action: Account<'info, GovernanceAction>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct ActionProposed {
    pub id: u64,
    pub proposer: Pubkey,
    pub kind: ActionKind,
    pub expiry_ts: i64,
}

/// Validates the kind's payload against the same bounds `market-core` will
/// re-check on execute, so a doomed action fails fast instead of burning an
/// action id that can never clear `apply_config_update`.
fn validate_kind(kind: &ActionKind) -> Result<()> {
    match *kind {
        ActionKind::SetPlatformFeeBps(bps) => {
            require!(bps <= MAX_PLATFORM_FEE_BPS, ErrorCode::ParameterOutOfBounds);
        }
        ActionKind::SetResolutionFeeBps(bps) => {
            require!(bps <= MAX_RESOLUTION_FEE_BPS, ErrorCode::ParameterOutOfBounds);
        }
        ActionKind::SetBondFloor(v) => {
            require!(v >= MIN_BOND_FLOOR && v <= MAX_BOND_FLOOR, ErrorCode::ParameterOutOfBounds);
        }
        ActionKind::SetDynamicBondBps(bps) => {
            require!(
                bps >= MIN_DYNAMIC_BOND_BPS && bps <= MAX_DYNAMIC_BOND_BPS,
                ErrorCode::ParameterOutOfBounds
            );
        }
        ActionKind::SetBondWinnerShareBps(bps) => {
            require!(
                bps >= MIN_BOND_WINNER_SHARE_BPS && bps <= MAX_BOND_WINNER_SHARE_BPS,
                ErrorCode::ParameterOutOfBounds
            );
        }
        ActionKind::SetMinBet(v) => {
            require!(v > 0, ErrorCode::ParameterOutOfBounds);
        }
        ActionKind::SetTreasury(_) | ActionKind::Pause | ActionKind::Unpause => {}
    }
    Ok(())
}

/// Queues a governance action. The proposer's own approval is recorded
/// immediately, matching the expectation that the signer who calls
/// `propose_action` counts toward quorum without a separate self-confirm.
pub fn handler(ctx: Context<ProposeAction>, kind: ActionKind) -> Result<()> {
    validate_kind(&kind)?;

    let proposer_key = ctx.accounts.proposer.key();
    let config = &mut ctx.accounts.config;
    let proposer_idx = config.signer_index(&proposer_key).ok_or(ErrorCode::NotASigner)?;

    let id = config.allocate_action_id()?;
    let now = Clock::get()?.unix_timestamp;
    let expiry_ts = now + market_core::math::ACTION_EXPIRY;

    let action = &mut ctx.accounts.action;
    action.id = id;
    action.kind = kind;
    action.proposer = proposer_key;
    action.approvals = 0;
    action.proposed_ts = now;
    action.expiry_ts = expiry_ts;
    action.executed = false;
    action.bump = ctx.bumps.action;
    action.add_approval(proposer_idx)?;

    msg!("action {} proposed by {}: {:?}", id, proposer_key, action.kind);
    emit!(ActionProposed {
        id,
        proposer: proposer_key,
        kind: action.kind,
        expiry_ts,
    });
    Ok(())
}
