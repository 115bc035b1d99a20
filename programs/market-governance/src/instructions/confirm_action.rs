use crate::error::ErrorCode;
use crate::state::{GovernanceAction, GovernanceConfig};
use anchor_lang::prelude::*;

#[derive(Accounts)]
#[instruction(action_id: u64)]
pub struct ConfirmAction<'info> {
    pub signer: Signer<'info>,

    #[account(seeds = [b"governance-config"], bump = config.bump)]
    pub config: Account<'info, GovernanceConfig>,

    #[account(
        mut,
        seeds = [b"action", &action_id.to_le_bytes()],
        bump = action.bump,
    )]
    pub action: Account<'info, GovernanceAction>,
}

#[event]
pub struct ActionConfirmed {
    pub id: u64,
    pub signer: Pubkey,
    pub approvals: u32,
}

pub fn handler(ctx: Context<ConfirmAction>, _action_id: u64) -> Result<()> {
    let signer_key = ctx.accounts.signer.key();
    let signer_idx = ctx.accounts.config.signer_index(&signer_key).ok_or(ErrorCode::NotASigner)?;

    let action = &mut ctx.accounts.action;
    require!(!action.executed, ErrorCode::AlreadyExecuted);
    let now = Clock::get()?.unix_timestamp;
    require!(!action.is_expired(now), ErrorCode::ActionExpired);

    action.add_approval(signer_idx)?;

    msg!("action {} confirmed by {}, approvals={}", action.id, signer_key, action.approval_count());
    emit!(ActionConfirmed {
        id: action.id,
        signer: signer_key,
        approvals: action.approval_count(),
    });
    Ok(())
}
