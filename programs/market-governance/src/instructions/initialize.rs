use crate::error::ErrorCode;
use crate::state::{GovernanceConfig, MAX_SIGNERS};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct InitializeGovernance<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        init,
        payer = payer,
        space = GovernanceConfig::LEN,
        seeds = [b"governance-config"],
        bump,
    )]
    pub config: Account<'info, GovernanceConfig>,

    pub system_program: Program<'info, System>,
}

/// One-time setup of the fixed M-of-N signer set. `signers.len()` and
/// `quorum` are both bounded by `MAX_SIGNERS` and must satisfy
/// `1 <= quorum <= signers.len()`.
pub fn handler(ctx: Context<InitializeGovernance>, signers: Vec<Pubkey>, quorum: u8) -> Result<()> {
    require!(!signers.is_empty() && signers.len() <= MAX_SIGNERS, ErrorCode::InvalidSignerSet);
    require!(quorum > 0 && (quorum as usize) <= signers.len(), ErrorCode::InvalidSignerSet);

    let config = &mut ctx.accounts.config;
    let mut fixed = [Pubkey::default(); MAX_SIGNERS];
    fixed[..signers.len()].copy_from_slice(&signers);

    config.signers = fixed;
    config.signer_count = signers.len() as u8;
    config.quorum = quorum;
    config.next_action_id = 0;
    config.bump = ctx.bumps.config;

    msg!("governance initialized, {} signers, quorum={}", signers.len(), quorum);
    Ok(())
}
