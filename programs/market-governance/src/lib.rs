use anchor_lang::prelude::*;

declare_id!("3XDU9r97qqJRdgqKJEWDYSJesPAUbLqsejXus4WLuhAQ");

// Module declarations
pub mod error;
pub mod instructions;
pub mod state;

// Re-exports for convenience
pub use error::*;
pub use instructions::*;
pub use state::*;

#[program]
pub mod market_governance {
    use super::*;

    /// One-time setup of the fixed M-of-N signer set.
    pub fn initialize_governance(ctx: Context<InitializeGovernance>, signers: Vec<Pubkey>, quorum: u8) -> Result<()> {
        initialize::handler(ctx, signers, quorum)
    }

    /// Queue a parameter/pause action. The proposer's own signature counts
    /// as its first confirmation.
    pub fn propose_action(ctx: Context<ProposeAction>, kind: ActionKind) -> Result<()> {
        propose_action::handler(ctx, kind)
    }

    /// Add a second (or Nth) signer's confirmation to a queued action.
    pub fn confirm_action(ctx: Context<ConfirmAction>, action_id: u64) -> Result<()> {
        confirm_action::handler(ctx, action_id)
    }

    /// Execute a queued action once quorum is reached and it has not
    /// expired, CPI-ing into `market-core` signed by the governance PDA.
    pub fn execute_action(ctx: Context<ExecuteAction>, action_id: u64) -> Result<()> {
        execute_action::handler(ctx, action_id)
    }
}
