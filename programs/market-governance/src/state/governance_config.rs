use crate::error::ErrorCode;
use anchor_lang::prelude::*;

pub const MAX_SIGNERS: usize = 16;

/// The fixed M-of-N signer set this deployment trusts. `bump` doubles as the
/// signing seed for every CPI this PDA makes into `market-core` — the
/// config account IS the governance authority `GlobalConfig` points at.
#[account]
pub struct GovernanceConfig {
    pub signers: [Pubkey; MAX_SIGNERS],
    pub signer_count: u8,
    pub quorum: u8,
    pub next_action_id: u64,
    pub bump: u8,
}

impl GovernanceConfig {
    pub const LEN: usize = 8 // discriminator
        + 32 * MAX_SIGNERS
        + 1 // signer_count
        + 1 // quorum
        + 8 // next_action_id
        + 1; // bump

    pub fn signer_index(&self, key: &Pubkey) -> Option<usize> {
        self.signers[..self.signer_count as usize]
            .iter()
            .position(|s| s == key)
    }

    pub fn is_signer(&self, key: &Pubkey) -> bool {
        self.signer_index(key).is_some()
    }

    pub fn allocate_action_id(&mut self) -> Result<u64> {
        let id = self.next_action_id;
        self.next_action_id = self
            .next_action_id
            .checked_add(1)
            .ok_or(error!(ErrorCode::ActionIdOverflow))?;
        Ok(id)
    }
}
