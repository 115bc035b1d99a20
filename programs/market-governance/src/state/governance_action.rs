use crate::error::ErrorCode;
use anchor_lang::prelude::*;

/// Discriminated union of governable operations, mirroring market-core's
/// `ConfigUpdate` plus the two pause variants, kept as a separate type here
/// since an action is queued and confirmed before it is ever translated into
/// a `market-core` CPI call.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionKind {
    SetPlatformFeeBps(u16),
    SetResolutionFeeBps(u16),
    SetBondFloor(u64),
    SetDynamicBondBps(u16),
    SetBondWinnerShareBps(u16),
    SetMinBet(u64),
    SetTreasury(Pubkey),
    Pause,
    Unpause,
}

/// A queued, expiring governance action. `approvals` is a bitmask over the
/// signer set's fixed index order (`GovernanceConfig::signer_index`),
/// supporting up to 16 signers in a fixed-size account, following the
/// codebase's preference for bitflags over `Vec<Pubkey>`.
#[account]
pub struct GovernanceAction {
    pub id: u64,
    pub kind: ActionKind,
    pub proposer: Pubkey,
    pub approvals: u16,
    pub proposed_ts: i64,
    pub expiry_ts: i64,
    pub executed: bool,
    pub bump: u8,
}

impl GovernanceAction {
    pub const LEN: usize = 8 // discriminator
        + 8 // id
        + 33 // kind: 1 discriminant + up to 32 bytes payload (Pubkey is the largest variant)
        + 32 // proposer
        + 2 // approvals
        + 8 // proposed_ts
        + 8 // expiry_ts
        + 1 // executed
        + 1; // bump

    pub fn has_approval(&self, signer_idx: usize) -> bool {
        self.approvals & (1u16 << signer_idx) != 0
    }

    pub fn add_approval(&mut self, signer_idx: usize) -> Result<()> {
        require!(!self.has_approval(signer_idx), ErrorCode::AlreadyConfirmed);
        self.approvals |= 1u16 << signer_idx;
        Ok(())
    }

    pub fn approval_count(&self) -> u32 {
        self.approvals.count_ones()
    }

    pub fn is_expired(&self, now: i64) -> bool {
        now >= self.expiry_ts
    }

    pub fn quorum_reached(&self, quorum: u8) -> bool {
        self.approval_count() >= quorum as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank_action() -> GovernanceAction {
        GovernanceAction {
            id: 0,
            kind: ActionKind::Pause,
            proposer: Pubkey::default(),
            approvals: 0,
            proposed_ts: 0,
            expiry_ts: 3_600,
            executed: false,
            bump: 255,
        }
    }

    #[test]
    fn test_add_approval_sets_bit() {
        let mut a = blank_action();
        a.add_approval(0).unwrap();
        a.add_approval(2).unwrap();
        assert!(a.has_approval(0));
        assert!(!a.has_approval(1));
        assert!(a.has_approval(2));
        assert_eq!(a.approval_count(), 2);
    }

    #[test]
    fn test_add_approval_rejects_double_confirm() {
        let mut a = blank_action();
        a.add_approval(0).unwrap();
        assert!(a.add_approval(0).is_err());
    }

    #[test]
    fn test_quorum_reached() {
        let mut a = blank_action();
        a.add_approval(0).unwrap();
        assert!(!a.quorum_reached(2));
        a.add_approval(1).unwrap();
        assert!(a.quorum_reached(2));
    }

    #[test]
    fn test_expiry_boundary() {
        let a = blank_action();
        assert!(!a.is_expired(3_599));
        assert!(a.is_expired(3_600));
    }
}
