use crate::error::ErrorCode;
use crate::math::{
    CREATOR_FEE_BPS, MAX_BOND_FLOOR, MAX_BOND_WINNER_SHARE_BPS, MAX_DYNAMIC_BOND_BPS,
    MAX_PLATFORM_FEE_BPS, MAX_RESOLUTION_FEE_BPS, MIN_BOND_FLOOR, MIN_BOND_WINNER_SHARE_BPS,
    MIN_DYNAMIC_BOND_BPS,
};
use anchor_lang::prelude::*;

#[account]
pub struct GlobalConfig {
    pub governance_authority: Pubkey,
    pub treasury: Pubkey,
    pub platform_fee_bps: u16,
    pub creator_fee_bps: u16,
    pub resolution_fee_bps: u16,
    pub bond_floor: u64,
    pub dynamic_bond_bps: u16,
    pub bond_winner_share_bps: u16,
    pub min_bet: u64,
    pub paused: bool,
    pub bump: u8,
}

impl GlobalConfig {
    pub const LEN: usize = 8 // discriminator
        + 32 // governance_authority
        + 32 // treasury
        + 2 // platform_fee_bps
        + 2 // creator_fee_bps
        + 2 // resolution_fee_bps
        + 8 // bond_floor
        + 2 // dynamic_bond_bps
        + 2 // bond_winner_share_bps
        + 8 // min_bet
        + 1 // paused
        + 1; // bump

    /// Enforces every bound in the global parameter table. Called on init
    /// and on every governance-driven parameter write, matching the
    /// teacher's `GlobalConfig::validate`.
    pub fn validate(&self) -> Result<()> {
        require!(
            self.platform_fee_bps <= MAX_PLATFORM_FEE_BPS,
            ErrorCode::ParameterOutOfBounds
        );
        require!(
            self.creator_fee_bps == CREATOR_FEE_BPS,
            ErrorCode::ParameterOutOfBounds
        );
        require!(
            self.resolution_fee_bps <= MAX_RESOLUTION_FEE_BPS,
            ErrorCode::ParameterOutOfBounds
        );
        require!(
            self.bond_floor >= MIN_BOND_FLOOR && self.bond_floor <= MAX_BOND_FLOOR,
            ErrorCode::ParameterOutOfBounds
        );
        require!(
            self.dynamic_bond_bps >= MIN_DYNAMIC_BOND_BPS && self.dynamic_bond_bps <= MAX_DYNAMIC_BOND_BPS,
            ErrorCode::ParameterOutOfBounds
        );
        require!(
            self.bond_winner_share_bps >= MIN_BOND_WINNER_SHARE_BPS
                && self.bond_winner_share_bps <= MAX_BOND_WINNER_SHARE_BPS,
            ErrorCode::ParameterOutOfBounds
        );
        require!(self.min_bet > 0, ErrorCode::ParameterOutOfBounds);
        Ok(())
    }
}
