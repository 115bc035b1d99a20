// Fixed-point mathematics module for the settlement engine

pub mod fixed_point;
pub mod curve;
pub mod bonds;

pub use fixed_point::*;
pub use curve::*;
pub use bonds::*;

/// Share scale: 10^18, matching the protocol's scaled-share convention.
///
/// Shares are u128 because 10^18-scaled quantities overflow u64 far sooner
/// than the 10^9-scaled shares the teacher's LMSR market used.
pub const SHARE_SCALE: u128 = 1_000_000_000_000_000_000;

/// UNIT_PRICE: P_yes + P_no always sum to this, in lamports.
/// 10^16 wei = 0.01 coin, matching the spec's fixed constant.
pub const UNIT_PRICE: u64 = 10_000_000_000_000_000;

/// Basis points denominator.
pub const BPS_DENOM: u64 = 10_000;

/// Hard, non-configurable protocol windows (seconds).
pub const CREATOR_PRIORITY_WINDOW: i64 = 600;
pub const DISPUTE_WINDOW: i64 = 1_800;
pub const VOTING_WINDOW: i64 = 3_600;
pub const EMERGENCY_REFUND_DELAY: i64 = 86_400;
pub const ACTION_EXPIRY: i64 = 3_600;

/// Hard constant: creator's cut of every trade, non-configurable.
pub const CREATOR_FEE_BPS: u16 = 50;

/// Governable parameter bounds (checked by `GlobalConfig::validate`).
pub const MAX_PLATFORM_FEE_BPS: u16 = 500;
pub const MAX_RESOLUTION_FEE_BPS: u16 = 100;
pub const MIN_BOND_FLOOR: u64 = 10_000_000_000_000_000; // 0.01 coin
pub const MAX_BOND_FLOOR: u64 = 100_000_000_000_000_000; // 0.1 coin
pub const MIN_DYNAMIC_BOND_BPS: u16 = 50;
pub const MAX_DYNAMIC_BOND_BPS: u16 = 500;
pub const MIN_BOND_WINNER_SHARE_BPS: u16 = 2_000;
pub const MAX_BOND_WINNER_SHARE_BPS: u16 = 8_000;

/// Default proposer reward, in basis points of pool_balance at finalize time.
pub const PROPOSER_REWARD_BPS: u64 = 50;
