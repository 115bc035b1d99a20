use super::fixed_point::{bps_of, mul_div_u128};
use super::PROPOSER_REWARD_BPS;
use crate::error::ErrorCode;
use anchor_lang::prelude::*;

/// Proposer bond required to open a resolution on a market with the given
/// pool balance: `max(bond_floor, pool_balance * dynamic_bond_bps / 10000)`.
///
/// Both `bond_floor` and `dynamic_bond_bps` are governance-set per
/// `GlobalConfig` and clamped to `MIN_BOND_FLOOR..=MAX_BOND_FLOOR` and
/// `MIN_DYNAMIC_BOND_BPS..=MAX_DYNAMIC_BOND_BPS` respectively at config time.
pub fn required_bond(pool_balance: u64, bond_floor: u64, dynamic_bond_bps: u16) -> Result<u64> {
    let dynamic = bps_of(pool_balance, dynamic_bond_bps as u64)?;
    Ok(bond_floor.max(dynamic))
}

/// A disputer must post exactly twice the proposer's bond.
pub fn disputer_bond(proposer_bond: u64) -> Result<u64> {
    proposer_bond
        .checked_mul(2)
        .ok_or(error!(ErrorCode::Overflow))
}

/// Split of the combined bond pool (`proposer_bond + disputer_bond`) once a
/// dispute is settled by jury vote.
#[derive(Debug, Clone, Copy)]
pub struct BondSplit {
    /// Paid out to the side that won the vote (the original bond poster).
    pub winner_payout: u64,
    /// Remaining pool, distributed pro-rata across jurors who voted with
    /// the winning side.
    pub jury_pool: u64,
}

/// `winner_payout = total_bond * bond_winner_share_bps / 10000`,
/// `jury_pool = total_bond - winner_payout`. `bond_winner_share_bps` is
/// governance-set, clamped to `MIN_BOND_WINNER_SHARE_BPS..=MAX_BOND_WINNER_SHARE_BPS`.
pub fn split_bond_pool(total_bond: u64, bond_winner_share_bps: u16) -> Result<BondSplit> {
    let winner_payout = bps_of(total_bond, bond_winner_share_bps as u64)?;
    let jury_pool = total_bond
        .checked_sub(winner_payout)
        .ok_or(error!(ErrorCode::Underflow))?;
    Ok(BondSplit {
        winner_payout,
        jury_pool,
    })
}

/// A single juror's pro-rata share of the jury pool, weighted by the voting
/// power (u128 scaled shares) they cast with the winning side. Floors,
/// leaving any dust in the pool for the last claimant or the treasury sweep.
pub fn juror_share(jury_pool: u64, juror_weight: u128, total_winning_weight: u128) -> Result<u64> {
    if total_winning_weight == 0 {
        return Ok(0);
    }
    let share = mul_div_u128(jury_pool as u128, juror_weight, total_winning_weight)?;
    require!(share <= u64::MAX as u128, ErrorCode::Overflow);
    Ok(share as u64)
}

/// Reward paid to the proposer when a proposed outcome goes undisputed
/// through the dispute window: `pool_balance * PROPOSER_REWARD_BPS / 10000`,
/// on top of their bond being returned.
pub fn proposer_reward(pool_balance: u64) -> Result<u64> {
    bps_of(pool_balance, PROPOSER_REWARD_BPS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_bond_uses_floor() {
        // tiny pool: dynamic bond is below the floor
        let bond = required_bond(1_000, 10_000_000_000_000_000, 300).unwrap();
        assert_eq!(bond, 10_000_000_000_000_000);
    }

    #[test]
    fn test_required_bond_uses_dynamic() {
        // large pool: dynamic bond exceeds the floor
        let pool = 1_000_000_000_000_000_000;
        let bond = required_bond(pool, 10_000_000_000_000_000, 300).unwrap();
        assert_eq!(bond, 30_000_000_000_000_000);
    }

    #[test]
    fn test_disputer_bond_is_double() {
        assert_eq!(disputer_bond(50).unwrap(), 100);
    }

    #[test]
    fn test_split_bond_pool_exact() {
        let total = 300;
        let split = split_bond_pool(total, 6_000).unwrap();
        assert_eq!(split.winner_payout, 180);
        assert_eq!(split.jury_pool, 120);
        assert_eq!(split.winner_payout + split.jury_pool, total);
    }

    #[test]
    fn test_juror_share_pro_rata() {
        let share = juror_share(100, 25, 50).unwrap();
        assert_eq!(share, 50);
    }

    #[test]
    fn test_juror_share_no_winning_weight() {
        assert_eq!(juror_share(100, 0, 0).unwrap(), 0);
    }

    #[test]
    fn test_proposer_reward() {
        assert_eq!(proposer_reward(1_000_000_000_000_000_000).unwrap(), 5_000_000_000_000_000);
    }
}
