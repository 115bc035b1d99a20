use crate::error::ErrorCode;
use crate::math::{CREATOR_PRIORITY_WINDOW, DISPUTE_WINDOW, EMERGENCY_REFUND_DELAY, VOTING_WINDOW};
use anchor_lang::prelude::*;

pub const MAX_QUESTION_LEN: usize = 200;
pub const MAX_EVIDENCE_LEN: usize = 200;
pub const MAX_RULES_LEN: usize = 400;
pub const MAX_IMAGE_LEN: usize = 200;

/// A binary outcome side. `Side::Yes` corresponds to `outcome == true`
/// everywhere an outcome bool is stored.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Yes,
    No,
}

impl Side {
    pub fn other(&self) -> Side {
        match self {
            Side::Yes => Side::No,
            Side::No => Side::Yes,
        }
    }

    pub fn as_bool(&self) -> bool {
        matches!(self, Side::Yes)
    }
}

impl From<bool> for Side {
    fn from(outcome: bool) -> Self {
        if outcome {
            Side::Yes
        } else {
            Side::No
        }
    }
}

/// Stored lifecycle state. `Expired` is never written here — it is a derived
/// predicate over `Active` + `expiry_ts`, matching the teacher's
/// `can_finalize`/`can_dispute` timing predicates rather than a pushed
/// cron transition. The `market_status` view reifies it for external
/// consumers who need a single enum.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarketStatus {
    Active,
    Proposed,
    Disputed,
    Resolved,
    Refundable,
}

/// Display-only status that reifies the derived `Expired` state for views
/// and indexers. Never stored on `Market` itself.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayStatus {
    Active,
    Expired,
    Proposed,
    Disputed,
    Resolved,
    Refundable,
}

#[account]
pub struct Market {
    pub id: u64,
    pub creator: Pubkey,
    pub question: String,
    pub evidence_url: String,
    pub resolution_rules: String,
    pub image_url: String,
    pub expiry_ts: i64,
    pub virtual_liquidity: u128,
    pub yes_supply: u128,
    pub no_supply: u128,
    pub pool_balance: u64,
    pub status: MarketStatus,
    pub proposer: Pubkey,
    pub disputer: Pubkey,
    pub proposer_bond: u64,
    pub disputer_bond: u64,
    pub proposed_outcome: Option<bool>,
    pub proposal_ts: i64,
    pub dispute_ts: i64,
    pub proposer_votes: u128,
    pub disputer_votes: u128,
    pub outcome: Option<bool>,
    /// Marks that finalize's one-time bond/reward distribution has already
    /// run for this market, independent of `status` (belt-and-braces guard
    /// against a second finalize on the same resolved market).
    pub paid_out: bool,
    pub creator_fees_accrued: u64,
    pub resolved_pool_snapshot: u64,
    pub resolved_winning_supply: u128,
    pub refund_pool_snapshot: u64,
    pub refund_total_supply: u128,
    /// Remaining half (minus `bond_winner_share_bps`) of the losing bond
    /// after a disputed finalize, held here until jurors claim pro-rata.
    pub jury_pool: u64,
    /// Total vote weight of the winning side, the denominator for each
    /// juror's pro-rata share of `jury_pool`.
    pub jury_pool_weight: u128,
    pub is_locked: bool,
    pub bump: u8,
}

impl Market {
    pub const LEN: usize = 8 // discriminator
        + 8 // id
        + 32 // creator
        + 4 + MAX_QUESTION_LEN
        + 4 + MAX_EVIDENCE_LEN
        + 4 + MAX_RULES_LEN
        + 4 + MAX_IMAGE_LEN
        + 8 // expiry_ts
        + 16 // virtual_liquidity
        + 16 // yes_supply
        + 16 // no_supply
        + 8 // pool_balance
        + 1 // status
        + 32 // proposer
        + 32 // disputer
        + 8 // proposer_bond
        + 8 // disputer_bond
        + 2 // proposed_outcome (Option<bool>)
        + 8 // proposal_ts
        + 8 // dispute_ts
        + 16 // proposer_votes
        + 16 // disputer_votes
        + 2 // outcome (Option<bool>)
        + 1 // paid_out
        + 8 // creator_fees_accrued
        + 8 // resolved_pool_snapshot
        + 16 // resolved_winning_supply
        + 8 // refund_pool_snapshot
        + 16 // refund_total_supply
        + 8 // jury_pool
        + 16 // jury_pool_weight
        + 1 // is_locked
        + 1; // bump

    pub fn lock(&mut self) -> Result<()> {
        require!(!self.is_locked, ErrorCode::MarketLocked);
        self.is_locked = true;
        Ok(())
    }

    pub fn unlock(&mut self) {
        self.is_locked = false;
    }

    pub fn supply_of(&self, side: Side) -> u128 {
        match side {
            Side::Yes => self.yes_supply,
            Side::No => self.no_supply,
        }
    }

    pub fn is_trading_open(&self, now: i64) -> bool {
        self.status == MarketStatus::Active && now < self.expiry_ts
    }

    pub fn is_expired_untouched(&self, now: i64) -> bool {
        self.status == MarketStatus::Active && now >= self.expiry_ts
    }

    pub fn in_creator_priority_window(&self, now: i64) -> bool {
        now < self
            .expiry_ts
            .saturating_add(CREATOR_PRIORITY_WINDOW)
    }

    pub fn dispute_window_open(&self, now: i64) -> bool {
        now.saturating_sub(self.proposal_ts) < DISPUTE_WINDOW
    }

    pub fn voting_window_open(&self, now: i64) -> bool {
        now.saturating_sub(self.dispute_ts) < VOTING_WINDOW
    }

    pub fn one_sided(&self) -> bool {
        self.yes_supply == 0 || self.no_supply == 0
    }

    pub fn no_activity(&self) -> bool {
        self.yes_supply == 0 && self.no_supply == 0
    }

    /// Display status, reifying the `Active`+expired-clock derivation into
    /// an explicit `Expired` variant for external callers.
    pub fn display_status(&self, now: i64) -> DisplayStatus {
        match self.status {
            MarketStatus::Active if now >= self.expiry_ts => DisplayStatus::Expired,
            MarketStatus::Active => DisplayStatus::Active,
            MarketStatus::Proposed => DisplayStatus::Proposed,
            MarketStatus::Disputed => DisplayStatus::Disputed,
            MarketStatus::Resolved => DisplayStatus::Resolved,
            MarketStatus::Refundable => DisplayStatus::Refundable,
        }
    }

    /// `now >= expiry_ts + EMERGENCY_REFUND_DELAY`, the floor condition for
    /// every emergency-refund path (rule 7). Callers additionally check
    /// `status != Resolved` and the proposer/paused conditions.
    pub fn past_refund_delay(&self, now: i64) -> bool {
        now >= self.expiry_ts.saturating_add(EMERGENCY_REFUND_DELAY)
    }
}
