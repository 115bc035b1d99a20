use crate::error::ErrorCode;
use anchor_lang::prelude::*;

/// Singleton PDA (seeds `["counter"]`) allocating strictly-monotone market
/// IDs. Replaces the teacher's client-supplied `[u8; 32]` market UUID,
/// which cannot guarantee the monotonicity this engine's market store
/// invariant requires.
#[account]
pub struct MarketCounter {
    pub next_id: u64,
    pub bump: u8,
}

impl MarketCounter {
    pub const LEN: usize = 8 + 8 + 1;

    pub fn allocate(&mut self) -> Result<u64> {
        let id = self.next_id;
        self.next_id = self.next_id.checked_add(1).ok_or(error!(ErrorCode::Overflow))?;
        Ok(id)
    }
}
