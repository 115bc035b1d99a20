use crate::error::ErrorCode;
use anchor_lang::prelude::*;

/// Per-user pull-pattern ledger. Every credit is a separate balance so a
/// `withdraw` call can zero-then-transfer one purse without touching the
/// others, following the pull-pattern discipline the teacher applies
/// around `withdraw_liquidity`.
#[account]
pub struct Ledger {
    pub owner: Pubkey,
    pub withdrawable: u64,
    pub jury_fees: u64,
    pub bump: u8,
}

impl Ledger {
    pub const LEN: usize = 8 // discriminator
        + 32 // owner
        + 8 // withdrawable
        + 8 // jury_fees
        + 1; // bump

    pub fn credit_withdrawable(&mut self, amount: u64) -> Result<()> {
        self.withdrawable = self
            .withdrawable
            .checked_add(amount)
            .ok_or(error!(ErrorCode::Overflow))?;
        Ok(())
    }

    pub fn credit_jury_fees(&mut self, amount: u64) -> Result<()> {
        self.jury_fees = self
            .jury_fees
            .checked_add(amount)
            .ok_or(error!(ErrorCode::Overflow))?;
        Ok(())
    }

    /// Checks-Effects-Interactions step 1+2: read the balance, then zero it.
    /// The caller performs the transfer (step 3) after this returns.
    pub fn take_withdrawable(&mut self) -> Result<u64> {
        let amount = self.withdrawable;
        require!(amount > 0, ErrorCode::ZeroBalance);
        self.withdrawable = 0;
        Ok(amount)
    }

    pub fn take_jury_fees(&mut self) -> Result<u64> {
        let amount = self.jury_fees;
        require!(amount > 0, ErrorCode::ZeroBalance);
        self.jury_fees = 0;
        Ok(amount)
    }
}

/// Singleton PDA accruing platform + resolution fees until governance
/// sweeps them. Separate from per-user `Ledger`s since it has one owner
/// (the protocol) rather than many.
#[account]
pub struct Treasury {
    pub authority: Pubkey,
    pub accrued: u64,
    pub bump: u8,
}

impl Treasury {
    pub const LEN: usize = 8 + 32 + 8 + 1;

    pub fn credit(&mut self, amount: u64) -> Result<()> {
        self.accrued = self
            .accrued
            .checked_add(amount)
            .ok_or(error!(ErrorCode::Overflow))?;
        Ok(())
    }

    pub fn take(&mut self) -> Result<u64> {
        let amount = self.accrued;
        require!(amount > 0, ErrorCode::ZeroBalance);
        self.accrued = 0;
        Ok(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ledger_credit_and_take_is_idempotent() {
        let mut l = Ledger {
            owner: Pubkey::default(),
            withdrawable: 0,
            jury_fees: 0,
            bump: 255,
        };
        l.credit_withdrawable(100).unwrap();
        l.credit_withdrawable(50).unwrap();
        assert_eq!(l.take_withdrawable().unwrap(), 150);
        // second take on the same balance sees zero
        assert!(l.take_withdrawable().is_err());
    }

    #[test]
    fn test_ledger_jury_fees_independent_of_withdrawable() {
        let mut l = Ledger {
            owner: Pubkey::default(),
            withdrawable: 0,
            jury_fees: 0,
            bump: 255,
        };
        l.credit_withdrawable(10).unwrap();
        l.credit_jury_fees(20).unwrap();
        assert_eq!(l.take_jury_fees().unwrap(), 20);
        assert_eq!(l.take_withdrawable().unwrap(), 10);
    }

    #[test]
    fn test_treasury_credit_and_take() {
        let mut t = Treasury {
            authority: Pubkey::default(),
            accrued: 0,
            bump: 255,
        };
        t.credit(500).unwrap();
        assert_eq!(t.take().unwrap(), 500);
        assert!(t.take().is_err());
    }
}
