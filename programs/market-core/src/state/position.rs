use crate::math::fixed_point::mul_div_u128;
use crate::math::SHARE_SCALE;
use crate::state::Side;
use anchor_lang::prelude::*;

#[account]
pub struct Position {
    pub market: Pubkey,
    pub owner: Pubkey,
    pub yes_shares: u128,
    pub no_shares: u128,
    pub total_invested: u64,
    pub avg_yes_price: u64,
    pub avg_no_price: u64,
    pub claimed: bool,
    pub refunded: bool,
    pub voted: bool,
    pub vote_choice: Option<bool>,
    pub jury_claimed: bool,
    pub bump: u8,
}

impl Position {
    pub const LEN: usize = 8 // discriminator
        + 32 // market
        + 32 // owner
        + 16 // yes_shares
        + 16 // no_shares
        + 8 // total_invested
        + 8 // avg_yes_price
        + 8 // avg_no_price
        + 1 // claimed
        + 1 // refunded
        + 1 // voted
        + 2 // vote_choice (Option<bool>)
        + 1 // jury_claimed
        + 1; // bump

    pub fn shares_of(&self, side: Side) -> u128 {
        match side {
            Side::Yes => self.yes_shares,
            Side::No => self.no_shares,
        }
    }

    pub fn avg_price_of(&self, side: Side) -> u64 {
        match side {
            Side::Yes => self.avg_yes_price,
            Side::No => self.avg_no_price,
        }
    }

    pub fn has_shares(&self) -> bool {
        self.yes_shares > 0 || self.no_shares > 0
    }

    pub fn total_shares(&self) -> u128 {
        self.yes_shares.saturating_add(self.no_shares)
    }

    /// Voting weight is the position's full share count, independent of
    /// which side it's on — weight, not direction, is what counts here.
    pub fn vote_weight(&self) -> u128 {
        self.total_shares()
    }

    pub fn winning_shares(&self, outcome: bool) -> u128 {
        self.shares_of(Side::from(outcome))
    }

    /// Rolls `net_in` lamports buying `shares_out` new shares into the
    /// running weighted-average cost basis for `side`, and grows
    /// `total_invested` by the gross amount paid.
    pub fn record_buy(&mut self, side: Side, gross_in: u64, net_in: u64, shares_out: u128) -> Result<()> {
        let (old_shares, old_avg) = match side {
            Side::Yes => (self.yes_shares, self.avg_yes_price),
            Side::No => (self.no_shares, self.avg_no_price),
        };

        let new_total_shares = old_shares
            .checked_add(shares_out)
            .ok_or(error!(crate::error::ErrorCode::Overflow))?;

        let new_avg = if new_total_shares == 0 {
            0
        } else {
            let old_cost = (old_avg as u128)
                .checked_mul(old_shares)
                .ok_or(error!(crate::error::ErrorCode::Overflow))?;
            let new_cost = (net_in as u128)
                .checked_mul(SHARE_SCALE)
                .ok_or(error!(crate::error::ErrorCode::Overflow))?;
            let total_cost = old_cost
                .checked_add(new_cost)
                .ok_or(error!(crate::error::ErrorCode::Overflow))?;
            let avg = mul_div_u128(total_cost, 1, new_total_shares)?;
            require!(avg <= u64::MAX as u128, crate::error::ErrorCode::Overflow);
            avg as u64
        };

        match side {
            Side::Yes => {
                self.yes_shares = new_total_shares;
                self.avg_yes_price = new_avg;
            }
            Side::No => {
                self.no_shares = new_total_shares;
                self.avg_no_price = new_avg;
            }
        }

        self.total_invested = self
            .total_invested
            .checked_add(gross_in)
            .ok_or(error!(crate::error::ErrorCode::Overflow))?;
        Ok(())
    }

    /// Reduces shares on `side` by `shares_sold` and shrinks
    /// `total_invested` by the same proportion of cost basis that was sold
    /// off, keeping the remaining average price unchanged.
    pub fn record_sell(&mut self, side: Side, shares_sold: u128) -> Result<()> {
        let old_shares = self.shares_of(side);
        require!(shares_sold <= old_shares, crate::error::ErrorCode::InsufficientShares);

        let total_before = self.total_shares();
        let sold_fraction_invested = if total_before == 0 {
            0
        } else {
            mul_div_u128(self.total_invested as u128, shares_sold, total_before)? as u64
        };

        match side {
            Side::Yes => self.yes_shares = old_shares.saturating_sub(shares_sold),
            Side::No => self.no_shares = old_shares.saturating_sub(shares_sold),
        }

        self.total_invested = self.total_invested.saturating_sub(sold_fraction_invested);
        Ok(())
    }

    pub fn net_profit(&self, payout: u64) -> i128 {
        payout as i128 - self.total_invested as i128
    }
}
