use crate::error::ErrorCode;
use crate::state::Ledger;
use crate::utils::rent::move_lamports_with_rent_check;
use anchor_lang::prelude::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LedgerSelector {
    Withdrawable,
    JuryFees,
}

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(mut, address = ledger.owner @ ErrorCode::NotCreator)]
    pub owner: Signer<'info>,

    #[account(mut, seeds = [b"ledger", owner.key().as_ref()], bump = ledger.bump)]
    pub ledger: Account<'info, Ledger>,
}

#[event]
pub struct WithdrawalClaimed {
    pub owner: Pubkey,
    pub selector: LedgerSelector,
    pub amount: u64,
}

/// Single pull-pattern exit point: zero the selected balance, then
/// transfer. A second call on an already-zeroed balance is a no-op error,
/// never a double payment.
pub fn handler(ctx: Context<Withdraw>, selector: LedgerSelector) -> Result<()> {
    let amount = match selector {
        LedgerSelector::Withdrawable => ctx.accounts.ledger.take_withdrawable()?,
        LedgerSelector::JuryFees => ctx.accounts.ledger.take_jury_fees()?,
    };

    // the ledger PDA is program-owned, not system-owned, so a lamport move
    // out of it is a direct balance adjustment, not a system-program CPI.
    move_lamports_with_rent_check(
        &ctx.accounts.ledger.to_account_info(),
        &ctx.accounts.owner.to_account_info(),
        amount,
    )?;

    msg!("withdraw owner={} selector={:?} amount={}", ctx.accounts.owner.key(), selector, amount);
    emit!(WithdrawalClaimed {
        owner: ctx.accounts.owner.key(),
        selector,
        amount,
    });
    Ok(())
}
