use crate::error::ErrorCode;
use anchor_lang::prelude::*;
use anchor_lang::solana_program::program::invoke;
use anchor_lang::solana_program::system_instruction;

/// Rent-exempt minimum for an account of `data_len` bytes, as of the
/// current `Rent` sysvar.
pub fn rent_exempt_minimum(data_len: usize) -> Result<u64> {
    let rent = Rent::get()?;
    Ok(rent.minimum_balance(data_len))
}

/// Largest amount that can leave `from` while keeping it at or above its
/// rent-exempt minimum.
pub fn max_transferable_amount(from_lamports: u64, from_data_len: usize) -> Result<u64> {
    let minimum = rent_exempt_minimum(from_data_len)?;
    Ok(from_lamports.saturating_sub(minimum))
}

/// Transfers `amount` lamports from `from` to `to` via the system program,
/// after asserting `from` stays rent-exempt. Used for every outgoing
/// payment from a PDA this program owns, generalizing the teacher's
/// market-account-specific `transfer_with_rent_check` to any paying PDA.
pub fn transfer_with_rent_check<'info>(
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    amount: u64,
    system_program: &AccountInfo<'info>,
) -> Result<()> {
    let max = max_transferable_amount(from.lamports(), from.data_len())?;
    require!(amount <= max, ErrorCode::WouldBreakRentExemption);

    invoke(
        &system_instruction::transfer(from.key, to.key, amount),
        &[from.clone(), to.clone(), system_program.clone()],
    )
    .map_err(|_| error!(ErrorCode::TransferFailed))
}

/// Direct lamport move between two accounts this program already owns
/// (both are PDAs, so no system-program CPI signature is needed) — used
/// when paying out of a `Market`/`Ledger`/`Treasury` PDA that is not a
/// system-owned account and therefore can't be the `from` of a
/// `system_instruction::transfer`.
pub fn move_lamports_with_rent_check<'info>(
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    let max = max_transferable_amount(from.lamports(), from.data_len())?;
    require!(amount <= max, ErrorCode::WouldBreakRentExemption);

    **from.try_borrow_mut_lamports()? = from
        .lamports()
        .checked_sub(amount)
        .ok_or(error!(ErrorCode::Underflow))?;
    **to.try_borrow_mut_lamports()? = to
        .lamports()
        .checked_add(amount)
        .ok_or(error!(ErrorCode::Overflow))?;
    Ok(())
}
