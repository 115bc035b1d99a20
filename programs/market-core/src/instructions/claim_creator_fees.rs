use crate::error::ErrorCode;
use crate::state::Market;
use crate::utils::rent::move_lamports_with_rent_check;
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct ClaimCreatorFees<'info> {
    #[account(mut, address = market.creator @ ErrorCode::NotCreator)]
    pub creator: Signer<'info>,

    #[account(mut, seeds = [b"market", market.id.to_le_bytes().as_ref()], bump = market.bump)]
    pub market: Account<'info, Market>,
}

#[event]
pub struct CreatorFeesClaimed {
    pub market_id: u64,
    pub creator: Pubkey,
    pub amount: u64,
}

pub fn handler(ctx: Context<ClaimCreatorFees>) -> Result<()> {
    let market = &mut ctx.accounts.market;
    let amount = market.creator_fees_accrued;
    require!(amount > 0, ErrorCode::ZeroBalance);

    market.creator_fees_accrued = 0;
    move_lamports_with_rent_check(&market.to_account_info(), &ctx.accounts.creator.to_account_info(), amount)?;

    msg!("market {} creator fees claimed by {} amount={}", market.id, ctx.accounts.creator.key(), amount);
    emit!(CreatorFeesClaimed {
        market_id: market.id,
        creator: ctx.accounts.creator.key(),
        amount,
    });
    Ok(())
}
