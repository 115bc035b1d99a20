use crate::error::ErrorCode;
use crate::math::curve::{price_of, sell_gross};
use crate::state::{GlobalConfig, Ledger, Market, MarketStatus, Position, Side, Treasury};
use crate::utils::fees::split_platform_creator_fee;
use crate::utils::rent::move_lamports_with_rent_check;
use anchor_lang::prelude::*;

use super::buy::Trade;

#[derive(Accounts)]
pub struct Sell<'info> {
    #[account(mut)]
    pub seller: Signer<'info>,

    #[account(seeds = [b"config"], bump = config.bump)]
    pub config: Account<'info, GlobalConfig>,

    #[account(mut, seeds = [b"market", market.id.to_le_bytes().as_ref()], bump = market.bump)]
    pub market: Account<'info, Market>,

    #[account(
        mut,
        seeds = [b"position", market.key().as_ref(), seller.key().as_ref()],
        bump = position.bump,
    )]
    pub position: Account<'info, Position>,

    #[account(
        init_if_needed,
        payer = seller,
        space = Ledger::LEN,
        seeds = [b"ledger", seller.key().as_ref()],
        bump,
    )]
    pub ledger: Account<'info, Ledger>,

    #[account(mut, seeds = [b"treasury"], bump = treasury.bump)]
    pub treasury: Account<'info, Treasury>,

    pub system_program: Program<'info, System>,
}

fn sell_handler(ctx: Context<Sell>, side: Side, shares_in: u128, min_bnb_out: u64) -> Result<()> {
    require!(!ctx.accounts.config.paused, ErrorCode::Paused);

    let market = &mut ctx.accounts.market;
    require!(market.status == MarketStatus::Active, ErrorCode::InvalidMarketState);
    require!(ctx.accounts.position.shares_of(side) >= shares_in, ErrorCode::InsufficientShares);

    let bnb_gross = sell_gross(market.yes_supply, market.no_supply, market.virtual_liquidity, side, shares_in)?;
    require!(bnb_gross <= market.pool_balance, ErrorCode::InsufficientPoolBalance);

    let fb = split_platform_creator_fee(bnb_gross, ctx.accounts.config.platform_fee_bps, ctx.accounts.config.creator_fee_bps)?;
    require!(fb.net >= min_bnb_out, ErrorCode::SlippageExceeded);

    market.lock()?;

    match side {
        Side::Yes => market.yes_supply = market.yes_supply.saturating_sub(shares_in),
        Side::No => market.no_supply = market.no_supply.saturating_sub(shares_in),
    }
    market.pool_balance = market.pool_balance.checked_sub(bnb_gross).ok_or(error!(ErrorCode::Underflow))?;
    market.creator_fees_accrued = market
        .creator_fees_accrued
        .checked_add(fb.creator_fee)
        .ok_or(error!(ErrorCode::Overflow))?;

    move_lamports_with_rent_check(&market.to_account_info(), &ctx.accounts.ledger.to_account_info(), fb.net)?;
    move_lamports_with_rent_check(&market.to_account_info(), &ctx.accounts.treasury.to_account_info(), fb.platform_fee)?;

    market.unlock();

    ctx.accounts.treasury.credit(fb.platform_fee)?;
    if ctx.accounts.ledger.owner == Pubkey::default() {
        ctx.accounts.ledger.owner = ctx.accounts.seller.key();
        ctx.accounts.ledger.bump = ctx.bumps.ledger;
    }
    ctx.accounts.ledger.credit_withdrawable(fb.net)?;
    ctx.accounts.position.record_sell(side, shares_in)?;

    let price_after = price_of(side, market.yes_supply, market.no_supply, market.virtual_liquidity)?;

    msg!(
        "sell market={} side={:?} shares_in={} bnb_net={}",
        market.id,
        side,
        shares_in,
        fb.net
    );
    emit!(Trade {
        market_id: market.id,
        trader: ctx.accounts.seller.key(),
        side,
        is_buy: false,
        shares: shares_in,
        bnb_gross,
        bnb_net: fb.net,
        price_after,
    });
    Ok(())
}

pub fn handler_yes(ctx: Context<Sell>, shares_in: u128, min_bnb_out: u64) -> Result<()> {
    sell_handler(ctx, Side::Yes, shares_in, min_bnb_out)
}

pub fn handler_no(ctx: Context<Sell>, shares_in: u128, min_bnb_out: u64) -> Result<()> {
    sell_handler(ctx, Side::No, shares_in, min_bnb_out)
}
