use crate::error::ErrorCode;
use crate::math::curve::quote_buy;
use crate::state::{GlobalConfig, Market, MarketStatus, Position, Side, Treasury};
use crate::utils::rent::move_lamports_with_rent_check;
use anchor_lang::prelude::*;
use anchor_lang::solana_program::program::invoke;
use anchor_lang::solana_program::system_instruction;

#[derive(Accounts)]
pub struct Buy<'info> {
    #[account(mut)]
    pub buyer: Signer<'info>,

    #[account(seeds = [b"config"], bump = config.bump)]
    pub config: Account<'info, GlobalConfig>,

    #[account(mut, seeds = [b"market", market.id.to_le_bytes().as_ref()], bump = market.bump)]
    pub market: Account<'info, Market>,

    #[account(
        init_if_needed,
        payer = buyer,
        space = Position::LEN,
        seeds = [b"position", market.key().as_ref(), buyer.key().as_ref()],
        bump,
    )]
    pub position: Account<'info, Position>,

    #[account(mut, seeds = [b"treasury"], bump = treasury.bump)]
    pub treasury: Account<'info, Treasury>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct Trade {
    pub market_id: u64,
    pub trader: Pubkey,
    pub side: Side,
    pub is_buy: bool,
    pub shares: u128,
    pub bnb_gross: u64,
    pub bnb_net: u64,
    pub price_after: u64,
}

fn buy_handler(ctx: Context<Buy>, side: Side, bnb_in: u64, min_shares_out: u128) -> Result<()> {
    let config = &ctx.accounts.config;
    require!(!config.paused, ErrorCode::Paused);
    require!(bnb_in >= config.min_bet, ErrorCode::BelowMinBet);

    let now = Clock::get()?.unix_timestamp;
    let market = &mut ctx.accounts.market;
    require!(market.is_trading_open(now), ErrorCode::Expired);
    require!(market.status == MarketStatus::Active, ErrorCode::InvalidMarketState);

    let quote = quote_buy(
        market.yes_supply,
        market.no_supply,
        market.virtual_liquidity,
        side,
        bnb_in,
        config.platform_fee_bps,
        config.creator_fee_bps,
    )?;
    require!(quote.shares_out >= min_shares_out, ErrorCode::SlippageExceeded);

    // buyer -> market PDA, the full gross amount
    invoke(
        &system_instruction::transfer(ctx.accounts.buyer.key, &market.key(), bnb_in),
        &[
            ctx.accounts.buyer.to_account_info(),
            market.to_account_info(),
            ctx.accounts.system_program.to_account_info(),
        ],
    )
    .map_err(|_| error!(ErrorCode::TransferFailed))?;

    // platform fee moves out of the market PDA into the treasury accrual
    move_lamports_with_rent_check(
        &market.to_account_info(),
        &ctx.accounts.treasury.to_account_info(),
        quote.platform_fee,
    )?;
    ctx.accounts.treasury.credit(quote.platform_fee)?;

    match side {
        Side::Yes => market.yes_supply = market.yes_supply.checked_add(quote.shares_out).ok_or(error!(ErrorCode::Overflow))?,
        Side::No => market.no_supply = market.no_supply.checked_add(quote.shares_out).ok_or(error!(ErrorCode::Overflow))?,
    }
    market.pool_balance = market.pool_balance.checked_add(quote.net_in).ok_or(error!(ErrorCode::Overflow))?;
    market.creator_fees_accrued = market
        .creator_fees_accrued
        .checked_add(quote.creator_fee)
        .ok_or(error!(ErrorCode::Overflow))?;

    let price_after = crate::math::curve::price_of(side, market.yes_supply, market.no_supply, market.virtual_liquidity)?;

    ctx.accounts
        .position
        .record_buy(side, bnb_in, quote.net_in, quote.shares_out)?;
    if ctx.accounts.position.market == Pubkey::default() {
        ctx.accounts.position.market = market.key();
        ctx.accounts.position.owner = ctx.accounts.buyer.key();
        ctx.accounts.position.bump = ctx.bumps.position;
    }

    msg!(
        "buy market={} side={:?} bnb_in={} shares_out={}",
        market.id,
        side,
        bnb_in,
        quote.shares_out
    );
    emit!(Trade {
        market_id: market.id,
        trader: ctx.accounts.buyer.key(),
        side,
        is_buy: true,
        shares: quote.shares_out,
        bnb_gross: bnb_in,
        bnb_net: quote.net_in,
        price_after,
    });
    Ok(())
}

pub fn handler_yes(ctx: Context<Buy>, bnb_in: u64, min_shares_out: u128) -> Result<()> {
    buy_handler(ctx, Side::Yes, bnb_in, min_shares_out)
}

pub fn handler_no(ctx: Context<Buy>, bnb_in: u64, min_shares_out: u128) -> Result<()> {
    buy_handler(ctx, Side::No, bnb_in, min_shares_out)
}
