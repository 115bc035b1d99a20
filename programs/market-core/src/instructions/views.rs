use crate::math::bonds::required_bond as required_bond_amount;
use crate::math::curve::{max_sellable as max_sellable_curve, quote_buy as quote_buy_curve, sell_gross, BuyQuote};
use crate::math::EMERGENCY_REFUND_DELAY;
use crate::state::{GlobalConfig, Market, MarketStatus, Side};
use anchor_lang::prelude::*;

/// Read-only counterpart to the trading/resolution handlers: no account here
/// is ever `mut`, nothing is written, and every return value is intended to
/// be read back from client-side simulation rather than a committed tx.

#[derive(Accounts)]
pub struct QuoteBuy<'info> {
    #[account(seeds = [b"config"], bump = config.bump)]
    pub config: Account<'info, GlobalConfig>,

    #[account(seeds = [b"market", market.id.to_le_bytes().as_ref()], bump = market.bump)]
    pub market: Account<'info, Market>,
}

pub fn quote_buy(ctx: Context<QuoteBuy>, side: Side, bnb_in: u64) -> Result<BuyQuote> {
    let market = &ctx.accounts.market;
    let config = &ctx.accounts.config;
    quote_buy_curve(
        market.yes_supply,
        market.no_supply,
        market.virtual_liquidity,
        side,
        bnb_in,
        config.platform_fee_bps,
        crate::math::CREATOR_FEE_BPS,
    )
}

#[derive(Accounts)]
pub struct QuoteSell<'info> {
    #[account(seeds = [b"config"], bump = config.bump)]
    pub config: Account<'info, GlobalConfig>,

    #[account(seeds = [b"market", market.id.to_le_bytes().as_ref()], bump = market.bump)]
    pub market: Account<'info, Market>,
}

pub fn quote_sell(ctx: Context<QuoteSell>, side: Side, shares: u128) -> Result<u64> {
    let market = &ctx.accounts.market;
    sell_gross(market.yes_supply, market.no_supply, market.virtual_liquidity, side, shares)
}

#[derive(Accounts)]
pub struct MaxSellable<'info> {
    #[account(seeds = [b"market", market.id.to_le_bytes().as_ref()], bump = market.bump)]
    pub market: Account<'info, Market>,
}

pub fn max_sellable(ctx: Context<MaxSellable>, side: Side, user_shares: u128) -> Result<(u128, u64)> {
    let market = &ctx.accounts.market;
    max_sellable_curve(
        market.yes_supply,
        market.no_supply,
        market.virtual_liquidity,
        side,
        user_shares,
        market.pool_balance,
    )
}

#[derive(Accounts)]
pub struct RequiredBond<'info> {
    #[account(seeds = [b"config"], bump = config.bump)]
    pub config: Account<'info, GlobalConfig>,

    #[account(seeds = [b"market", market.id.to_le_bytes().as_ref()], bump = market.bump)]
    pub market: Account<'info, Market>,
}

pub fn required_bond(ctx: Context<RequiredBond>) -> Result<u64> {
    let config = &ctx.accounts.config;
    let market = &ctx.accounts.market;
    required_bond_amount(market.pool_balance, config.bond_floor, config.dynamic_bond_bps)
}

#[derive(Accounts)]
pub struct MarketStatusView<'info> {
    #[account(seeds = [b"market", market.id.to_le_bytes().as_ref()], bump = market.bump)]
    pub market: Account<'info, Market>,
}

pub fn market_status(ctx: Context<MarketStatusView>) -> Result<crate::state::DisplayStatus> {
    let now = Clock::get()?.unix_timestamp;
    Ok(ctx.accounts.market.display_status(now))
}

#[derive(Accounts)]
pub struct CanEmergencyRefund<'info> {
    #[account(seeds = [b"market", market.id.to_le_bytes().as_ref()], bump = market.bump)]
    pub market: Account<'info, Market>,
}

/// Returns `(eligible, seconds_until)`: when not yet eligible, `seconds_until`
/// is the remaining wait on the refund delay (0 if blocked on something other
/// than elapsed time, e.g. `Resolved`, or a proposer bond still posted).
pub fn can_emergency_refund(ctx: Context<CanEmergencyRefund>) -> Result<(bool, i64)> {
    let market = &ctx.accounts.market;
    let now = Clock::get()?.unix_timestamp;

    if market.status == MarketStatus::Refundable {
        return Ok((true, 0));
    }
    if market.status == MarketStatus::Resolved {
        return Ok((false, 0));
    }

    let deadline = match market.status {
        MarketStatus::Proposed => market.proposal_ts.checked_add(EMERGENCY_REFUND_DELAY),
        MarketStatus::Disputed => market.dispute_ts.checked_add(EMERGENCY_REFUND_DELAY),
        MarketStatus::Active => {
            if market.is_expired_untouched(now) {
                market.expiry_ts.checked_add(EMERGENCY_REFUND_DELAY)
            } else {
                None
            }
        }
        MarketStatus::Refundable | MarketStatus::Resolved => None,
    }
    .unwrap_or(i64::MAX);

    let seconds_until = deadline.saturating_sub(now).max(0);
    let delay_elapsed = market.past_refund_delay(now);
    let eligible = delay_elapsed && market.proposer == Pubkey::default();
    Ok((eligible, if delay_elapsed { 0 } else { seconds_until }))
}
