use crate::error::ErrorCode;
use crate::instructions::create_market::{virtual_liquidity_for, HeatLevel, MarketCreated};
use crate::instructions::buy::Trade;
use crate::math::curve::{price_of, quote_buy};
use crate::state::market::{MAX_EVIDENCE_LEN, MAX_IMAGE_LEN, MAX_QUESTION_LEN, MAX_RULES_LEN};
use crate::state::{GlobalConfig, Market, MarketCounter, MarketStatus, Position, Side, Treasury};
use crate::utils::rent::move_lamports_with_rent_check;
use anchor_lang::prelude::*;
use anchor_lang::solana_program::program::invoke;
use anchor_lang::solana_program::system_instruction;

/// Atomic create + first-trade variant: nobody can front-run the opening
/// price by sniping the first `buy` between `create_market` landing and the
/// creator's own opening trade — both happen in one transaction.
#[derive(Accounts)]
pub struct CreateMarketAndBuy<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(seeds = [b"config"], bump = config.bump)]
    pub config: Account<'info, GlobalConfig>,

    #[account(mut, seeds = [b"counter"], bump = counter.bump)]
    pub counter: Account<'info, MarketCounter>,

    #[account(
        init,
        payer = creator,
        space = Market::LEN,
        seeds = [b"market", counter.next_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub market: Account<'info, Market>,

    #[account(
        init,
        payer = creator,
        space = Position::LEN,
        seeds = [b"position", market.key().as_ref(), creator.key().as_ref()],
        bump,
    )]
    pub position: Account<'info, Position>,

    #[account(mut, seeds = [b"treasury"], bump = treasury.bump)]
    pub treasury: Account<'info, Treasury>,

    pub system_program: Program<'info, System>,
}

#[allow(clippy::too_many_arguments)]
pub fn handler(
    ctx: Context<CreateMarketAndBuy>,
    question: String,
    evidence_url: String,
    resolution_rules: String,
    image_url: String,
    expiry_ts: i64,
    heat_level: HeatLevel,
    side: Side,
    bnb_in: u64,
    min_shares_out: u128,
) -> Result<()> {
    let config = &ctx.accounts.config;
    require!(!config.paused, ErrorCode::Paused);
    require!(bnb_in >= config.min_bet, ErrorCode::BelowMinBet);

    let now = Clock::get()?.unix_timestamp;
    require!(expiry_ts > now, ErrorCode::InvalidExpiry);
    require!(question.len() <= MAX_QUESTION_LEN, ErrorCode::StringTooLong);
    require!(evidence_url.len() <= MAX_EVIDENCE_LEN, ErrorCode::StringTooLong);
    require!(resolution_rules.len() <= MAX_RULES_LEN, ErrorCode::StringTooLong);
    require!(image_url.len() <= MAX_IMAGE_LEN, ErrorCode::StringTooLong);

    let market_id = ctx.accounts.counter.allocate()?;
    let vl = virtual_liquidity_for(heat_level);

    let market = &mut ctx.accounts.market;
    market.id = market_id;
    market.creator = ctx.accounts.creator.key();
    market.question = question;
    market.evidence_url = evidence_url;
    market.resolution_rules = resolution_rules;
    market.image_url = image_url;
    market.expiry_ts = expiry_ts;
    market.virtual_liquidity = vl;
    market.yes_supply = 0;
    market.no_supply = 0;
    market.pool_balance = 0;
    market.status = MarketStatus::Active;
    market.proposer = Pubkey::default();
    market.disputer = Pubkey::default();
    market.proposer_bond = 0;
    market.disputer_bond = 0;
    market.proposed_outcome = None;
    market.proposal_ts = 0;
    market.dispute_ts = 0;
    market.proposer_votes = 0;
    market.disputer_votes = 0;
    market.outcome = None;
    market.paid_out = false;
    market.creator_fees_accrued = 0;
    market.resolved_pool_snapshot = 0;
    market.resolved_winning_supply = 0;
    market.refund_pool_snapshot = 0;
    market.refund_total_supply = 0;
    market.jury_pool = 0;
    market.jury_pool_weight = 0;
    market.is_locked = false;
    market.bump = ctx.bumps.market;

    msg!("market {} created by {}, expiry_ts={}", market_id, market.creator, expiry_ts);
    emit!(MarketCreated {
        market_id,
        creator: market.creator,
        expiry_ts,
        virtual_liquidity: vl,
    });

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

    invoke(
        &system_instruction::transfer(ctx.accounts.creator.key, &market.key(), bnb_in),
        &[
            ctx.accounts.creator.to_account_info(),
            market.to_account_info(),
            ctx.accounts.system_program.to_account_info(),
        ],
    )
    .map_err(|_| error!(ErrorCode::TransferFailed))?;

    move_lamports_with_rent_check(&market.to_account_info(), &ctx.accounts.treasury.to_account_info(), quote.platform_fee)?;
    ctx.accounts.treasury.credit(quote.platform_fee)?;

    match side {
        Side::Yes => market.yes_supply = quote.shares_out,
        Side::No => market.no_supply = quote.shares_out,
    }
    market.pool_balance = quote.net_in;
    market.creator_fees_accrued = quote.creator_fee;

    let price_after = price_of(side, market.yes_supply, market.no_supply, market.virtual_liquidity)?;

    ctx.accounts.position.market = market.key();
    ctx.accounts.position.owner = ctx.accounts.creator.key();
    ctx.accounts.position.bump = ctx.bumps.position;
    ctx.accounts.position.record_buy(side, bnb_in, quote.net_in, quote.shares_out)?;

    msg!("buy market={} side={:?} bnb_in={} shares_out={}", market.id, side, bnb_in, quote.shares_out);
    emit!(Trade {
        market_id: market.id,
        trader: ctx.accounts.creator.key(),
        side,
        is_buy: true,
        shares: quote.shares_out,
        bnb_gross: bnb_in,
        bnb_net: quote.net_in,
        price_after,
    });
    Ok(())
}
