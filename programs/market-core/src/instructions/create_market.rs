use crate::error::ErrorCode;
use crate::math::SHARE_SCALE;
use crate::state::market::{MAX_EVIDENCE_LEN, MAX_IMAGE_LEN, MAX_QUESTION_LEN, MAX_RULES_LEN};
use crate::state::{GlobalConfig, Market, MarketCounter, MarketStatus};
use anchor_lang::prelude::*;

/// Named virtual-liquidity presets. Larger VL dampens price movement per
/// unit of trade volume — a "colder" market.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeatLevel {
    Blazing,
    Hot,
    Warm,
    Cold,
}

pub fn virtual_liquidity_for(heat: HeatLevel) -> u128 {
    match heat {
        HeatLevel::Blazing => 30 * SHARE_SCALE,
        HeatLevel::Hot => 100 * SHARE_SCALE,
        HeatLevel::Warm => 300 * SHARE_SCALE,
        HeatLevel::Cold => 1_000 * SHARE_SCALE,
    }
}

#[derive(Accounts)]
pub struct CreateMarket<'info> {
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

    pub system_program: Program<'info, System>,
}

#[event]
pub struct MarketCreated {
    pub market_id: u64,
    pub creator: Pubkey,
    pub expiry_ts: i64,
    pub virtual_liquidity: u128,
}

pub fn handler(
    ctx: Context<CreateMarket>,
    question: String,
    evidence_url: String,
    resolution_rules: String,
    image_url: String,
    expiry_ts: i64,
    heat_level: HeatLevel,
) -> Result<()> {
    require!(!ctx.accounts.config.paused, ErrorCode::Paused);

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
    Ok(())
}
