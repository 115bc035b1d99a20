use anchor_lang::prelude::*;

declare_id!("7h3gXfBfYFueFVLYyfL5Qo1QGsf4GQUfW96FKVgnUsJS");

// Module declarations
pub mod error;
pub mod instructions;
pub mod math;
pub mod state;
pub mod utils;

// Re-exports for convenience
pub use error::*;
pub use instructions::*;
pub use math::*;
pub use state::*;

#[program]
pub mod market_core {
    use super::*;

    // ============================================================
    // Setup
    // ============================================================

    /// One-time creation of `GlobalConfig`, `MarketCounter`, and `Treasury`.
    pub fn initialize_global_config(
        ctx: Context<InitializeGlobalConfig>,
        governance_authority: Pubkey,
        treasury_authority: Pubkey,
    ) -> Result<()> {
        initialize::handler(ctx, governance_authority, treasury_authority)
    }

    // ============================================================
    // Market creation & trading
    // ============================================================

    pub fn create_market(
        ctx: Context<CreateMarket>,
        question: String,
        evidence_url: String,
        resolution_rules: String,
        image_url: String,
        expiry_ts: i64,
        heat_level: create_market::HeatLevel,
    ) -> Result<()> {
        create_market::handler(ctx, question, evidence_url, resolution_rules, image_url, expiry_ts, heat_level)
    }

    /// Atomic create + opening trade; prevents front-running the first buy.
    #[allow(clippy::too_many_arguments)]
    pub fn create_market_and_buy(
        ctx: Context<CreateMarketAndBuy>,
        question: String,
        evidence_url: String,
        resolution_rules: String,
        image_url: String,
        expiry_ts: i64,
        heat_level: create_market::HeatLevel,
        side: Side,
        bnb_in: u64,
        min_shares_out: u128,
    ) -> Result<()> {
        create_market_and_buy::handler(
            ctx,
            question,
            evidence_url,
            resolution_rules,
            image_url,
            expiry_ts,
            heat_level,
            side,
            bnb_in,
            min_shares_out,
        )
    }

    pub fn buy_yes(ctx: Context<Buy>, bnb_in: u64, min_shares_out: u128) -> Result<()> {
        buy::handler_yes(ctx, bnb_in, min_shares_out)
    }

    pub fn buy_no(ctx: Context<Buy>, bnb_in: u64, min_shares_out: u128) -> Result<()> {
        buy::handler_no(ctx, bnb_in, min_shares_out)
    }

    pub fn sell_yes(ctx: Context<Sell>, shares_in: u128, min_bnb_out: u64) -> Result<()> {
        sell::handler_yes(ctx, shares_in, min_bnb_out)
    }

    pub fn sell_no(ctx: Context<Sell>, shares_in: u128, min_bnb_out: u64) -> Result<()> {
        sell::handler_no(ctx, shares_in, min_bnb_out)
    }

    // ============================================================
    // Street-Consensus resolution
    // ============================================================

    pub fn propose_outcome(ctx: Context<ProposeOutcome>, outcome: bool, value_sent: u64) -> Result<()> {
        propose_outcome::handler(ctx, outcome, value_sent)
    }

    pub fn dispute(ctx: Context<Dispute>) -> Result<()> {
        dispute::handler(ctx)
    }

    pub fn vote(ctx: Context<Vote>, outcome: bool) -> Result<()> {
        vote::handler(ctx, outcome)
    }

    pub fn finalize_market(ctx: Context<FinalizeMarket>) -> Result<()> {
        finalize_market::handler(ctx)
    }

    // ============================================================
    // Claims & payouts
    // ============================================================

    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        claim::handler(ctx)
    }

    pub fn emergency_refund(ctx: Context<EmergencyRefund>) -> Result<()> {
        emergency_refund::handler(ctx)
    }

    pub fn claim_creator_fees(ctx: Context<ClaimCreatorFees>) -> Result<()> {
        claim_creator_fees::handler(ctx)
    }

    pub fn claim_jury_fees(ctx: Context<ClaimJuryFees>) -> Result<()> {
        claim_jury_fees::handler(ctx)
    }

    pub fn withdraw(ctx: Context<Withdraw>, selector: withdraw::LedgerSelector) -> Result<()> {
        withdraw::handler(ctx, selector)
    }

    // ============================================================
    // Governance-gated parameter & pause control
    // ============================================================

    pub fn apply_config_update(ctx: Context<ApplyConfigUpdate>, update: governance_gated::ConfigUpdate) -> Result<()> {
        governance_gated::apply_config_update(ctx, update)
    }

    pub fn set_paused(ctx: Context<SetPaused>, paused: bool) -> Result<()> {
        governance_gated::set_paused(ctx, paused)
    }

    pub fn sweep_treasury(ctx: Context<SweepTreasury>) -> Result<()> {
        governance_gated::sweep_treasury(ctx)
    }

    // ============================================================
    // Views (read-only, client-side simulation)
    // ============================================================

    pub fn view_quote_buy(ctx: Context<QuoteBuy>, side: Side, bnb_in: u64) -> Result<math::curve::BuyQuote> {
        views::quote_buy(ctx, side, bnb_in)
    }

    pub fn view_quote_sell(ctx: Context<QuoteSell>, side: Side, shares: u128) -> Result<u64> {
        views::quote_sell(ctx, side, shares)
    }

    pub fn view_max_sellable(ctx: Context<MaxSellable>, side: Side, user_shares: u128) -> Result<(u128, u64)> {
        views::max_sellable(ctx, side, user_shares)
    }

    pub fn view_required_bond(ctx: Context<RequiredBond>) -> Result<u64> {
        views::required_bond(ctx)
    }

    pub fn view_market_status(ctx: Context<MarketStatusView>) -> Result<state::market::DisplayStatus> {
        views::market_status(ctx)
    }

    pub fn view_can_emergency_refund(ctx: Context<CanEmergencyRefund>) -> Result<(bool, i64)> {
        views::can_emergency_refund(ctx)
    }
}
