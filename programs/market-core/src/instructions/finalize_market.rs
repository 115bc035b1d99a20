use crate::error::ErrorCode;
use crate::math::bonds::{proposer_reward, split_bond_pool};
use crate::state::{GlobalConfig, Ledger, Market, MarketStatus};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct FinalizeMarket<'info> {
    #[account(mut)]
    pub caller: Signer<'info>,

    #[account(seeds = [b"config"], bump = config.bump)]
    pub config: Account<'info, GlobalConfig>,

    #[account(mut, seeds = [b"market", market.id.to_le_bytes().as_ref()], bump = market.bump)]
    pub market: Account<'info, Market>,

    #[account(
        init_if_needed,
        payer = caller,
        space = Ledger::LEN,
        seeds = [b"ledger", market.proposer.as_ref()],
        bump,
    )]
    pub proposer_ledger: Account<'info, Ledger>,

    #[account(
        init_if_needed,
        payer = caller,
        space = Ledger::LEN,
        seeds = [b"ledger", market.disputer.as_ref()],
        bump,
    )]
    pub disputer_ledger: Account<'info, Ledger>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct MarketResolved {
    pub market_id: u64,
    pub outcome: bool,
    pub winning_supply: u128,
    pub pool_snapshot: u64,
}

#[event]
pub struct TieFinalized {
    pub market_id: u64,
}

#[event]
pub struct MarketResolutionFailed {
    pub market_id: u64,
}

#[event]
pub struct ProposerRewardPaid {
    pub market_id: u64,
    pub proposer: Pubkey,
    pub amount: u64,
}

#[event]
pub struct JuryFeesPoolCreated {
    pub market_id: u64,
    pub jury_pool: u64,
    pub winning_weight: u128,
}

fn ensure_ledger_owner(ledger: &mut Account<Ledger>, owner: Pubkey, bump: u8) {
    if ledger.owner == Pubkey::default() {
        ledger.owner = owner;
        ledger.bump = bump;
    }
}

pub fn handler(ctx: Context<FinalizeMarket>) -> Result<()> {
    require!(!ctx.accounts.config.paused, ErrorCode::Paused);

    let now = Clock::get()?.unix_timestamp;
    let bond_winner_share_bps = ctx.accounts.config.bond_winner_share_bps;
    let market_info = ctx.accounts.market.to_account_info();

    match ctx.accounts.market.status {
        MarketStatus::Proposed => {
            require!(!ctx.accounts.market.dispute_window_open(now), ErrorCode::DisputeWindowOpen);
            let market = &mut ctx.accounts.market;
            let outcome = market.proposed_outcome.ok_or(error!(ErrorCode::InvalidMarketState))?;
            let winning_supply = market.supply_of(outcome.into());
            let bond = market.proposer_bond;
            let market_id = market.id;
            let proposer = market.proposer;

            if winning_supply == 0 {
                // empty winning side: return the proposer's bond, clear the
                // slot, leave the market Proposed for the emergency-refund path.
                ensure_ledger_owner(&mut ctx.accounts.proposer_ledger, proposer, ctx.bumps.proposer_ledger);
                crate::utils::rent::move_lamports_with_rent_check(&market_info, &ctx.accounts.proposer_ledger.to_account_info(), bond)?;
                ctx.accounts.proposer_ledger.credit_withdrawable(bond)?;

                let market = &mut ctx.accounts.market;
                market.proposer = Pubkey::default();
                market.proposer_bond = 0;
                market.proposed_outcome = None;

                msg!("market {} resolution failed: empty winning side", market_id);
                emit!(MarketResolutionFailed { market_id });
                return Ok(());
            }

            let reward = proposer_reward(market.pool_balance)?;
            let payout = bond.checked_add(reward).ok_or(error!(ErrorCode::Overflow))?;
            ensure_ledger_owner(&mut ctx.accounts.proposer_ledger, proposer, ctx.bumps.proposer_ledger);
            crate::utils::rent::move_lamports_with_rent_check(&market_info, &ctx.accounts.proposer_ledger.to_account_info(), payout)?;
            ctx.accounts.proposer_ledger.credit_withdrawable(payout)?;

            let market = &mut ctx.accounts.market;
            market.pool_balance = market.pool_balance.checked_sub(reward).ok_or(error!(ErrorCode::Underflow))?;
            market.resolved_pool_snapshot = market.pool_balance;
            market.resolved_winning_supply = winning_supply;
            market.outcome = Some(outcome);
            market.status = MarketStatus::Resolved;
            market.paid_out = true;

            msg!("market {} resolved (undisputed) outcome={}", market_id, outcome);
            emit!(MarketResolved {
                market_id,
                outcome,
                winning_supply,
                pool_snapshot: market.resolved_pool_snapshot,
            });
            emit!(ProposerRewardPaid {
                market_id,
                proposer,
                amount: reward,
            });
        }
        MarketStatus::Disputed => {
            require!(!ctx.accounts.market.voting_window_open(now), ErrorCode::VotingWindowOpen);
            let market = &mut ctx.accounts.market;
            let market_id = market.id;

            if market.proposer_votes == market.disputer_votes {
                let (proposer, proposer_bond, disputer, disputer_bond) =
                    (market.proposer, market.proposer_bond, market.disputer, market.disputer_bond);

                ensure_ledger_owner(&mut ctx.accounts.proposer_ledger, proposer, ctx.bumps.proposer_ledger);
                crate::utils::rent::move_lamports_with_rent_check(&market_info, &ctx.accounts.proposer_ledger.to_account_info(), proposer_bond)?;
                ctx.accounts.proposer_ledger.credit_withdrawable(proposer_bond)?;

                ensure_ledger_owner(&mut ctx.accounts.disputer_ledger, disputer, ctx.bumps.disputer_ledger);
                crate::utils::rent::move_lamports_with_rent_check(&market_info, &ctx.accounts.disputer_ledger.to_account_info(), disputer_bond)?;
                ctx.accounts.disputer_ledger.credit_withdrawable(disputer_bond)?;

                let market = &mut ctx.accounts.market;
                market.proposer = Pubkey::default();
                market.disputer = Pubkey::default();
                market.proposer_bond = 0;
                market.disputer_bond = 0;
                market.status = MarketStatus::Refundable;
                market.refund_pool_snapshot = market.pool_balance;
                market.refund_total_supply = market
                    .yes_supply
                    .checked_add(market.no_supply)
                    .ok_or(error!(ErrorCode::Overflow))?;

                msg!("market {} tied, refundable", market_id);
                emit!(TieFinalized { market_id });
                return Ok(());
            }

            let proposer_wins = market.proposer_votes > market.disputer_votes;
            let proposed_outcome = market.proposed_outcome.ok_or(error!(ErrorCode::InvalidMarketState))?;
            let outcome = if proposer_wins { proposed_outcome } else { !proposed_outcome };
            let winning_supply = market.supply_of(outcome.into());

            let (winner_bond, loser_bond, winning_weight) = if proposer_wins {
                (market.proposer_bond, market.disputer_bond, market.proposer_votes)
            } else {
                (market.disputer_bond, market.proposer_bond, market.disputer_votes)
            };

            let split = split_bond_pool(loser_bond, bond_winner_share_bps)?;
            let reward = proposer_reward(market.pool_balance)?;
            let reward_if_proposer_won = if proposer_wins { reward } else { 0 };

            let winner_total = winner_bond
                .checked_add(split.winner_payout)
                .ok_or(error!(ErrorCode::Overflow))?
                .checked_add(reward_if_proposer_won)
                .ok_or(error!(ErrorCode::Overflow))?;

            let (proposer, disputer) = (market.proposer, market.disputer);
            if proposer_wins {
                ensure_ledger_owner(&mut ctx.accounts.proposer_ledger, proposer, ctx.bumps.proposer_ledger);
                crate::utils::rent::move_lamports_with_rent_check(&market_info, &ctx.accounts.proposer_ledger.to_account_info(), winner_total)?;
                ctx.accounts.proposer_ledger.credit_withdrawable(winner_total)?;
            } else {
                ensure_ledger_owner(&mut ctx.accounts.disputer_ledger, disputer, ctx.bumps.disputer_ledger);
                crate::utils::rent::move_lamports_with_rent_check(&market_info, &ctx.accounts.disputer_ledger.to_account_info(), winner_total)?;
                ctx.accounts.disputer_ledger.credit_withdrawable(winner_total)?;
            }

            let market = &mut ctx.accounts.market;
            market.jury_pool = split.jury_pool;
            market.jury_pool_weight = winning_weight;
            market.pool_balance = market.pool_balance.checked_sub(reward_if_proposer_won).ok_or(error!(ErrorCode::Underflow))?;
            market.resolved_pool_snapshot = market.pool_balance;
            market.resolved_winning_supply = winning_supply;
            market.outcome = Some(outcome);
            market.status = MarketStatus::Resolved;
            market.paid_out = true;

            msg!("market {} resolved (disputed) outcome={} proposer_wins={}", market_id, outcome, proposer_wins);
            emit!(MarketResolved {
                market_id,
                outcome,
                winning_supply,
                pool_snapshot: market.resolved_pool_snapshot,
            });
            if proposer_wins && reward > 0 {
                emit!(ProposerRewardPaid {
                    market_id,
                    proposer,
                    amount: reward,
                });
            }
            emit!(JuryFeesPoolCreated {
                market_id,
                jury_pool: split.jury_pool,
                winning_weight,
            });
        }
        _ => return Err(error!(ErrorCode::InvalidMarketState)),
    }

    Ok(())
}
