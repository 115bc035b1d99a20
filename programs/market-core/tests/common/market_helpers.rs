// ============================================================
// Instruction builders: one function per `market-core` entry point,
// assembled with Anchor's `InstructionData`/`ToAccountMetas` so these
// tests exercise the real account-validation path, not a mock.
// ============================================================

use super::account_helpers::*;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::solana_program::system_program;
use anchor_lang::{InstructionData, ToAccountMetas};
use market_core::{HeatLevel, LedgerSelector, Side};
use solana_sdk::pubkey::Pubkey;

pub fn initialize_global_config_ix(
    program_id: Pubkey,
    payer: Pubkey,
    governance_authority: Pubkey,
    treasury_authority: Pubkey,
) -> Instruction {
    let (config, _) = config_pda(&program_id);
    let (counter, _) = counter_pda(&program_id);
    let (treasury, _) = treasury_pda(&program_id);

    Instruction {
        program_id,
        accounts: market_core::accounts::InitializeGlobalConfig {
            payer,
            config,
            counter,
            treasury,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: market_core::instruction::InitializeGlobalConfig {
            governance_authority,
            treasury_authority,
        }
        .data(),
    }
}

#[allow(clippy::too_many_arguments)]
pub fn create_market_ix(
    program_id: Pubkey,
    creator: Pubkey,
    next_market_id: u64,
    question: String,
    evidence_url: String,
    resolution_rules: String,
    image_url: String,
    expiry_ts: i64,
    heat_level: HeatLevel,
) -> Instruction {
    let (config, _) = config_pda(&program_id);
    let (counter, _) = counter_pda(&program_id);
    let (market, _) = market_pda(next_market_id, &program_id);

    Instruction {
        program_id,
        accounts: market_core::accounts::CreateMarket {
            creator,
            config,
            counter,
            market,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: market_core::instruction::CreateMarket {
            question,
            evidence_url,
            resolution_rules,
            image_url,
            expiry_ts,
            heat_level,
        }
        .data(),
    }
}

pub fn buy_ix(
    program_id: Pubkey,
    buyer: Pubkey,
    market_id: u64,
    side: Side,
    bnb_in: u64,
    min_shares_out: u128,
) -> Instruction {
    let (config, _) = config_pda(&program_id);
    let (market, _) = market_pda(market_id, &program_id);
    let (position, _) = position_pda(&market, &buyer, &program_id);
    let (treasury, _) = treasury_pda(&program_id);

    let accounts = market_core::accounts::Buy {
        buyer,
        config,
        market,
        position,
        treasury,
        system_program: system_program::ID,
    }
    .to_account_metas(None);

    let data = match side {
        Side::Yes => market_core::instruction::BuyYes { bnb_in, min_shares_out }.data(),
        Side::No => market_core::instruction::BuyNo { bnb_in, min_shares_out }.data(),
    };

    Instruction { program_id, accounts, data }
}

pub fn sell_ix(
    program_id: Pubkey,
    seller: Pubkey,
    market_id: u64,
    side: Side,
    shares_in: u128,
    min_bnb_out: u64,
) -> Instruction {
    let (config, _) = config_pda(&program_id);
    let (market, _) = market_pda(market_id, &program_id);
    let (position, _) = position_pda(&market, &seller, &program_id);
    let (ledger, _) = ledger_pda(&seller, &program_id);
    let (treasury, _) = treasury_pda(&program_id);

    let accounts = market_core::accounts::Sell {
        seller,
        config,
        market,
        position,
        ledger,
        treasury,
        system_program: system_program::ID,
    }
    .to_account_metas(None);

    let data = match side {
        Side::Yes => market_core::instruction::SellYes { shares_in, min_bnb_out }.data(),
        Side::No => market_core::instruction::SellNo { shares_in, min_bnb_out }.data(),
    };

    Instruction { program_id, accounts, data }
}

pub fn propose_outcome_ix(program_id: Pubkey, proposer: Pubkey, market_id: u64, outcome: bool, value_sent: u64) -> Instruction {
    let (config, _) = config_pda(&program_id);
    let (market, _) = market_pda(market_id, &program_id);
    let (treasury, _) = treasury_pda(&program_id);

    Instruction {
        program_id,
        accounts: market_core::accounts::ProposeOutcome {
            proposer,
            config,
            market,
            treasury,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: market_core::instruction::ProposeOutcome { outcome, value_sent }.data(),
    }
}

pub fn dispute_ix(program_id: Pubkey, disputer: Pubkey, market_id: u64) -> Instruction {
    let (config, _) = config_pda(&program_id);
    let (market, _) = market_pda(market_id, &program_id);

    Instruction {
        program_id,
        accounts: market_core::accounts::Dispute {
            disputer,
            config,
            market,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: market_core::instruction::Dispute {}.data(),
    }
}

pub fn vote_ix(program_id: Pubkey, voter: Pubkey, market_id: u64, outcome: bool) -> Instruction {
    let (config, _) = config_pda(&program_id);
    let (market, _) = market_pda(market_id, &program_id);
    let (position, _) = position_pda(&market, &voter, &program_id);

    Instruction {
        program_id,
        accounts: market_core::accounts::Vote { voter, config, market, position }.to_account_metas(None),
        data: market_core::instruction::Vote { outcome }.data(),
    }
}

pub fn finalize_market_ix(program_id: Pubkey, caller: Pubkey, market_id: u64, proposer: Pubkey, disputer: Pubkey) -> Instruction {
    let (config, _) = config_pda(&program_id);
    let (market, _) = market_pda(market_id, &program_id);
    let (proposer_ledger, _) = ledger_pda(&proposer, &program_id);
    let (disputer_ledger, _) = ledger_pda(&disputer, &program_id);

    Instruction {
        program_id,
        accounts: market_core::accounts::FinalizeMarket {
            caller,
            config,
            market,
            proposer_ledger,
            disputer_ledger,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: market_core::instruction::FinalizeMarket {}.data(),
    }
}

pub fn claim_ix(program_id: Pubkey, claimant: Pubkey, market_id: u64) -> Instruction {
    let (config, _) = config_pda(&program_id);
    let (market, _) = market_pda(market_id, &program_id);
    let (position, _) = position_pda(&market, &claimant, &program_id);
    let (ledger, _) = ledger_pda(&claimant, &program_id);
    let (treasury, _) = treasury_pda(&program_id);

    Instruction {
        program_id,
        accounts: market_core::accounts::Claim {
            claimant,
            config,
            market,
            position,
            ledger,
            treasury,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: market_core::instruction::Claim {}.data(),
    }
}

pub fn emergency_refund_ix(program_id: Pubkey, claimant: Pubkey, market_id: u64) -> Instruction {
    let (config, _) = config_pda(&program_id);
    let (market, _) = market_pda(market_id, &program_id);
    let (position, _) = position_pda(&market, &claimant, &program_id);
    let (ledger, _) = ledger_pda(&claimant, &program_id);

    Instruction {
        program_id,
        accounts: market_core::accounts::EmergencyRefund {
            claimant,
            config,
            market,
            position,
            ledger,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: market_core::instruction::EmergencyRefund {}.data(),
    }
}

pub fn withdraw_ix(program_id: Pubkey, owner: Pubkey, selector: LedgerSelector) -> Instruction {
    let (ledger, _) = ledger_pda(&owner, &program_id);

    Instruction {
        program_id,
        accounts: market_core::accounts::Withdraw { owner, ledger }.to_account_metas(None),
        data: market_core::instruction::Withdraw { selector }.data(),
    }
}
