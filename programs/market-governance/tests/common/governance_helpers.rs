// ============================================================
// Instruction builders: one function per entry point exercised by these
// tests, assembled with Anchor's `InstructionData`/`ToAccountMetas` so the
// tests exercise the real account-validation path, not a mock.
// ============================================================

use super::account_helpers::*;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::solana_program::system_program;
use anchor_lang::{InstructionData, ToAccountMetas};
use market_governance::ActionKind;
use solana_sdk::pubkey::Pubkey;

pub fn initialize_governance_ix(program_id: Pubkey, payer: Pubkey, signers: Vec<Pubkey>, quorum: u8) -> Instruction {
    let (config, _) = governance_config_pda(&program_id);

    Instruction {
        program_id,
        accounts: market_governance::accounts::InitializeGovernance {
            payer,
            config,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: market_governance::instruction::InitializeGovernance { signers, quorum }.data(),
    }
}

pub fn propose_action_ix(program_id: Pubkey, proposer: Pubkey, next_action_id: u64, kind: ActionKind) -> Instruction {
    let (config, _) = governance_config_pda(&program_id);
    let (action, _) = action_pda(next_action_id, &program_id);

    Instruction {
        program_id,
        accounts: market_governance::accounts::ProposeAction {
            proposer,
            config,
            action,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: market_governance::instruction::ProposeAction { kind }.data(),
    }
}

pub fn confirm_action_ix(program_id: Pubkey, signer: Pubkey, action_id: u64) -> Instruction {
    let (config, _) = governance_config_pda(&program_id);
    let (action, _) = action_pda(action_id, &program_id);

    Instruction {
        program_id,
        accounts: market_governance::accounts::ConfirmAction { signer, config, action }.to_account_metas(None),
        data: market_governance::instruction::ConfirmAction { action_id }.data(),
    }
}

pub fn execute_action_ix(program_id: Pubkey, executor: Pubkey, action_id: u64, core_program_id: Pubkey) -> Instruction {
    let (config, _) = governance_config_pda(&program_id);
    let (action, _) = action_pda(action_id, &program_id);
    let (market_core_config, _) = core_config_pda(&core_program_id);

    Instruction {
        program_id,
        accounts: market_governance::accounts::ExecuteAction {
            executor,
            config,
            action,
            market_core_config,
            market_core_program: core_program_id,
        }
        .to_account_metas(None),
        data: market_governance::instruction::ExecuteAction { action_id }.data(),
    }
}

/// `market-core`'s `initialize_global_config`, with `governance_authority`
/// pointed at this deployment's `governance-config` PDA so that a later
/// `execute_action` CPI (signed with that PDA's seeds) passes the
/// `address = config.governance_authority` check on the gated instructions.
pub fn core_initialize_global_config_ix(
    governance_program_id: Pubkey,
    core_program_id: Pubkey,
    payer: Pubkey,
    treasury_authority: Pubkey,
) -> Instruction {
    let (core_config, _) = core_config_pda(&core_program_id);
    let (core_counter, _) = core_counter_pda(&core_program_id);
    let (core_treasury, _) = core_treasury_pda(&core_program_id);
    let (governance_config, _) = governance_config_pda(&governance_program_id);

    Instruction {
        program_id: core_program_id,
        accounts: market_core::accounts::InitializeGlobalConfig {
            payer,
            config: core_config,
            counter: core_counter,
            treasury: core_treasury,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: market_core::instruction::InitializeGlobalConfig {
            governance_authority: governance_config,
            treasury_authority,
        }
        .data(),
    }
}

#[allow(clippy::too_many_arguments)]
pub fn core_create_market_ix(core_program_id: Pubkey, creator: Pubkey, next_market_id: u64, expiry_ts: i64) -> Instruction {
    let (config, _) = core_config_pda(&core_program_id);
    let (counter, _) = core_counter_pda(&core_program_id);
    let (market, _) = core_market_pda(next_market_id, &core_program_id);

    Instruction {
        program_id: core_program_id,
        accounts: market_core::accounts::CreateMarket {
            creator,
            config,
            counter,
            market,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: market_core::instruction::CreateMarket {
            question: "Will the vote pass?".to_string(),
            evidence_url: "https://example.com/evidence".to_string(),
            resolution_rules: "Resolves YES if the proposal passes".to_string(),
            image_url: "https://example.com/image.png".to_string(),
            expiry_ts,
            heat_level: market_core::HeatLevel::Warm,
        }
        .data(),
    }
}

pub fn core_buy_yes_ix(core_program_id: Pubkey, buyer: Pubkey, market_id: u64, bnb_in: u64) -> Instruction {
    let (config, _) = core_config_pda(&core_program_id);
    let (market, _) = core_market_pda(market_id, &core_program_id);
    let (position, _) = anchor_lang::prelude::Pubkey::find_program_address(&[b"position", market.as_ref(), buyer.as_ref()], &core_program_id);
    let (treasury, _) = core_treasury_pda(&core_program_id);

    Instruction {
        program_id: core_program_id,
        accounts: market_core::accounts::Buy {
            buyer,
            config,
            market,
            position,
            treasury,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: market_core::instruction::BuyYes { bnb_in, min_shares_out: 0 }.data(),
    }
}
