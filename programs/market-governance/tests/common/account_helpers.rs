// ============================================================
// PDA derivation helpers, mirroring the seeds each instruction checks.
// ============================================================

use anchor_lang::prelude::Pubkey;

pub fn governance_config_pda(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[b"governance-config"], program_id)
}

pub fn action_pda(action_id: u64, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[b"action", &action_id.to_le_bytes()], program_id)
}

pub fn core_config_pda(core_program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[b"config"], core_program_id)
}

pub fn core_counter_pda(core_program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[b"counter"], core_program_id)
}

pub fn core_treasury_pda(core_program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[b"treasury"], core_program_id)
}

pub fn core_market_pda(market_id: u64, core_program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[b"market", &market_id.to_le_bytes()], core_program_id)
}
