// ============================================================
// PDA derivation helpers, mirroring the seeds each instruction checks.
// ============================================================

use anchor_lang::prelude::Pubkey;

pub fn config_pda(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[b"config"], program_id)
}

pub fn counter_pda(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[b"counter"], program_id)
}

pub fn treasury_pda(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[b"treasury"], program_id)
}

pub fn market_pda(market_id: u64, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[b"market", &market_id.to_le_bytes()], program_id)
}

pub fn position_pda(market: &Pubkey, owner: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[b"position", market.as_ref(), owner.as_ref()], program_id)
}

pub fn ledger_pda(owner: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[b"ledger", owner.as_ref()], program_id)
}

pub fn governance_config_pda(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[b"governance-config"], program_id)
}

pub fn action_pda(action_id: u64, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[b"action", &action_id.to_le_bytes()], program_id)
}
