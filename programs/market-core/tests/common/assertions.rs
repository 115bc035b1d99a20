// ============================================================
// Shared assertions over deserialized program accounts.
// ============================================================

use anchor_lang::AccountDeserialize;
use market_core::{GlobalConfig, Market, Position, Treasury, UNIT_PRICE};
use solana_program_test::BanksClient;
use solana_sdk::pubkey::Pubkey;

pub async fn fetch<T: AccountDeserialize>(banks_client: &mut BanksClient, address: &Pubkey) -> T {
    let account = banks_client
        .get_account(*address)
        .await
        .expect("rpc call failed")
        .unwrap_or_else(|| panic!("account {} not found", address));
    T::try_deserialize(&mut account.data.as_slice()).expect("account deserialize failed")
}

pub async fn fetch_market(banks_client: &mut BanksClient, market: &Pubkey) -> Market {
    fetch(banks_client, market).await
}

pub async fn fetch_position(banks_client: &mut BanksClient, position: &Pubkey) -> Position {
    fetch(banks_client, position).await
}

pub async fn fetch_config(banks_client: &mut BanksClient, config: &Pubkey) -> GlobalConfig {
    fetch(banks_client, config).await
}

pub async fn fetch_treasury(banks_client: &mut BanksClient, treasury: &Pubkey) -> Treasury {
    fetch(banks_client, treasury).await
}

/// `P_yes + P_no == UNIT_PRICE`, the curve's defining invariant at any
/// supply state.
pub fn assert_prices_sum_to_unit(p_yes: u64, p_no: u64) {
    assert_eq!(p_yes + p_no, UNIT_PRICE, "price pair must sum to UNIT_PRICE");
}

/// The market PDA's lamport balance must always cover `pool_balance` plus
/// whatever bonds are currently posted against it.
pub fn assert_pool_solvent(market_lamports: u64, pool_balance: u64, bonds_posted: u64) {
    assert!(
        market_lamports >= pool_balance + bonds_posted,
        "market lamports {} below pool_balance {} + bonds {}",
        market_lamports,
        pool_balance,
        bonds_posted
    );
}
