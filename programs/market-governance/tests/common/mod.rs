// ============================================================
// market-governance - Common Test Utilities
// ============================================================
// Reusable test infrastructure shared by every integration test file.

use anchor_lang::prelude::*;
use solana_program_test::*;
use solana_sdk::{
    signature::{Keypair, Signer},
    transaction::Transaction,
};

pub mod account_helpers;
pub mod governance_helpers;

pub use account_helpers::*;
pub use governance_helpers::*;

pub async fn fetch<T: anchor_lang::AccountDeserialize>(banks_client: &mut BanksClient, address: &Pubkey) -> T {
    let account = banks_client
        .get_account(*address)
        .await
        .expect("rpc call failed")
        .unwrap_or_else(|| panic!("account {} not found", address));
    T::try_deserialize(&mut account.data.as_slice()).expect("account deserialize failed")
}

/// Test context spanning both programs: `market-governance` is registered
/// with its in-process processor since it is the program under test,
/// `market-core` is loaded from its built `.so` since `market-governance`
/// depends on it with the `cpi` feature enabled, which strips its
/// entrypoint (`no-entrypoint`) from this crate's own dependency graph.
/// Requires `anchor build` (or equivalent) to have produced
/// `target/deploy/market_core.so` before these tests run.
pub struct TestContext {
    pub context: ProgramTestContext,

    pub signer_a: Keypair,
    pub signer_b: Keypair,
    pub signer_c: Keypair,
    pub non_signer: Keypair,

    pub governance_program_id: Pubkey,
    pub core_program_id: Pubkey,
}

impl TestContext {
    /// Boots a runtime with both programs registered and a fixed 2-of-3
    /// signer set funded with SOL.
    pub async fn new() -> Self {
        let mut program_test = ProgramTest::new(
            "market_governance",
            market_governance::id(),
            processor!(market_governance::entry),
        );
        program_test.add_program("market_core", market_core::id(), None);

        let mut context = program_test.start_with_context().await;

        let signer_a = Keypair::new();
        let signer_b = Keypair::new();
        let signer_c = Keypair::new();
        let non_signer = Keypair::new();

        for kp in [&signer_a, &signer_b, &signer_c, &non_signer] {
            airdrop(&mut context, &kp.pubkey(), sol_to_lamports(1_000)).await;
        }

        Self {
            context,
            signer_a,
            signer_b,
            signer_c,
            non_signer,
            governance_program_id: market_governance::id(),
            core_program_id: market_core::id(),
        }
    }

    pub async fn refresh_blockhash(&mut self) {
        self.context.last_blockhash = self
            .context
            .banks_client
            .get_new_latest_blockhash(&self.context.last_blockhash)
            .await
            .expect("latest blockhash");
    }

    pub async fn process(&mut self, tx: Transaction) -> Result<(), BanksClientError> {
        self.context.banks_client.process_transaction(tx).await
    }

    pub fn payer(&self) -> Pubkey {
        self.context.payer.pubkey()
    }

    pub async fn warp_seconds(&mut self, seconds: i64) {
        let mut clock: Clock = self.context.banks_client.get_sysvar().await.expect("fetch clock sysvar");
        clock.unix_timestamp += seconds;
        self.context.set_sysvar(&clock);
    }

    pub async fn clock(&mut self) -> Clock {
        self.context.banks_client.get_sysvar().await.expect("fetch clock sysvar")
    }
}

pub async fn airdrop(context: &mut ProgramTestContext, to: &Pubkey, lamports: u64) {
    let payer = context.payer.insecure_clone();
    let tx = Transaction::new_signed_with_payer(
        &[anchor_lang::solana_program::system_instruction::transfer(&payer.pubkey(), to, lamports)],
        Some(&payer.pubkey()),
        &[&payer],
        context.last_blockhash,
    );
    context.banks_client.process_transaction(tx).await.expect("airdrop");
}

pub const fn sol_to_lamports(sol: u64) -> u64 {
    sol * 1_000_000_000
}
