// ============================================================
// market-core - Common Test Utilities
// ============================================================
// Reusable test infrastructure shared by every integration test file.

use anchor_lang::prelude::*;
use solana_program_test::*;
use solana_sdk::{
    signature::{Keypair, Signer},
    transaction::Transaction,
};

pub mod account_helpers;
pub mod assertions;
pub mod market_helpers;

pub use account_helpers::*;
pub use assertions::*;
pub use market_helpers::*;

/// Test context with common accounts and a live banks-client runtime.
/// Wraps `ProgramTestContext` rather than the bare `(banks_client, payer,
/// blockhash)` tuple so tests can warp the `Clock` sysvar directly instead
/// of waiting on wall-clock time to cross a dispute/voting window.
pub struct TestContext {
    pub context: ProgramTestContext,

    pub governance: Keypair,
    pub treasury_authority: Keypair,
    pub creator: Keypair,
    pub trader1: Keypair,
    pub trader2: Keypair,
    pub disputer: Keypair,

    pub core_program_id: Pubkey,
}

impl TestContext {
    /// Boots a fresh `market_core` runtime and funds the common actors.
    pub async fn new() -> Self {
        let program_test = ProgramTest::new("market_core", market_core::id(), processor!(market_core::entry));

        let mut context = program_test.start_with_context().await;

        let governance = Keypair::new();
        let treasury_authority = Keypair::new();
        let creator = Keypair::new();
        let trader1 = Keypair::new();
        let trader2 = Keypair::new();
        let disputer = Keypair::new();

        for kp in [&governance, &treasury_authority, &creator, &trader1, &trader2, &disputer] {
            airdrop(&mut context, &kp.pubkey(), sol_to_lamports(1_000)).await;
        }

        Self {
            context,
            governance,
            treasury_authority,
            creator,
            trader1,
            trader2,
            disputer,
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

    /// Moves the on-chain `Clock` sysvar's `unix_timestamp` forward by
    /// `seconds`, leaving slot/epoch untouched. Windows like
    /// `DISPUTE_WINDOW`/`VOTING_WINDOW` are checked purely against this
    /// timestamp, so this is enough to cross them without stepping slots.
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

pub fn current_timestamp() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time went backwards")
        .as_secs() as i64
}

pub const fn sol_to_lamports(sol: u64) -> u64 {
    sol * 1_000_000_000
}

/// Assert a banks-client transaction result carries the given Anchor custom
/// error code (`6000 + variant index` for `market-core`, `7000 +` for
/// `market-governance`).
#[macro_export]
macro_rules! assert_anchor_err {
    ($result:expr, $code:expr) => {
        let err = $result.expect_err("expected transaction to fail");
        let msg = format!("{:?}", err);
        assert!(
            msg.contains(&format!("custom program error: {:#x}", $code)) || msg.contains(&$code.to_string()),
            "expected error code {} in: {}",
            $code,
            msg
        );
    };
}
