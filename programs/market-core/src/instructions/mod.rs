pub mod buy;
pub mod claim;
pub mod claim_creator_fees;
pub mod claim_jury_fees;
pub mod create_market;
pub mod create_market_and_buy;
pub mod dispute;
pub mod emergency_refund;
pub mod finalize_market;
pub mod governance_gated;
pub mod initialize;
pub mod propose_outcome;
pub mod sell;
pub mod views;
pub mod vote;
pub mod withdraw;

pub use buy::*;
pub use claim::*;
pub use claim_creator_fees::*;
pub use claim_jury_fees::*;
pub use create_market::*;
pub use create_market_and_buy::*;
pub use dispute::*;
pub use emergency_refund::*;
pub use finalize_market::*;
pub use governance_gated::*;
pub use initialize::*;
pub use propose_outcome::*;
pub use sell::*;
pub use views::*;
pub use vote::*;
pub use withdraw::*;
