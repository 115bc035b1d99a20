pub mod global_config;
pub mod ledger;
pub mod market;
pub mod market_counter;
pub mod position;

pub use global_config::*;
pub use ledger::*;
pub use market::*;
pub use market_counter::*;
pub use position::*;
