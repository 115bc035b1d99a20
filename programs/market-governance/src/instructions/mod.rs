pub mod confirm_action;
pub mod execute_action;
pub mod initialize;
pub mod propose_action;

pub use confirm_action::*;
pub use execute_action::*;
pub use initialize::*;
pub use propose_action::*;
