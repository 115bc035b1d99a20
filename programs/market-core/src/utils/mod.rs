pub mod fees;
pub mod rent;

pub use fees::*;
pub use rent::*;
