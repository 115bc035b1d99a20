use anchor_lang::prelude::*;

/// Error codes for the market-core program (6000-6999 range)
#[error_code]
pub enum ErrorCode {
    // ============================================================
    // Configuration errors (6000-6099)
    // ============================================================

    /// 6000: Invalid fee configuration (total fees exceed 100%)
    #[msg("Invalid fee configuration: total fees exceed 100%")]
    InvalidFeeConfiguration,

    /// 6001: Parameter value outside its declared bounds
    #[msg("Parameter out of bounds")]
    ParameterOutOfBounds,

    /// 6002: Protocol is paused
    #[msg("Protocol is paused")]
    Paused,

    /// 6003: Caller is not the governance authority
    #[msg("Caller is not the governance authority")]
    NotGovernance,

    // ============================================================
    // Input validation errors (6100-6199)
    // ============================================================

    /// 6100: Expiry timestamp must be in the future
    #[msg("Expiry timestamp must be in the future")]
    InvalidExpiry,

    /// 6101: An opaque string field exceeded its size cap
    #[msg("String field too long")]
    StringTooLong,

    /// 6102: Unrecognised heat level
    #[msg("Invalid heat level")]
    InvalidHeatLevel,

    // ============================================================
    // State-transition / timing errors (6200-6299)
    // ============================================================

    /// 6200: Market is not in the required status for this operation
    #[msg("Market not in required status")]
    InvalidMarketState,

    /// 6201: Market has not expired yet
    #[msg("Market has not expired yet")]
    NotExpired,

    /// 6202: Market has already expired
    #[msg("Market has already expired")]
    Expired,

    /// 6203: Only the creator may act during the priority window
    #[msg("Only the market creator may propose during the priority window")]
    NotCreatorInWindow,

    /// 6204: Dispute window has closed
    #[msg("Dispute window has closed")]
    DisputeWindowClosed,

    /// 6205: Dispute window is still open
    #[msg("Dispute window is still open")]
    DisputeWindowOpen,

    /// 6206: Voting window has closed
    #[msg("Voting window has closed")]
    VotingWindowClosed,

    /// 6207: Voting window is still open
    #[msg("Voting window is still open")]
    VotingWindowOpen,

    /// 6208: Market already has an outcome proposed
    #[msg("Market already has an outcome proposed")]
    AlreadyProposed,

    /// 6209: Caller may not dispute their own proposal
    #[msg("Proposer cannot dispute their own proposal")]
    SelfDispute,

    /// 6210: Market is not eligible for emergency refund yet
    #[msg("Market is not eligible for emergency refund")]
    NotRefundable,

    /// 6211: Market already resolved
    #[msg("Market already resolved")]
    AlreadyResolved,

    // ============================================================
    // Economic errors (6300-6399)
    // ============================================================

    /// 6300: Trade amount below the configured minimum bet
    #[msg("Trade amount below minimum bet")]
    BelowMinBet,

    /// 6301: Insufficient shares to sell
    #[msg("Insufficient shares to sell")]
    InsufficientShares,

    /// 6302: Slippage tolerance exceeded
    #[msg("Slippage tolerance exceeded")]
    SlippageExceeded,

    /// 6303: Selling would drain more than the pool holds
    #[msg("Insufficient pool balance for this sell")]
    InsufficientPoolBalance,

    /// 6304: Bond sent does not cover the required bond
    #[msg("Insufficient bond")]
    InsufficientBond,

    /// 6305: Market has no trading activity to contest
    #[msg("Market has no activity to propose a resolution for")]
    NoActivity,

    /// 6306: Market is one-sided; cannot be contested
    #[msg("Market is one-sided and cannot be resolved by vote")]
    OneSidedMarket,

    // ============================================================
    // Claims & ledger errors (6400-6499)
    // ============================================================

    /// 6400: Winnings already claimed
    #[msg("Winnings already claimed")]
    AlreadyClaimed,

    /// 6401: No winning shares to claim
    #[msg("No winning shares to claim")]
    NoWinningShares,

    /// 6402: Refund already taken
    #[msg("Refund already taken")]
    AlreadyRefunded,

    /// 6403: Position has no shares
    #[msg("Position has no shares")]
    NoShares,

    /// 6404: Caller is not the market creator
    #[msg("Caller is not the market creator")]
    NotCreator,

    /// 6405: Ledger balance is zero; nothing to withdraw
    #[msg("Nothing to withdraw")]
    ZeroBalance,

    /// 6406: Caller has already voted on this market's dispute
    #[msg("Caller has already voted")]
    AlreadyVoted,

    // ============================================================
    // Math errors (6500-6599)
    // ============================================================

    /// 6500: Arithmetic overflow
    #[msg("Arithmetic overflow")]
    Overflow,

    /// 6501: Arithmetic underflow
    #[msg("Arithmetic underflow")]
    Underflow,

    /// 6502: Division by zero
    #[msg("Division by zero")]
    DivisionByZero,

    // ============================================================
    // External / transfer errors (6600-6699)
    // ============================================================

    /// 6600: Lamport transfer failed
    #[msg("Transfer failed")]
    TransferFailed,

    /// 6601: Transfer would break rent exemption of the source account
    #[msg("Transfer would break rent exemption")]
    WouldBreakRentExemption,

    /// 6602: Market account is mid-transfer (reentrancy guard engaged)
    #[msg("Market account is locked")]
    MarketLocked,
}
