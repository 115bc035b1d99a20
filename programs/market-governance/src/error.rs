use anchor_lang::prelude::*;

/// Error codes for the market-governance program (7000-7999 range)
#[error_code]
pub enum ErrorCode {
    // ============================================================
    // Voting / quorum errors (7000-7099)
    // ============================================================

    /// 7000: Signer has already confirmed this action
    #[msg("Signer has already confirmed this action")]
    AlreadyConfirmed,

    /// 7001: Action has not reached quorum yet
    #[msg("Action has not reached quorum")]
    QuorumNotReached,

    /// 7002: Action already executed
    #[msg("Action already executed")]
    AlreadyExecuted,

    /// 7003: Action has expired
    #[msg("Action has expired")]
    ActionExpired,

    /// 7004: Action is still within its expiry window
    #[msg("Action has not expired yet")]
    ActionNotExpired,

    // ============================================================
    // Authorization errors (7100-7199)
    // ============================================================

    /// 7100: Caller is not one of the fixed governance signers
    #[msg("Caller is not a governance signer")]
    NotASigner,

    // ============================================================
    // Validation errors (7200-7299)
    // ============================================================

    /// 7200: Invalid market reference
    #[msg("Invalid market reference")]
    InvalidMarketReference,

    /// 7201: Invalid user reference
    #[msg("Invalid user reference")]
    InvalidUserReference,

    /// 7202: Signer set size or quorum out of bounds
    #[msg("Signer set or quorum misconfigured")]
    InvalidSignerSet,

    /// 7203: Action id counter overflowed
    #[msg("Action id counter overflowed")]
    ActionIdOverflow,

    /// 7204: Proposed parameter value falls outside its governable range
    #[msg("Parameter value out of bounds")]
    ParameterOutOfBounds,
}
