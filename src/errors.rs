use anchor_lang::prelude::*;

#[error_code]
pub enum GuardError {
    #[msg("Caller is not authorized for this operation")]
    Unauthorized,
    #[msg("Address must not be the default pubkey")]
    ZeroAddress,
    #[msg("Minting is paused")]
    MintingPaused,
    #[msg("Global mint cap exceeded")]
    MintCapExceeded,
    #[msg("Mint rate limit exceeded for the current window")]
    RateLimitExceeded,
    #[msg("Amount exceeds total minted exposure")]
    ExposureUnderflow,
    #[msg("Rate limit window must not be zero")]
    WindowMustNotBeZero,
    #[msg("Global mint cap must not be below the mint rate limit")]
    CapBelowRateLimit,
    #[msg("Math Overflow")]
    MathOverflow,
}
