use anchor_lang::prelude::*;

/// Event emitted when the operator is replaced
/// Fields:
/// - previous_operator: The operator being replaced (default pubkey if none was set)
/// - new_operator: The newly registered operator
/// - authority: The owner who performed the update
#[event]
pub struct OperatorUpdated {
    pub previous_operator: Pubkey,
    pub new_operator: Pubkey,
    pub authority: Pubkey,
}

/// Event emitted when the three execution targets are rewired
/// Fields:
/// - issuance_target: The bridge token mint the guard mints to
/// - ledger_target: The bank reserve token account burned on burn_from_bank
/// - redemption_target: The vault token account burned on unmint_from_vault
/// - authority: The owner who performed the update
#[event]
pub struct ExecutionTargetsUpdated {
    pub issuance_target: Pubkey,
    pub ledger_target: Pubkey,
    pub redemption_target: Pubkey,
    pub authority: Pubkey,
}

/// Event emitted when the global mint cap is replaced
/// Fields:
/// - previous_cap: The cap being replaced (0 means uncapped)
/// - new_cap: The new cap (0 means uncapped)
/// - authority: The owner who performed the update
#[event]
pub struct GlobalMintCapUpdated {
    pub previous_cap: u64,
    pub new_cap: u64,
    pub authority: Pubkey,
}

/// Event emitted when the minting pause flag flips
/// Not emitted when the flag is set to its current value
/// Fields:
/// - paused: The new value of the flag
/// - authority: The owner who performed the update
#[event]
pub struct MintingPaused {
    pub paused: bool,
    pub authority: Pubkey,
}

/// Event emitted when total minted exposure increases
/// Fields:
/// - amount: The amount the exposure increased by
/// - new_total: The exposure after the increase
#[event]
pub struct TotalMintedIncreased {
    pub amount: u64,
    pub new_total: u64,
}

/// Event emitted when total minted exposure decreases
/// Fields:
/// - amount: The amount the exposure decreased by
/// - new_total: The exposure after the decrease
#[event]
pub struct TotalMintedDecreased {
    pub amount: u64,
    pub new_total: u64,
}

/// Event emitted when the mint rate limit configuration is replaced
/// Fields:
/// - previous_limit: The limit being replaced (0 means disabled)
/// - previous_window: The window being replaced, in seconds
/// - new_limit: The new limit (0 means disabled)
/// - new_window: The new window, in seconds
/// - authority: The owner who performed the update
#[event]
pub struct MintRateLimitUpdated {
    pub previous_limit: u64,
    pub previous_window: u64,
    pub new_limit: u64,
    pub new_window: u64,
    pub authority: Pubkey,
}

/// Event emitted when a mint is forwarded to the issuance target
/// Fields:
/// - operator: The operator who invoked the mint
/// - recipient: The token account credited
/// - amount: The amount minted
/// - new_total: The exposure after the mint
#[event]
pub struct BankMintExecuted {
    pub operator: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
    pub new_total: u64,
}

/// Event emitted when a burn is forwarded to the bank reserve
/// Fields:
/// - operator: The operator who invoked the burn
/// - from: The token account debited
/// - amount: The amount burned
/// - new_total: The exposure after the burn
#[event]
pub struct BankBurnExecuted {
    pub operator: Pubkey,
    pub from: Pubkey,
    pub amount: u64,
    pub new_total: u64,
}

/// Event emitted when an unmint is forwarded to the vault
/// Fields:
/// - operator: The operator who invoked the unmint
/// - vault: The vault token account debited
/// - amount: The amount unminted
/// - new_total: The exposure after the unmint
#[event]
pub struct VaultUnmintExecuted {
    pub operator: Pubkey,
    pub vault: Pubkey,
    pub amount: u64,
    pub new_total: u64,
}

/// Event emitted when exposure is reduced without a forwarded call
/// Fields:
/// - operator: The operator who invoked the reduction
/// - from: The holder the reduction is attributed to
/// - amount: The amount the exposure was reduced by
/// - new_total: The exposure after the reduction
#[event]
pub struct ExposureReduced {
    pub operator: Pubkey,
    pub from: Pubkey,
    pub amount: u64,
    pub new_total: u64,
}
