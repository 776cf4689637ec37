// PDA SEEDS

/// Seed for the GuardState singleton PDA
pub const GUARD_STATE_SEED: &[u8] = b"guard_state";
/// Seed for the guard authority PDA
/// Mint authority of the issuance target and owner of the ledger/vault token accounts
pub const GUARD_AUTHORITY_SEED: &[u8] = b"guard_authority";
