#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;
mod constants;
mod errors;
mod events;
mod instructions;
pub mod security;
mod state;
mod utils;

use instructions::*;

#[cfg(feature = "devnet")]
declare_id!("3i1nprZJ93uQUY33LjsSyHuB3sVT9nWBhcCd1Q1jzngB");
#[cfg(feature = "testnet")]
declare_id!("9grmTe14HNpVc7g6ZkZyFuYEykwVWcNBzee9Fn7oLhFT");
#[cfg(feature = "mainnet")]
declare_id!("9DEPAXLj8yp4HUkHY6iFTsm7KfHug2tUSnnmnpM3BxR2");
#[cfg(not(any(feature = "mainnet", feature = "devnet", feature = "testnet")))]
declare_id!("ChehKYvzqSh3Wq7fhTfbK5agQHwEZtfUPxvxc24SQwEu");

#[program]
pub mod bridge_guard {
    use super::*;

    /// Create the guard state singleton
    ///
    /// The co-signing owner becomes the owning identity; an initial operator
    /// may be registered in the same step. Targets, cap and rate limit start
    /// unset and are wired afterwards.
    pub fn initialize_guard(
        ctx: Context<InitializeGuard>,
        operator: Option<Pubkey>,
    ) -> Result<()> {
        ctx.accounts.initialize_guard(operator, &ctx.bumps)
    }

    /// Replace the registered operator
    /// Signer must be the guard owner
    pub fn set_operator(ctx: Context<GuardAdmin>, new_operator: Pubkey) -> Result<()> {
        ctx.accounts.set_operator(new_operator)
    }

    /// Replace all three execution target references atomically
    /// Signer must be the guard owner
    pub fn configure_execution_targets(
        ctx: Context<GuardAdmin>,
        issuance_target: Pubkey,
        ledger_target: Pubkey,
        redemption_target: Pubkey,
    ) -> Result<()> {
        ctx.accounts
            .configure_execution_targets(issuance_target, ledger_target, redemption_target)
    }

    /// Replace the global mint cap (0 means uncapped)
    /// Signer must be the guard owner
    pub fn set_global_mint_cap(ctx: Context<GuardAdmin>, new_cap: u64) -> Result<()> {
        ctx.accounts.set_global_mint_cap(new_cap)
    }

    /// Pause or resume exposure-increasing operations
    /// Exposure-decreasing operations are never paused
    /// Signer must be the guard owner
    pub fn set_minting_paused(ctx: Context<GuardAdmin>, paused: bool) -> Result<()> {
        ctx.accounts.set_minting_paused(paused)
    }

    /// Override the exposure counter, e.g. for a migration correction
    /// Signer must be the guard owner
    pub fn set_total_minted(ctx: Context<GuardAdmin>, new_total: u64) -> Result<()> {
        ctx.accounts.set_total_minted(new_total)
    }

    /// Replace the mint rate limit configuration and reset the window
    /// Signer must be the guard owner
    pub fn set_mint_rate_limit(
        ctx: Context<GuardAdmin>,
        limit: u64,
        window_seconds: u64,
    ) -> Result<()> {
        ctx.accounts.set_mint_rate_limit(limit, window_seconds)
    }

    /// Increase exposure and mint bridge tokens to the recipient through
    /// the issuance target
    /// Signer must be the registered operator
    pub fn mint_to_bank(ctx: Context<MintToBank>, amount: u64) -> Result<()> {
        ctx.accounts
            .mint_to_bank(amount, ctx.bumps.guard_authority)
    }

    /// Decrease exposure and burn the guard's own bank reserve balance
    /// Signer must be the registered operator
    pub fn burn_from_bank(ctx: Context<BurnFromBank>, amount: u64) -> Result<()> {
        ctx.accounts
            .burn_from_bank(amount, ctx.bumps.guard_authority)
    }

    /// Decrease exposure and burn the vault holding back into ledger balance
    /// Signer must be the registered operator
    pub fn unmint_from_vault(ctx: Context<UnmintFromVault>, amount: u64) -> Result<()> {
        ctx.accounts
            .unmint_from_vault(amount, ctx.bumps.guard_authority)
    }

    /// Decrease exposure without forwarding a call to any execution target
    /// Signer must be the registered operator
    pub fn reduce_exposure_and_burn(
        ctx: Context<ReduceExposure>,
        from: Pubkey,
        amount: u64,
    ) -> Result<()> {
        ctx.accounts.reduce_exposure_and_burn(from, amount)
    }
}
