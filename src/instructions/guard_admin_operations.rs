use std::cmp::Ordering;

use anchor_lang::prelude::*;

use crate::{
    constants::GUARD_STATE_SEED,
    errors::GuardError,
    events::{
        ExecutionTargetsUpdated, GlobalMintCapUpdated, MintRateLimitUpdated, MintingPaused,
        OperatorUpdated, TotalMintedDecreased, TotalMintedIncreased,
    },
    state::GuardState,
};

/// Owner-only configuration entry points for the guard
/// The signer must equal the owner recorded in the guard state
#[derive(Accounts)]
pub struct GuardAdmin<'info> {
    /// The owning identity
    pub authority: Signer<'info>,

    /// The `GuardState` account to be updated
    /// # PDA Seeds
    /// - `GUARD_STATE_SEED`
    #[account(
        mut,
        seeds = [GUARD_STATE_SEED],
        bump = guard_state.bump,
        constraint = guard_state.owner == authority.key() @ GuardError::Unauthorized
    )]
    pub guard_state: Account<'info, GuardState>,
}

impl<'info> GuardAdmin<'info> {
    /// Replace the registered operator
    /// # Arguments
    /// * `new_operator` - The new operator (must not be the default pubkey)
    /// # Returns
    /// * `Result<()>` - Ok if the operator is successfully replaced, Err otherwise
    pub fn set_operator(&mut self, new_operator: Pubkey) -> Result<()> {
        require_keys_neq!(new_operator, Pubkey::default(), GuardError::ZeroAddress);

        let previous_operator = self.guard_state.operator;
        self.guard_state.operator = new_operator;

        emit!(OperatorUpdated {
            previous_operator,
            new_operator,
            authority: self.authority.key(),
        });

        Ok(())
    }

    /// Replace all three execution target references in one step
    /// Transaction atomicity guarantees the guard can never observe a
    /// partially rewired target set
    /// # Arguments
    /// * `issuance_target` - The bridge token mint the guard mints to
    /// * `ledger_target` - The bank reserve token account burned on burn_from_bank
    /// * `redemption_target` - The vault token account burned on unmint_from_vault
    /// # Returns
    /// * `Result<()>` - Ok if all three targets are successfully replaced, Err otherwise
    pub fn configure_execution_targets(
        &mut self,
        issuance_target: Pubkey,
        ledger_target: Pubkey,
        redemption_target: Pubkey,
    ) -> Result<()> {
        require_keys_neq!(issuance_target, Pubkey::default(), GuardError::ZeroAddress);
        require_keys_neq!(ledger_target, Pubkey::default(), GuardError::ZeroAddress);
        require_keys_neq!(redemption_target, Pubkey::default(), GuardError::ZeroAddress);

        self.guard_state.issuance_target = issuance_target;
        self.guard_state.ledger_target = ledger_target;
        self.guard_state.redemption_target = redemption_target;

        emit!(ExecutionTargetsUpdated {
            issuance_target,
            ledger_target,
            redemption_target,
            authority: self.authority.key(),
        });

        Ok(())
    }

    /// Replace the global mint cap (0 means uncapped)
    /// # Arguments
    /// * `new_cap` - The new cap; a non-zero cap must not be below an active rate limit
    /// # Returns
    /// * `Result<()>` - Ok if the cap is successfully replaced, Err otherwise
    pub fn set_global_mint_cap(&mut self, new_cap: u64) -> Result<()> {
        let previous_cap = self.guard_state.global_mint_cap;
        self.guard_state.set_global_mint_cap(new_cap)?;

        emit!(GlobalMintCapUpdated {
            previous_cap,
            new_cap,
            authority: self.authority.key(),
        });

        Ok(())
    }

    /// Set the minting pause flag
    /// A call that does not change the flag is a no-op and emits no event
    /// # Arguments
    /// * `paused` - The new value of the flag
    /// # Returns
    /// * `Result<()>` - Always Ok for an authorized caller
    pub fn set_minting_paused(&mut self, paused: bool) -> Result<()> {
        if self.guard_state.set_minting_paused(paused) {
            emit!(MintingPaused {
                paused,
                authority: self.authority.key(),
            });
        }

        Ok(())
    }

    /// Override the exposure counter, e.g. to correct accounting after a
    /// migration. Resets the rate window so a stale in-flight window cannot
    /// outlive the override. A call with the current total is a no-op.
    /// # Arguments
    /// * `new_total` - The new exposure; must not exceed an active cap
    /// # Returns
    /// * `Result<()>` - Ok if the counter is successfully overridden, Err otherwise
    pub fn set_total_minted(&mut self, new_total: u64) -> Result<()> {
        let previous_total = self.guard_state.total_minted;

        match self.guard_state.override_total_minted(new_total)? {
            Ordering::Greater => emit!(TotalMintedIncreased {
                amount: new_total - previous_total,
                new_total,
            }),
            Ordering::Less => emit!(TotalMintedDecreased {
                amount: previous_total - new_total,
                new_total,
            }),
            Ordering::Equal => (),
        }

        Ok(())
    }

    /// Replace the mint rate limit configuration and reset the window
    /// A zero limit disables limiting and forces the stored window to zero
    /// # Arguments
    /// * `limit` - The maximum issuance per window (0 disables limiting)
    /// * `window_seconds` - The window length in seconds (required non-zero with a non-zero limit)
    /// # Returns
    /// * `Result<()>` - Ok if the configuration is successfully replaced, Err otherwise
    pub fn set_mint_rate_limit(&mut self, limit: u64, window_seconds: u64) -> Result<()> {
        let previous_limit = self.guard_state.mint_rate_limit;
        let previous_window = self.guard_state.mint_rate_limit_window;

        self.guard_state.set_mint_rate_limit(limit, window_seconds)?;

        emit!(MintRateLimitUpdated {
            previous_limit,
            previous_window,
            new_limit: self.guard_state.mint_rate_limit,
            new_window: self.guard_state.mint_rate_limit_window,
            authority: self.authority.key(),
        });

        Ok(())
    }
}
