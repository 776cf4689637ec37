use anchor_lang::prelude::*;

use crate::{
    constants::GUARD_STATE_SEED, errors::GuardError, events::OperatorUpdated, state::GuardState,
};

/// Create the `GuardState` singleton
/// The co-signing owner becomes the owning identity for all configuration
/// instructions; an initial operator may be registered in the same step
#[derive(Accounts)]
pub struct InitializeGuard<'info> {
    /// Pays for account creation
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The owning identity written into the guard state
    pub owner: Signer<'info>,

    /// The `GuardState` account to be initialized
    /// # PDA Seeds
    /// - `GUARD_STATE_SEED`
    #[account(
        init,
        payer = payer,
        space = 8 + GuardState::INIT_SPACE,
        seeds = [GUARD_STATE_SEED],
        bump
    )]
    pub guard_state: Account<'info, GuardState>,

    /// The system program
    pub system_program: Program<'info, System>,
}

impl<'info> InitializeGuard<'info> {
    /// Initialize the guard state with the owning identity and an optional
    /// initial operator. Execution targets, cap and rate limit start unset
    /// and are wired afterwards through the owner-only instructions.
    /// # Arguments
    /// * `operator` - The initial operator, if any (must not be the default pubkey)
    /// * `bumps` - The PDA bumps for account derivation
    /// # Returns
    /// * `Result<()>` - Ok if the guard state is successfully initialized, Err otherwise
    pub fn initialize_guard(
        &mut self,
        operator: Option<Pubkey>,
        bumps: &InitializeGuardBumps,
    ) -> Result<()> {
        if let Some(new_operator) = operator {
            require_keys_neq!(new_operator, Pubkey::default(), GuardError::ZeroAddress);
        }

        self.guard_state.set_inner(GuardState {
            owner: self.owner.key(),
            operator: operator.unwrap_or_default(),
            total_minted: 0,
            global_mint_cap: 0,
            minting_paused: false,
            issuance_target: Pubkey::default(),
            ledger_target: Pubkey::default(),
            redemption_target: Pubkey::default(),
            mint_rate_limit: 0,
            mint_rate_limit_window: 0,
            mint_rate_window_start: 0,
            mint_rate_window_amount: 0,
            bump: bumps.guard_state,
        });

        if let Some(new_operator) = operator {
            emit!(OperatorUpdated {
                previous_operator: Pubkey::default(),
                new_operator,
                authority: self.owner.key(),
            });
        }

        Ok(())
    }
}
