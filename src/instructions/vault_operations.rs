use anchor_lang::prelude::*;
use anchor_spl::token_interface::{burn_checked, BurnChecked, Mint, TokenAccount, TokenInterface};

use crate::{
    constants::{GUARD_AUTHORITY_SEED, GUARD_STATE_SEED},
    errors::GuardError,
    events::{ExposureReduced, TotalMintedDecreased, VaultUnmintExecuted},
    state::GuardState,
};

/// Unmint bridge tokens held in the vault back into ledger balance
/// The signer must be the registered operator
/// Deliberately not gated by the minting pause: exposure reduction stays
/// available during an emergency pause
#[derive(Accounts)]
pub struct UnmintFromVault<'info> {
    /// The registered operator
    pub operator: Signer<'info>,

    /// The guard authority PDA, owner of the vault token account
    /// # PDA Seeds
    /// - `GUARD_AUTHORITY_SEED`
    ///
    /// CHECK: This account only signs the CPI and is never initialized.
    #[account(
        seeds = [GUARD_AUTHORITY_SEED],
        bump
    )]
    pub guard_authority: UncheckedAccount<'info>,

    /// The `GuardState` account holding the exposure counters
    /// # PDA Seeds
    /// - `GUARD_STATE_SEED`
    #[account(
        mut,
        seeds = [GUARD_STATE_SEED],
        bump = guard_state.bump,
        constraint = guard_state.operator == operator.key() @ GuardError::Unauthorized
    )]
    pub guard_state: Account<'info, GuardState>,

    /// The mint of the vault holding being unminted
    #[account(
        mut,
        mint::token_program = token_program
    )]
    pub mint: InterfaceAccount<'info, Mint>,

    /// The token program
    pub token_program: Interface<'info, TokenInterface>,

    /// The vault token account, wired as the redemption target
    #[account(
        mut,
        constraint = guard_state.redemption_target != Pubkey::default() @ GuardError::ZeroAddress,
        address = guard_state.redemption_target,
        token::mint = mint,
        token::authority = guard_authority,
        token::token_program = token_program
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,
}

impl<'info> UnmintFromVault<'info> {
    /// Decrease exposure and forward an unmint of the vault holding
    /// # Arguments
    /// * `amount` - The amount to unmint (a zero amount is a silent no-op)
    /// * `bump` - The PDA bump for the guard authority
    /// # Returns
    /// * `Result<()>` - Ok if exposure is reduced and the holding is burned, Err otherwise
    pub fn unmint_from_vault(&mut self, amount: u64, bump: u8) -> Result<()> {
        if amount == 0 {
            return Ok(());
        }

        let new_total = self.guard_state.record_decrease(amount)?;

        emit!(TotalMintedDecreased { amount, new_total });

        burn_checked(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                BurnChecked {
                    mint: self.mint.to_account_info(),
                    from: self.vault.to_account_info(),
                    authority: self.guard_authority.to_account_info(),
                },
                &[&[GUARD_AUTHORITY_SEED, &[bump]]],
            ),
            amount,
            self.mint.decimals,
        )?;

        emit!(VaultUnmintExecuted {
            operator: self.operator.key(),
            vault: self.vault.key(),
            amount,
            new_total,
        });

        Ok(())
    }
}

/// Reduce exposure without forwarding a call to any execution target
/// Used when the corresponding burn already happened out of band
/// The signer must be the registered operator
#[derive(Accounts)]
pub struct ReduceExposure<'info> {
    /// The registered operator
    pub operator: Signer<'info>,

    /// The `GuardState` account holding the exposure counters
    /// # PDA Seeds
    /// - `GUARD_STATE_SEED`
    #[account(
        mut,
        seeds = [GUARD_STATE_SEED],
        bump = guard_state.bump,
        constraint = guard_state.operator == operator.key() @ GuardError::Unauthorized
    )]
    pub guard_state: Account<'info, GuardState>,
}

impl<'info> ReduceExposure<'info> {
    /// Decrease exposure only; no CPI is issued
    /// Not gated by the minting pause
    /// # Arguments
    /// * `from` - The holder the reduction is attributed to
    /// * `amount` - The amount to reduce exposure by (a zero amount is a silent no-op)
    /// # Returns
    /// * `Result<()>` - Ok if exposure is reduced, Err otherwise
    pub fn reduce_exposure_and_burn(&mut self, from: Pubkey, amount: u64) -> Result<()> {
        if amount == 0 {
            return Ok(());
        }

        let new_total = self.guard_state.record_decrease(amount)?;

        emit!(TotalMintedDecreased { amount, new_total });

        emit!(ExposureReduced {
            operator: self.operator.key(),
            from,
            amount,
            new_total,
        });

        Ok(())
    }
}
