use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    burn_checked, mint_to, BurnChecked, Mint, MintTo, TokenAccount, TokenInterface,
};

use crate::{
    constants::{GUARD_AUTHORITY_SEED, GUARD_STATE_SEED},
    errors::GuardError,
    events::{BankBurnExecuted, BankMintExecuted, TotalMintedDecreased, TotalMintedIncreased},
    state::GuardState,
};

/// Mint bridge tokens to a recipient through the issuance target
/// The signer must be the registered operator
#[derive(Accounts)]
pub struct MintToBank<'info> {
    /// The registered operator
    pub operator: Signer<'info>,

    /// The guard authority PDA, mint authority of the issuance target
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

    /// The bridge token mint, wired as the issuance target
    #[account(
        mut,
        constraint = guard_state.issuance_target != Pubkey::default() @ GuardError::ZeroAddress,
        address = guard_state.issuance_target,
        mint::authority = guard_authority,
        mint::token_program = token_program
    )]
    pub mint: InterfaceAccount<'info, Mint>,

    /// The token program
    pub token_program: Interface<'info, TokenInterface>,

    /// The token account credited with the minted amount
    #[account(
        mut,
        token::mint = mint,
        token::token_program = token_program
    )]
    pub recipient: InterfaceAccount<'info, TokenAccount>,
}

impl<'info> MintToBank<'info> {
    /// Increase exposure and forward a mint to the issuance target
    /// Checks run in order: pause flag, rate window, global cap. The
    /// exposure counter is committed before the CPI so a re-entered
    /// issuance target observes the updated figure; a CPI failure rolls
    /// the whole transaction back, counter included.
    /// # Arguments
    /// * `amount` - The amount to mint (a zero amount is a silent no-op)
    /// * `bump` - The PDA bump for the guard authority
    /// # Returns
    /// * `Result<()>` - Ok if exposure is recorded and tokens are minted, Err otherwise
    pub fn mint_to_bank(&mut self, amount: u64, bump: u8) -> Result<()> {
        if amount == 0 {
            return Ok(());
        }

        let now = Clock::get()?.unix_timestamp;
        let new_total = self.guard_state.record_increase(amount, now)?;

        emit!(TotalMintedIncreased { amount, new_total });

        mint_to(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                MintTo {
                    mint: self.mint.to_account_info(),
                    to: self.recipient.to_account_info(),
                    authority: self.guard_authority.to_account_info(),
                },
                &[&[GUARD_AUTHORITY_SEED, &[bump]]],
            ),
            amount,
        )?;

        emit!(BankMintExecuted {
            operator: self.operator.key(),
            recipient: self.recipient.key(),
            amount,
            new_total,
        });

        Ok(())
    }
}

/// Burn bridge tokens from the guard's bank reserve
/// The signer must be the registered operator
/// Deliberately not gated by the minting pause: exposure reduction stays
/// available during an emergency pause
#[derive(Accounts)]
pub struct BurnFromBank<'info> {
    /// The registered operator
    pub operator: Signer<'info>,

    /// The guard authority PDA, owner of the bank reserve token account
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

    /// The mint of the reserve being burned
    #[account(
        mut,
        mint::token_program = token_program
    )]
    pub mint: InterfaceAccount<'info, Mint>,

    /// The token program
    pub token_program: Interface<'info, TokenInterface>,

    /// The bank reserve token account, wired as the ledger target
    /// The guard burns its own balance here
    #[account(
        mut,
        constraint = guard_state.ledger_target != Pubkey::default() @ GuardError::ZeroAddress,
        address = guard_state.ledger_target,
        token::mint = mint,
        token::authority = guard_authority,
        token::token_program = token_program
    )]
    pub bank_reserve: InterfaceAccount<'info, TokenAccount>,
}

impl<'info> BurnFromBank<'info> {
    /// Decrease exposure and forward a burn of the guard's own reserve
    /// balance. Fails with `ExposureUnderflow` when `amount` exceeds the
    /// recorded exposure; the counter is committed before the CPI.
    /// # Arguments
    /// * `amount` - The amount to burn (a zero amount is a silent no-op)
    /// * `bump` - The PDA bump for the guard authority
    /// # Returns
    /// * `Result<()>` - Ok if exposure is reduced and tokens are burned, Err otherwise
    pub fn burn_from_bank(&mut self, amount: u64, bump: u8) -> Result<()> {
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
                    from: self.bank_reserve.to_account_info(),
                    authority: self.guard_authority.to_account_info(),
                },
                &[&[GUARD_AUTHORITY_SEED, &[bump]]],
            ),
            amount,
            self.mint.decimals,
        )?;

        emit!(BankBurnExecuted {
            operator: self.operator.key(),
            from: self.bank_reserve.key(),
            amount,
            new_total,
        });

        Ok(())
    }
}
