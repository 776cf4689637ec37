use std::cmp::Ordering;

use anchor_lang::prelude::*;

use crate::{errors::GuardError, utils::check_rate_window};

/// GuardState account - the singleton accounting state of the exposure guard
///
/// The guard sits between the single registered operator and the three
/// execution targets and is the only place the bridge's economic-safety
/// invariants are enforced: the global mint cap, the emergency pause, and
/// the fixed-window issuance rate limit.
#[account]
#[derive(InitSpace)]
pub struct GuardState {
    // The owning identity, sole caller of configuration instructions
    pub owner: Pubkey,

    // The sole caller of accounting instructions
    // Pubkey::default() means no operator is registered
    pub operator: Pubkey,

    // Cumulative net-issued exposure
    // Never exceeds global_mint_cap while the cap is non-zero
    pub total_minted: u64,

    // Maximum exposure permitted at any time, 0 means uncapped
    pub global_mint_cap: u64,

    // When true, exposure-increasing operations fail
    // Exposure-decreasing operations stay available so redemptions are
    // never blocked by an emergency pause
    pub minting_paused: bool,

    // The bridge token mint the guard mints to
    pub issuance_target: Pubkey,

    // The guard-held bank reserve token account burned on burn_from_bank
    pub ledger_target: Pubkey,

    // The guard-held vault token account burned on unmint_from_vault
    pub redemption_target: Pubkey,

    // Maximum issuance per rate window, 0 disables limiting
    pub mint_rate_limit: u64,

    // Rate window length in seconds, 0 iff mint_rate_limit is 0
    pub mint_rate_limit_window: u64,

    // Start timestamp of the current rate window
    pub mint_rate_window_start: i64,

    // Issuance attributed to the current rate window
    pub mint_rate_window_amount: u64,

    // The bump used to derive the PDA for this account
    // Stored so we don't need to recalculate it later
    pub bump: u8,
}

impl GuardState {
    /// Record an exposure increase of `amount` at time `now`.
    ///
    /// Checks run in order: pause flag, rate window, global cap. State is
    /// mutated only after every check has passed, so a failed call leaves
    /// both the exposure counter and the rate window untouched.
    ///
    /// # Arguments
    /// * `amount` - The amount to increase exposure by (must be non-zero)
    /// * `now` - The current timestamp
    /// # Returns
    /// * `Result<u64>` - The exposure after the increase
    pub fn record_increase(&mut self, amount: u64, now: i64) -> Result<u64> {
        require!(!self.minting_paused, GuardError::MintingPaused);

        let (window_start, window_amount) = check_rate_window(
            self.mint_rate_limit,
            self.mint_rate_limit_window,
            self.mint_rate_window_start,
            self.mint_rate_window_amount,
            now,
            amount,
        )?;

        let new_total = self
            .total_minted
            .checked_add(amount)
            .ok_or(GuardError::MathOverflow)?;

        if self.global_mint_cap != 0 && new_total > self.global_mint_cap {
            msg!(
                "Global mint cap exceeded: new total {} > cap {}",
                new_total,
                self.global_mint_cap
            );
            return Err(GuardError::MintCapExceeded.into());
        }

        self.mint_rate_window_start = window_start;
        self.mint_rate_window_amount = window_amount;
        self.total_minted = new_total;

        Ok(new_total)
    }

    /// Record an exposure decrease of `amount`.
    ///
    /// Deliberately not gated by the pause flag. Fails with
    /// `ExposureUnderflow` when `amount` exceeds the current exposure.
    /// # Arguments
    /// * `amount` - The amount to decrease exposure by (must be non-zero)
    /// # Returns
    /// * `Result<u64>` - The exposure after the decrease
    pub fn record_decrease(&mut self, amount: u64) -> Result<u64> {
        let new_total = self
            .total_minted
            .checked_sub(amount)
            .ok_or(GuardError::ExposureUnderflow)?;

        self.total_minted = new_total;

        Ok(new_total)
    }

    /// Replace the global mint cap.
    /// Fails with `CapBelowRateLimit` when an active rate limit could never
    /// be spent under the new cap.
    pub fn set_global_mint_cap(&mut self, new_cap: u64) -> Result<()> {
        if self.mint_rate_limit != 0 && new_cap != 0 && new_cap < self.mint_rate_limit {
            msg!(
                "Cap below rate limit: cap {} < rate limit {}",
                new_cap,
                self.mint_rate_limit
            );
            return Err(GuardError::CapBelowRateLimit.into());
        }

        self.global_mint_cap = new_cap;

        Ok(())
    }

    /// Replace the rate limit configuration and reset the window trackers.
    ///
    /// A zero limit disables limiting and forces the stored window to zero.
    /// A non-zero limit requires a non-zero window and must fit under an
    /// active cap.
    pub fn set_mint_rate_limit(&mut self, limit: u64, window_seconds: u64) -> Result<()> {
        if limit == 0 {
            self.mint_rate_limit = 0;
            self.mint_rate_limit_window = 0;
        } else {
            require!(window_seconds != 0, GuardError::WindowMustNotBeZero);

            if self.global_mint_cap != 0 && limit > self.global_mint_cap {
                msg!(
                    "Cap below rate limit: cap {} < rate limit {}",
                    self.global_mint_cap,
                    limit
                );
                return Err(GuardError::CapBelowRateLimit.into());
            }

            self.mint_rate_limit = limit;
            self.mint_rate_limit_window = window_seconds;
        }

        self.reset_rate_window();

        Ok(())
    }

    /// Set the minting pause flag.
    /// Returns whether the flag actually flipped so the caller emits at
    /// most one event per transition; setting the current value changes
    /// nothing.
    pub fn set_minting_paused(&mut self, paused: bool) -> bool {
        if self.minting_paused == paused {
            return false;
        }

        self.minting_paused = paused;

        true
    }

    /// Override the exposure counter, e.g. for a migration correction.
    /// Fails with `MintCapExceeded` over an active cap. Resets the rate
    /// window so a stale in-flight window cannot outlive the override.
    ///
    /// Returns how the new total compares to the previous one so the
    /// caller can emit the matching increase/decrease event; `Equal`
    /// means the call changed nothing, the window included.
    pub fn override_total_minted(&mut self, new_total: u64) -> Result<Ordering> {
        let direction = new_total.cmp(&self.total_minted);
        if direction == Ordering::Equal {
            return Ok(Ordering::Equal);
        }

        if self.global_mint_cap != 0 && new_total > self.global_mint_cap {
            msg!(
                "Global mint cap exceeded: new total {} > cap {}",
                new_total,
                self.global_mint_cap
            );
            return Err(GuardError::MintCapExceeded.into());
        }

        self.total_minted = new_total;
        self.reset_rate_window();

        Ok(direction)
    }

    pub fn reset_rate_window(&mut self) {
        self.mint_rate_window_start = 0;
        self.mint_rate_window_amount = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn create_test_state() -> GuardState {
        GuardState {
            owner: Pubkey::new_unique(),
            operator: Pubkey::new_unique(),
            total_minted: 0,
            global_mint_cap: 0,
            minting_paused: false,
            issuance_target: Pubkey::new_unique(),
            ledger_target: Pubkey::new_unique(),
            redemption_target: Pubkey::new_unique(),
            mint_rate_limit: 0,
            mint_rate_limit_window: 0,
            mint_rate_window_start: 0,
            mint_rate_window_amount: 0,
            bump: 0,
        }
    }

    #[test]
    fn test_increase_and_decrease_conserve_exposure() {
        let mut state = create_test_state();

        assert_eq!(state.record_increase(150, 0).unwrap(), 150);
        assert_eq!(state.record_increase(50, 10).unwrap(), 200);
        assert_eq!(state.record_decrease(70).unwrap(), 130);
        assert_eq!(state.record_increase(20, 20).unwrap(), 150);
        assert_eq!(state.record_decrease(150).unwrap(), 0);
    }

    #[test]
    fn test_cap_rejects_increase_and_leaves_state_unchanged() {
        let mut state = create_test_state();
        state.global_mint_cap = 200;

        assert_eq!(state.record_increase(150, 0).unwrap(), 150);

        let result = state.record_increase(100, 1);
        assert!(result.is_err());
        assert_eq!(state.total_minted, 150);

        // Exactly reaching the cap is allowed
        assert_eq!(state.record_increase(50, 2).unwrap(), 200);
    }

    #[test]
    fn test_zero_cap_means_uncapped() {
        let mut state = create_test_state();

        assert_eq!(state.record_increase(u64::MAX / 2, 0).unwrap(), u64::MAX / 2);
    }

    #[test]
    fn test_pause_blocks_increase_but_not_decrease() {
        let mut state = create_test_state();
        state.record_increase(100, 0).unwrap();

        state.minting_paused = true;

        assert!(state.record_increase(1, 1).is_err());
        assert_eq!(state.total_minted, 100);

        // Redemptions stay available during an emergency pause
        assert_eq!(state.record_decrease(40).unwrap(), 60);
    }

    #[test]
    fn test_decrease_underflow() {
        let mut state = create_test_state();
        state.record_increase(10, 0).unwrap();

        let result = state.record_decrease(11);
        assert!(result.is_err());
        assert_eq!(state.total_minted, 10);

        assert_eq!(state.record_decrease(10).unwrap(), 0);
        assert!(state.record_decrease(1).is_err());
    }

    #[test]
    fn test_rate_limited_mint_scenario() {
        // cap = 0 (unlimited), limit = 100_000 over a 3600s window
        let mut state = create_test_state();
        state.set_mint_rate_limit(100_000, 3600).unwrap();

        assert_eq!(state.record_increase(60_000, 1_000).unwrap(), 60_000);
        assert_eq!(state.record_increase(40_000, 1_100).unwrap(), 100_000);
        assert_eq!(state.mint_rate_window_amount, 100_000);

        // The window is exhausted
        let result = state.record_increase(1, 1_200);
        assert!(result.is_err());
        assert_eq!(state.total_minted, 100_000);
        assert_eq!(state.mint_rate_window_amount, 100_000);

        // Advancing past the window opens a fresh one
        assert_eq!(state.record_increase(50_000, 4_601).unwrap(), 150_000);
        assert_eq!(state.mint_rate_window_amount, 50_000);
        assert_eq!(state.mint_rate_window_start, 4_601);
    }

    #[test]
    fn test_failed_cap_check_does_not_consume_rate_window() {
        let mut state = create_test_state();
        state.global_mint_cap = 100;
        state.set_mint_rate_limit(100, 3600).unwrap();

        state.record_increase(90, 1_000).unwrap();
        assert_eq!(state.mint_rate_window_amount, 90);

        // Fits in the window but breaks the cap; the window must not move
        let result = state.record_increase(20, 1_100);
        assert!(result.is_err());
        assert_eq!(state.total_minted, 90);
        assert_eq!(state.mint_rate_window_amount, 90);

        assert_eq!(state.record_increase(10, 1_200).unwrap(), 100);
        assert_eq!(state.mint_rate_window_amount, 100);
    }

    #[test]
    fn test_set_global_mint_cap_cross_validation() {
        let mut state = create_test_state();
        state.set_mint_rate_limit(1_000, 60).unwrap();

        // A non-zero cap below the active rate limit is rejected
        assert!(state.set_global_mint_cap(999).is_err());
        assert_eq!(state.global_mint_cap, 0);

        assert!(state.set_global_mint_cap(1_000).is_ok());
        assert!(state.set_global_mint_cap(5_000).is_ok());

        // Zero cap (uncapped) is always allowed
        assert!(state.set_global_mint_cap(0).is_ok());
    }

    #[test]
    fn test_set_mint_rate_limit_cross_validation() {
        let mut state = create_test_state();
        state.set_global_mint_cap(1_000).unwrap();

        // A rate limit above the active cap is rejected
        assert!(state.set_mint_rate_limit(1_001, 60).is_err());
        assert_eq!(state.mint_rate_limit, 0);

        assert!(state.set_mint_rate_limit(1_000, 60).is_ok());
        assert_eq!(state.mint_rate_limit, 1_000);
        assert_eq!(state.mint_rate_limit_window, 60);
    }

    #[test]
    fn test_set_mint_rate_limit_window_validation() {
        let mut state = create_test_state();

        assert!(state.set_mint_rate_limit(100, 0).is_err());

        // Disabling forces the window to zero
        state.set_mint_rate_limit(100, 60).unwrap();
        state.set_mint_rate_limit(0, 12_345).unwrap();
        assert_eq!(state.mint_rate_limit, 0);
        assert_eq!(state.mint_rate_limit_window, 0);
    }

    #[test]
    fn test_set_mint_rate_limit_resets_window() {
        let mut state = create_test_state();
        state.set_mint_rate_limit(100, 60).unwrap();
        state.record_increase(80, 1_000).unwrap();
        assert_eq!(state.mint_rate_window_amount, 80);

        state.set_mint_rate_limit(200, 60).unwrap();
        assert_eq!(state.mint_rate_window_start, 0);
        assert_eq!(state.mint_rate_window_amount, 0);
    }

    #[test]
    fn test_override_total_minted() {
        let mut state = create_test_state();
        state.set_mint_rate_limit(100, 60).unwrap();
        state.record_increase(80, 1_000).unwrap();

        state.override_total_minted(1_234).unwrap();
        assert_eq!(state.total_minted, 1_234);
        // The override resets the in-flight window
        assert_eq!(state.mint_rate_window_start, 0);
        assert_eq!(state.mint_rate_window_amount, 0);
    }

    #[test]
    fn test_set_minting_paused_flips_once() {
        let mut state = create_test_state();

        // First transition flips the flag, a repeat is a silent no-op
        assert!(state.set_minting_paused(true));
        assert!(state.minting_paused);
        assert!(!state.set_minting_paused(true));
        assert!(state.minting_paused);

        assert!(state.set_minting_paused(false));
        assert!(!state.minting_paused);
        assert!(!state.set_minting_paused(false));
        assert!(!state.minting_paused);
    }

    #[test]
    fn test_override_total_minted_direction() {
        let mut state = create_test_state();
        state.total_minted = 500;

        assert_eq!(state.override_total_minted(800).unwrap(), Ordering::Greater);
        assert_eq!(state.total_minted, 800);

        assert_eq!(state.override_total_minted(200).unwrap(), Ordering::Less);
        assert_eq!(state.total_minted, 200);
    }

    #[test]
    fn test_override_total_minted_equal_is_noop() {
        let mut state = create_test_state();
        state.set_mint_rate_limit(100, 60).unwrap();
        state.record_increase(80, 1_000).unwrap();

        // Overriding with the current total changes nothing, the
        // in-flight rate window included
        assert_eq!(state.override_total_minted(80).unwrap(), Ordering::Equal);
        assert_eq!(state.total_minted, 80);
        assert_eq!(state.mint_rate_window_start, 1_000);
        assert_eq!(state.mint_rate_window_amount, 80);
    }

    #[test]
    fn test_override_total_minted_respects_cap() {
        let mut state = create_test_state();
        state.set_global_mint_cap(500).unwrap();

        assert!(state.override_total_minted(501).is_err());
        assert_eq!(state.total_minted, 0);

        assert!(state.override_total_minted(500).is_ok());
    }

    proptest! {
        #[test]
        fn test_conservation_over_random_sequences(
            start_total in 0u64..=1_000_000u64,
            ops in prop::collection::vec((any::<bool>(), 0u64..=10_000u64), 0..64),
        ) {
            let mut state = create_test_state();
            state.total_minted = start_total;

            let mut expected = start_total;
            let mut now = 0i64;

            for (is_increase, amount) in ops {
                now += 1;
                if is_increase {
                    if state.record_increase(amount, now).is_ok() {
                        expected += amount;
                    }
                } else if state.record_decrease(amount).is_ok() {
                    expected -= amount;
                }
                prop_assert_eq!(state.total_minted, expected);
            }
        }

        #[test]
        fn test_cap_invariant_holds_after_every_operation(
            cap in 1u64..=1_000_000u64,
            ops in prop::collection::vec((any::<bool>(), 0u64..=100_000u64), 0..64),
        ) {
            let mut state = create_test_state();
            state.global_mint_cap = cap;

            let mut now = 0i64;
            for (is_increase, amount) in ops {
                now += 1;
                if is_increase {
                    let before = state.total_minted;
                    if state.record_increase(amount, now).is_err() {
                        prop_assert_eq!(state.total_minted, before);
                    }
                } else {
                    let _ = state.record_decrease(amount);
                }
                prop_assert!(state.total_minted <= cap);
            }
        }

        #[test]
        fn test_window_amount_bounded_by_limit(
            limit in 1u64..=100_000u64,
            amounts in prop::collection::vec(0u64..=50_000u64, 0..64),
        ) {
            let mut state = create_test_state();
            state.set_mint_rate_limit(limit, 3600).unwrap();

            let mut now = 0i64;
            for amount in amounts {
                now += 60;
                let _ = state.record_increase(amount, now);
                prop_assert!(state.mint_rate_window_amount <= limit);
            }
        }
    }
}
