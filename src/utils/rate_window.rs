use anchor_lang::prelude::*;

use crate::errors::GuardError;

/// Check an issuance amount against the fixed-window mint rate limit and
/// return the candidate `(window_start, window_amount)` pair. The caller
/// commits the pair only once every other check on the operation has passed,
/// so a later failure leaves the window untouched.
///
/// The window is fixed, not sliding: up to `rate_limit` can be issued just
/// before a window boundary and up to `rate_limit` again just after, so
/// ~2x the nominal limit can cross a boundary. `now` comes from the cluster
/// clock, which is coarse and only approximately monotonic; a timestamp
/// behind `window_start` is treated as still inside the window.
///
/// # Arguments
/// * `rate_limit` - The maximum issuance per window; 0 disables limiting.
/// * `limit_window` - The window length in seconds.
/// * `window_start` - The start timestamp of the current window.
/// * `window_amount` - The issuance attributed to the current window.
/// * `now` - The current timestamp.
/// * `amount` - The issuance amount being checked.
/// # Returns
/// * `Result<(i64, u64)>` - The candidate window start and window amount.
#[inline(always)]
pub fn check_rate_window(
    rate_limit: u64,
    limit_window: u64,
    window_start: i64,
    window_amount: u64,
    now: i64,
    amount: u64,
) -> Result<(i64, u64)> {
    // Disabled limiter tracks nothing
    if rate_limit == 0 {
        return Ok((window_start, window_amount));
    }

    let elapsed = now.saturating_sub(window_start);

    if elapsed >= 0 && elapsed as u64 >= limit_window {
        // Window boundary crossed, the amount opens a fresh window
        if amount > rate_limit {
            msg!(
                "Mint rate limit exceeded: attempted {} > limit {} in a fresh window",
                amount,
                rate_limit
            );
            return Err(GuardError::RateLimitExceeded.into());
        }
        Ok((now, amount))
    } else {
        let next_window_amount = window_amount
            .checked_add(amount)
            .ok_or(GuardError::MathOverflow)?;

        if next_window_amount > rate_limit {
            msg!(
                "Mint rate limit exceeded: attempted {} > limit {}. window_amount={}, window_start={}, elapsed={}",
                next_window_amount,
                rate_limit,
                window_amount,
                window_start,
                elapsed
            );
            return Err(GuardError::RateLimitExceeded.into());
        }
        Ok((window_start, next_window_amount))
    }
}
