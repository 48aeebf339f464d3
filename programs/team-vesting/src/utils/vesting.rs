//! Linear vesting accrual with a cliff.
//! - before `vesting_start`: nothing has vested
//! - from `vesting_end` on: the whole allocation has vested
//! - in between: floor(accumulated * elapsed / duration), never rounded up

use anchor_lang::prelude::*;

use crate::error::VestingError;

/// Amount of `accumulated` vested at `now`.
pub fn vested_amount(
    accumulated: u64,
    now: i64,
    vesting_start: i64,
    vesting_end: i64,
) -> Result<u64> {
    if now < vesting_start {
        return Ok(0);
    }
    if now >= vesting_end {
        return Ok(accumulated);
    }

    let elapsed = now
        .checked_sub(vesting_start)
        .ok_or(VestingError::MathOverflow)?;
    let duration = vesting_end
        .checked_sub(vesting_start)
        .ok_or(VestingError::MathOverflow)?;

    let v = (accumulated as u128)
        .checked_mul(elapsed as u128)
        .ok_or(VestingError::MathOverflow)?
        .checked_div(duration as u128)
        .ok_or(VestingError::MathOverflow)?;
    Ok(u64::try_from(v).map_err(|_| VestingError::MathOverflow)?)
}

/// Vested minus already paid, floored at zero.
pub fn claimable_amount(
    accumulated: u64,
    paid: u64,
    now: i64,
    vesting_start: i64,
    vesting_end: i64,
) -> Result<u64> {
    let vested = vested_amount(accumulated, now, vesting_start, vesting_end)?;
    Ok(vested.saturating_sub(paid))
}
