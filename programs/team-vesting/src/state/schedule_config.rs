use anchor_lang::prelude::*;

use crate::constants::{CLIFF_MONTHS, MONTH, VESTING_MONTHS_COUNT};
use crate::error::VestingError;

/// Cliff and vesting lengths, fixed when the ledger is initialized.
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduleConfig {
    pub cliff_months: u32,
    pub vesting_months: u32,
    pub seconds_per_month: u32,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            cliff_months: CLIFF_MONTHS,
            vesting_months: VESTING_MONTHS_COUNT,
            seconds_per_month: MONTH,
        }
    }
}

impl ScheduleConfig {
    pub fn cliff_seconds(&self) -> Result<i64> {
        months_to_seconds(self.cliff_months, self.seconds_per_month)
    }

    pub fn vesting_seconds(&self) -> Result<i64> {
        months_to_seconds(self.vesting_months, self.seconds_per_month)
    }

    /// A zero-length vesting window would make the linear formula divide by zero.
    pub fn validate(&self) -> Result<()> {
        require!(self.vesting_months > 0, VestingError::InvalidConfig);
        require!(self.seconds_per_month > 0, VestingError::InvalidConfig);
        self.cliff_seconds()?
            .checked_add(self.vesting_seconds()?)
            .ok_or(VestingError::InvalidConfig)?;
        Ok(())
    }
}

fn months_to_seconds(months: u32, seconds_per_month: u32) -> Result<i64> {
    (months as i64)
        .checked_mul(seconds_per_month as i64)
        .ok_or_else(|| VestingError::InvalidConfig.into())
}
