//! Program-wide constants.

/// Cliff length in months, counted from the countdown start.
pub const CLIFF_MONTHS: u32 = 6;

/// Length of the linear vesting window in months, counted from the cliff.
pub const VESTING_MONTHS_COUNT: u32 = 24;

/// Seconds per month (365 days / 12).
pub const MONTH: u32 = 2_628_000;

/// Max beneficiaries stored in the beneficiary table PDA.
pub const MAX_BENEFICIARIES: usize = 128;

/// Max allocations accepted per `register_allocations` call.
pub const MAX_ALLOCATIONS_PER_BATCH: usize = 16;

pub const LEDGER_SEED: &[u8] = b"vesting_ledger";
pub const BENEFICIARIES_SEED: &[u8] = b"beneficiaries";
pub const VAULT_SEED: &[u8] = b"vault";
