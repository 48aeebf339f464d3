use anchor_lang::prelude::*;

use crate::constants::MAX_ALLOCATIONS_PER_BATCH;
use crate::error::VestingError;
use crate::state::{BeneficiaryTable, ScheduleConfig};
use crate::utils::vesting;

/// Single vesting ledger PDA.
#[account]
#[derive(InitSpace, Debug)]
pub struct VestingLedger {
    /// Admin authority; the only signer allowed to register and start.
    pub admin: Pubkey,
    /// Vested token mint.
    pub mint: Pubkey,
    /// Custody token account (authority = this PDA).
    pub vault: Pubkey,
    pub bump: u8,
    pub vault_bump: u8,
    pub schedule: ScheduleConfig,
    /// Countdown latch. Flips false -> true exactly once.
    pub started: bool,
    /// Cliff end; meaningful only once `started`.
    pub vesting_start: i64,
    /// `vesting_start + vesting_seconds`; meaningful only once `started`.
    pub vesting_end: i64,
    /// Sum of every beneficiary's `accumulated`.
    pub total_committed: u64,
    /// Sum of every beneficiary's `paid`.
    pub total_paid: u64,
}

/// Instruction input (beneficiary + amount to add).
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct AllocationInput {
    pub beneficiary: Pubkey,
    pub amount: u64,
}

impl VestingLedger {
    pub fn ensure_admin(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.admin, VestingError::Unauthorized);
        Ok(())
    }

    /// Hands the admin role to `new_admin`. `ledger_key` is this account's
    /// own address, which can never sign.
    pub fn transfer_admin(
        &mut self,
        caller: &Pubkey,
        ledger_key: &Pubkey,
        new_admin: Pubkey,
    ) -> Result<Pubkey> {
        self.ensure_admin(caller)?;
        require!(new_admin != Pubkey::default(), VestingError::InvalidPubkey);
        require!(new_admin != *ledger_key, VestingError::InvalidPubkey);

        Ok(std::mem::replace(&mut self.admin, new_admin))
    }

    /// Tokens committed to beneficiaries but not yet paid out.
    pub fn outstanding(&self) -> Result<u64> {
        self.total_committed
            .checked_sub(self.total_paid)
            .ok_or_else(|| VestingError::MathOverflow.into())
    }

    /// Credits every input to its beneficiary. All checks run before the
    /// first write, so a rejected batch leaves the ledger untouched.
    /// Returns the batch total.
    pub fn register_allocations(
        &mut self,
        table: &mut BeneficiaryTable,
        caller: &Pubkey,
        inputs: &[AllocationInput],
        vault_balance: u64,
    ) -> Result<u64> {
        self.ensure_admin(caller)?;
        require!(
            inputs.len() <= MAX_ALLOCATIONS_PER_BATCH,
            VestingError::BatchTooLarge
        );

        let mut sum: u64 = 0;
        let mut new_beneficiaries: Vec<Pubkey> = Vec::new();
        for input in inputs {
            require!(
                input.beneficiary != Pubkey::default(),
                VestingError::InvalidPubkey
            );
            require!(input.amount > 0, VestingError::InvalidAllocation);
            sum = sum
                .checked_add(input.amount)
                .ok_or(VestingError::MathOverflow)?;
            if table.find(&input.beneficiary).is_none()
                && !new_beneficiaries.contains(&input.beneficiary)
            {
                new_beneficiaries.push(input.beneficiary);
            }
        }

        let required = (self.outstanding()? as u128)
            .checked_add(sum as u128)
            .ok_or(VestingError::MathOverflow)?;
        require!(
            required <= vault_balance as u128,
            VestingError::InsufficientFunds
        );
        require!(
            new_beneficiaries.len() <= table.remaining_capacity(),
            VestingError::BeneficiaryTableFull
        );
        let total_committed = self
            .total_committed
            .checked_add(sum)
            .ok_or(VestingError::MathOverflow)?;

        for input in inputs {
            table.credit(input.beneficiary, input.amount)?;
        }
        self.total_committed = total_committed;

        Ok(sum)
    }

    /// Latches `started` and fixes the vesting window relative to `now`.
    pub fn start_countdown(&mut self, caller: &Pubkey, now: i64) -> Result<()> {
        self.ensure_admin(caller)?;
        require!(!self.started, VestingError::AlreadyStarted);

        let vesting_start = now
            .checked_add(self.schedule.cliff_seconds()?)
            .ok_or(VestingError::MathOverflow)?;
        let vesting_end = vesting_start
            .checked_add(self.schedule.vesting_seconds()?)
            .ok_or(VestingError::MathOverflow)?;

        self.started = true;
        self.vesting_start = vesting_start;
        self.vesting_end = vesting_end;
        Ok(())
    }

    /// Claimable amount for `beneficiary` at `now`. Unknown beneficiaries
    /// read as an empty allocation.
    pub fn available_amount(
        &self,
        table: &BeneficiaryTable,
        beneficiary: &Pubkey,
        now: i64,
    ) -> Result<u64> {
        if !self.started {
            return Ok(0);
        }
        match table.find(beneficiary) {
            Some(entry) => vesting::claimable_amount(
                entry.accumulated,
                entry.paid,
                now,
                self.vesting_start,
                self.vesting_end,
            ),
            None => Ok(0),
        }
    }

    /// Books a claim for `caller` and returns the amount the caller must
    /// receive. The token transfer has to happen in the same transaction.
    pub fn claim(&mut self, table: &mut BeneficiaryTable, caller: &Pubkey, now: i64) -> Result<u64> {
        let available = self.available_amount(table, caller, now)?;
        require!(available > 0, VestingError::NothingToClaim);

        let total_paid = self
            .total_paid
            .checked_add(available)
            .ok_or(VestingError::MathOverflow)?;
        let entry = table
            .find_mut(caller)
            .ok_or(VestingError::NothingToClaim)?;
        let paid = entry
            .paid
            .checked_add(available)
            .ok_or(VestingError::MathOverflow)?;
        require!(paid <= entry.accumulated, VestingError::MathOverflow);

        entry.paid = paid;
        self.total_paid = total_paid;
        Ok(available)
    }
}
