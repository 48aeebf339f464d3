
use std::collections::HashMap;

use anchor_lang::error::Error;
use anchor_lang::prelude::*;
use bytemuck::Zeroable;

use crate::constants::LEDGER_SEED;
use crate::error::VestingError;
use crate::state::{AllocationInput, BeneficiaryTable, ScheduleConfig, VestingLedger};

/// In-process stand-in for the cluster: a settable clock, a custody vault
/// and per-wallet token balances. Every mutating call behaves like a
/// transaction: state is only committed when the whole call succeeds.
pub struct Harness {
    pub admin: Pubkey,
    /// Address of the ledger PDA.
    pub ledger_key: Pubkey,
    pub ledger: VestingLedger,
    pub table: BeneficiaryTable,
    pub vault_balance: u64,
    pub balances: HashMap<Pubkey, u64>,
    pub now: i64,
    /// When set, the next token transfer out of the vault fails.
    pub fail_next_transfer: bool,
}

pub const GENESIS: i64 = 1_700_000_000;

impl Harness {
    pub fn new() -> Self {
        Self::with_schedule(ScheduleConfig::default())
    }

    pub fn with_schedule(schedule: ScheduleConfig) -> Self {
        let admin = Pubkey::new_unique();
        let (ledger_key, bump) = Pubkey::find_program_address(&[LEDGER_SEED], &crate::ID);
        let ledger = VestingLedger {
            admin,
            mint: Pubkey::new_unique(),
            vault: Pubkey::new_unique(),
            bump,
            vault_bump: 254,
            schedule,
            started: false,
            vesting_start: 0,
            vesting_end: 0,
            total_committed: 0,
            total_paid: 0,
        };
        Self {
            admin,
            ledger_key,
            ledger,
            table: BeneficiaryTable::zeroed(),
            vault_balance: 0,
            balances: HashMap::new(),
            now: GENESIS,
            fail_next_transfer: false,
        }
    }

    /// Moves the clock forward without producing a block.
    pub fn increase_time(&mut self, seconds: i64) {
        self.now += seconds;
    }

    /// Produces the next block, one second after the previous one.
    pub fn mine(&mut self) {
        self.now += 1;
    }

    pub fn fund_vault(&mut self, amount: u64) {
        self.vault_balance += amount;
    }

    pub fn balance_of(&self, who: &Pubkey) -> u64 {
        self.balances.get(who).copied().unwrap_or_default()
    }

    pub fn accumulated(&self, who: &Pubkey) -> u64 {
        self.table.find(who).map(|e| e.accumulated).unwrap_or_default()
    }

    pub fn paid(&self, who: &Pubkey) -> u64 {
        self.table.find(who).map(|e| e.paid).unwrap_or_default()
    }

    pub fn register(&mut self, caller: Pubkey, pairs: &[(Pubkey, u64)]) -> Result<u64> {
        let inputs: Vec<AllocationInput> = pairs
            .iter()
            .map(|&(beneficiary, amount)| AllocationInput {
                beneficiary,
                amount,
            })
            .collect();

        let mut ledger = self.ledger.clone();
        let mut table = self.table;
        let sum = ledger.register_allocations(&mut table, &caller, &inputs, self.vault_balance)?;
        self.ledger = ledger;
        self.table = table;
        Ok(sum)
    }

    pub fn start_countdown(&mut self, caller: Pubkey) -> Result<()> {
        let mut ledger = self.ledger.clone();
        ledger.start_countdown(&caller, self.now)?;
        self.ledger = ledger;
        Ok(())
    }

    pub fn transfer_admin(&mut self, caller: Pubkey, new_admin: Pubkey) -> Result<()> {
        let mut ledger = self.ledger.clone();
        ledger.transfer_admin(&caller, &self.ledger_key, new_admin)?;
        self.ledger = ledger;
        self.admin = new_admin;
        Ok(())
    }

    pub fn available(&self, who: &Pubkey) -> u64 {
        self.ledger
            .available_amount(&self.table, who, self.now)
            .unwrap()
    }

    /// Claim as a transaction: bookkeeping and vault transfer land together
    /// or not at all.
    pub fn claim(&mut self, caller: Pubkey) -> Result<u64> {
        let mut ledger = self.ledger.clone();
        let mut table = self.table;
        let amount = ledger.claim(&mut table, &caller, self.now)?;

        if std::mem::take(&mut self.fail_next_transfer) {
            return Err(ProgramError::Custom(1).into());
        }
        require!(
            self.vault_balance >= amount,
            VestingError::InsufficientVaultBalance
        );

        self.vault_balance -= amount;
        *self.balances.entry(caller).or_default() += amount;
        self.ledger = ledger;
        self.table = table;
        Ok(amount)
    }
}

/// Asserts that `res` failed with the given program error.
pub fn assert_vesting_err<T: std::fmt::Debug>(res: Result<T>, expected: VestingError) {
    match res {
        Err(Error::AnchorError(e)) => assert_eq!(
            e.error_code_number,
            u32::from(expected),
            "expected {expected:?}, got {}",
            e.error_name
        ),
        other => panic!("expected {expected:?}, got {other:?}"),
    }
}
