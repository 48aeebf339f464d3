use anchor_lang::prelude::*;

use crate::constants::{BENEFICIARIES_SEED, LEDGER_SEED};
use crate::state::{BeneficiaryTable, VestingLedger};

/// Read-only quote. The amount is both emitted and returned as return data.
pub fn get_available_amount_handler(ctx: Context<GetAvailableAmount>, beneficiary: Pubkey) -> Result<u64> {
    let ledger = &ctx.accounts.ledger;
    let now = Clock::get()?.unix_timestamp;

    let table = ctx.accounts.beneficiaries.load()?;
    let available = ledger.available_amount(&table, &beneficiary, now)?;
    let (accumulated, paid) = table
        .find(&beneficiary)
        .map(|e| (e.accumulated, e.paid))
        .unwrap_or_default();

    emit!(AvailableAmountQuoted {
        beneficiary,
        now,
        accumulated,
        paid,
        available,
    });

    Ok(available)
}

#[derive(Accounts)]
pub struct GetAvailableAmount<'info> {
    #[account(seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, VestingLedger>,

    #[account(
        seeds = [BENEFICIARIES_SEED, ledger.key().as_ref()],
        bump
    )]
    pub beneficiaries: AccountLoader<'info, BeneficiaryTable>,
}

#[event]
pub struct AvailableAmountQuoted {
    pub beneficiary: Pubkey,
    pub now: i64,
    pub accumulated: u64,
    pub paid: u64,
    pub available: u64,
}
