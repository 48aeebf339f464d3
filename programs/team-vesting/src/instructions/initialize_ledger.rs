use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{BENEFICIARIES_SEED, LEDGER_SEED, VAULT_SEED};
use crate::state::{BeneficiaryTable, ScheduleConfig, VestingLedger};

pub fn initialize_ledger_handler(ctx: Context<InitializeLedger>, schedule: ScheduleConfig) -> Result<()> {
    schedule.validate()?;

    let ledger = &mut ctx.accounts.ledger;
    ledger.admin = ctx.accounts.admin.key();
    ledger.mint = ctx.accounts.mint.key();
    ledger.vault = ctx.accounts.vault.key();
    ledger.bump = ctx.bumps.ledger;
    ledger.vault_bump = ctx.bumps.vault;
    ledger.schedule = schedule;
    ledger.started = false;
    ledger.vesting_start = 0;
    ledger.vesting_end = 0;
    ledger.total_committed = 0;
    ledger.total_paid = 0;

    // Table starts empty; zeroed entries past `count` are never read.
    let mut table = ctx.accounts.beneficiaries.load_init()?;
    table.count = 0;

    msg!(
        "Vesting ledger initialized: cliff {} months, vesting {} months",
        schedule.cliff_months,
        schedule.vesting_months
    );
    emit!(LedgerInitialized {
        admin: ledger.admin,
        mint: ledger.mint,
        vault: ledger.vault,
        cliff_months: schedule.cliff_months,
        vesting_months: schedule.vesting_months,
        seconds_per_month: schedule.seconds_per_month,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeLedger<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + VestingLedger::INIT_SPACE,
        seeds = [LEDGER_SEED],
        bump
    )]
    pub ledger: Account<'info, VestingLedger>,

    #[account(
        init,
        payer = admin,
        space = BeneficiaryTable::SPACE,
        seeds = [BENEFICIARIES_SEED, ledger.key().as_ref()],
        bump
    )]
    pub beneficiaries: AccountLoader<'info, BeneficiaryTable>,

    #[account(
        init,
        payer = admin,
        token::mint = mint,
        token::authority = ledger,
        seeds = [VAULT_SEED, ledger.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct LedgerInitialized {
    pub admin: Pubkey,
    pub mint: Pubkey,
    pub vault: Pubkey,
    pub cliff_months: u32,
    pub vesting_months: u32,
    pub seconds_per_month: u32,
}
