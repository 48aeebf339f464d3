use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::constants::{BENEFICIARIES_SEED, LEDGER_SEED, VAULT_SEED};
use crate::state::{AllocationInput, BeneficiaryTable, VestingLedger};

pub fn register_allocations_handler(
    ctx: Context<RegisterAllocations>,
    inputs: Vec<AllocationInput>,
) -> Result<()> {
    let vault_balance = ctx.accounts.vault.amount;
    let admin = ctx.accounts.admin.key();
    let ledger = &mut ctx.accounts.ledger;
    let mut table = ctx.accounts.beneficiaries.load_mut()?;

    let amount = ledger.register_allocations(&mut table, &admin, &inputs, vault_balance)?;

    msg!(
        "Registered {} allocation(s), {} token(s); committed {}",
        inputs.len(),
        amount,
        ledger.total_committed
    );
    emit!(AllocationsRegistered {
        admin,
        count: inputs.len() as u8,
        amount,
        total_committed: ledger.total_committed,
        beneficiary_count: table.count,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct RegisterAllocations<'info> {
    #[account(mut, seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, VestingLedger>,

    #[account(
        mut,
        seeds = [BENEFICIARIES_SEED, ledger.key().as_ref()],
        bump
    )]
    pub beneficiaries: AccountLoader<'info, BeneficiaryTable>,

    #[account(
        seeds = [VAULT_SEED, ledger.key().as_ref()],
        bump = ledger.vault_bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub admin: Signer<'info>,
}

#[event]
pub struct AllocationsRegistered {
    pub admin: Pubkey,
    pub count: u8,
    pub amount: u64,
    pub total_committed: u64,
    pub beneficiary_count: u64,
}
