use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, TransferChecked};

use crate::constants::{BENEFICIARIES_SEED, LEDGER_SEED, VAULT_SEED};
use crate::error::VestingError;
use crate::state::{BeneficiaryTable, VestingLedger};

pub fn claim_token_handler(ctx: Context<ClaimToken>) -> Result<()> {
    // Vault authority for the signed transfer below.
    let ledger_ai = ctx.accounts.ledger.to_account_info();
    let ledger_bump = ctx.accounts.ledger.bump;
    let beneficiary = ctx.accounts.beneficiary.key();

    let ledger = &mut ctx.accounts.ledger;
    require_keys_eq!(ctx.accounts.mint.key(), ledger.mint, VestingError::InvalidTokenMint);
    require_keys_eq!(
        ctx.accounts.beneficiary_token_account.mint,
        ledger.mint,
        VestingError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.beneficiary_token_account.owner,
        beneficiary,
        VestingError::InvalidTokenAccount
    );

    let now = Clock::get()?.unix_timestamp;
    let mut table = ctx.accounts.beneficiaries.load_mut()?;
    let amount = ledger.claim(&mut table, &beneficiary, now)?;

    require!(
        ctx.accounts.vault.amount >= amount,
        VestingError::InsufficientVaultBalance
    );

    // Bookkeeping above and this transfer commit or revert together with the transaction.
    let signer_seeds: &[&[&[u8]]] = &[&[LEDGER_SEED, &[ledger_bump]]];
    token::transfer_checked(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            TransferChecked {
                from: ctx.accounts.vault.to_account_info(),
                mint: ctx.accounts.mint.to_account_info(),
                to: ctx.accounts.beneficiary_token_account.to_account_info(),
                authority: ledger_ai,
            },
            signer_seeds,
        ),
        amount,
        ctx.accounts.mint.decimals,
    )?;

    let entry = table
        .find(&beneficiary)
        .ok_or(VestingError::NothingToClaim)?;
    emit!(TokensClaimed {
        beneficiary,
        amount,
        paid_total: entry.paid,
        accumulated: entry.accumulated,
        claimed_at: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ClaimToken<'info> {
    #[account(mut, seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, VestingLedger>,

    #[account(
        mut,
        seeds = [BENEFICIARIES_SEED, ledger.key().as_ref()],
        bump
    )]
    pub beneficiaries: AccountLoader<'info, BeneficiaryTable>,

    #[account(
        mut,
        seeds = [VAULT_SEED, ledger.key().as_ref()],
        bump = ledger.vault_bump,
        constraint = vault.mint == ledger.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub beneficiary_token_account: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    pub beneficiary: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensClaimed {
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub paid_total: u64,
    pub accumulated: u64,
    pub claimed_at: i64,
}
