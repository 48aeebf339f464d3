use anchor_lang::prelude::*;

use crate::constants::LEDGER_SEED;
use crate::state::VestingLedger;

pub fn transfer_admin_handler(ctx: Context<TransferAdmin>, new_admin: Pubkey) -> Result<()> {
    let ledger_key = ctx.accounts.ledger.key();
    let ledger = &mut ctx.accounts.ledger;
    let old_admin = ledger.transfer_admin(&ctx.accounts.admin.key(), &ledger_key, new_admin)?;

    msg!("Admin transferred: {} -> {}", old_admin, new_admin);
    emit!(AdminTransferred {
        old_admin,
        new_admin,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct TransferAdmin<'info> {
    #[account(mut, seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, VestingLedger>,

    pub admin: Signer<'info>,
}

#[event]
pub struct AdminTransferred {
    pub old_admin: Pubkey,
    pub new_admin: Pubkey,
}
