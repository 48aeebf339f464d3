use anchor_lang::prelude::*;

use crate::constants::LEDGER_SEED;
use crate::state::VestingLedger;

pub fn start_countdown_handler(ctx: Context<StartCountdown>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let ledger = &mut ctx.accounts.ledger;
    ledger.start_countdown(&ctx.accounts.admin.key(), now)?;

    msg!(
        "Countdown started at {}: vesting {}..{}",
        now,
        ledger.vesting_start,
        ledger.vesting_end
    );
    emit!(CountdownStarted {
        admin: ledger.admin,
        started_at: now,
        vesting_start: ledger.vesting_start,
        vesting_end: ledger.vesting_end,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct StartCountdown<'info> {
    #[account(mut, seeds = [LEDGER_SEED], bump = ledger.bump)]
    pub ledger: Account<'info, VestingLedger>,
    pub admin: Signer<'info>,
}

#[event]
pub struct CountdownStarted {
    pub admin: Pubkey,
    pub started_at: i64,
    pub vesting_start: i64,
    pub vesting_end: i64,
}
