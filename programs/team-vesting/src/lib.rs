#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

pub use constants::*;
pub use error::*;
pub use instructions::*;
pub use state::*;

declare_id!("2id4vQER4aXc9yfisgr8PYyRVsms4BLpKjkUqHpNgqRe");

/// Team vesting ledger.
///
/// One global schedule: the admin registers allocations against tokens held
/// in the vault, then starts the countdown once. Nothing is claimable until
/// the cliff ends; afterwards each allocation vests linearly until the end
/// of the vesting window. Beneficiaries claim whatever has accrued since
/// their last claim.
#[program]
pub mod team_vesting {
    use super::*;

    pub fn initialize_ledger(ctx: Context<InitializeLedger>, schedule: ScheduleConfig) -> Result<()> {
        instructions::initialize_ledger::initialize_ledger_handler(ctx, schedule)
    }

    pub fn deposit_tokens(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
        instructions::deposit_tokens::deposit_tokens_handler(ctx, amount)
    }

    /// Admin only. Fails with `InsufficientFunds` when the vault cannot
    /// cover every unpaid allocation plus this batch.
    pub fn register_allocations(
        ctx: Context<RegisterAllocations>,
        inputs: Vec<AllocationInput>,
    ) -> Result<()> {
        instructions::register_allocations::register_allocations_handler(ctx, inputs)
    }

    /// Admin only, one-shot.
    pub fn start_countdown(ctx: Context<StartCountdown>) -> Result<()> {
        instructions::start_countdown::start_countdown_handler(ctx)
    }

    pub fn get_available_amount(ctx: Context<GetAvailableAmount>, beneficiary: Pubkey) -> Result<u64> {
        instructions::get_available_amount::get_available_amount_handler(ctx, beneficiary)
    }

    pub fn claim_token(ctx: Context<ClaimToken>) -> Result<()> {
        instructions::claim_token::claim_token_handler(ctx)
    }

    pub fn transfer_admin(ctx: Context<TransferAdmin>, new_admin: Pubkey) -> Result<()> {
        instructions::transfer_admin::transfer_admin_handler(ctx, new_admin)
    }
}
