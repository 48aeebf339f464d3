use anchor_lang::prelude::*;

/// Custom error codes for the team vesting ledger.
#[error_code]
pub enum VestingError {
    #[msg("Unauthorized: admin signature required")]
    Unauthorized,

    #[msg("Total tokens to pay would exceed the vault balance")]
    InsufficientFunds,

    #[msg("Countdown is already started")]
    AlreadyStarted,

    #[msg("Not enough tokens to claim")]
    NothingToClaim,

    #[msg("Invalid schedule configuration")]
    InvalidConfig,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Invalid allocation (must be > 0)")]
    InvalidAllocation,

    #[msg("Invalid amount (must be > 0)")]
    InvalidAmount,

    #[msg("Batch size too large")]
    BatchTooLarge,

    #[msg("Beneficiary table is full")]
    BeneficiaryTableFull,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance,

    #[msg("Math overflow")]
    MathOverflow,
}
