use anchor_lang::prelude::*;

/// Custom error codes for the vesting ledger program.
#[error_code]
pub enum VestingError {
    #[msg("Unauthorized: owner signature required")]
    UnauthorizedOwner,

    #[msg("Unauthorized: only the pending owner may accept ownership")]
    UnauthorizedPendingOwner,

    #[msg("Unauthorized: releaser signature required")]
    UnauthorizedReleaserAction,

    #[msg("Unauthorized: only the program upgrade authority may initialize")]
    UnauthorizedInitializer,

    #[msg("Ledger is already initialized")]
    AlreadyInitialized,

    #[msg("Ledger is not initialized")]
    NotInitialized,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Invalid amount (must be > 0)")]
    InvalidAmount,

    #[msg("Ledger is paused")]
    EnforcedPause,

    #[msg("Ledger is not paused")]
    ExpectedPause,

    #[msg("Recipient has already claimed")]
    AlreadyClaimed,

    #[msg("Not enough uncommitted funds in the pool")]
    NotEnoughFunds,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Math overflow")]
    MathOverflow,
}
