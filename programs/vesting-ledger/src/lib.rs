//! Custody ledger for a pooled SPL token balance.
//!
//! The releaser deposits into the pool and pays each recipient exactly once,
//! with an amount it chooses. The owner rotates the releaser, pauses
//! releases and approves upgrades.

use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

declare_id!("7624cFUkGTgU6AF26U8ftkaPTfFXHzqojYUbi5iCZZbC");

#[program]
pub mod vesting_ledger {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, owner: Pubkey, releaser: Pubkey) -> Result<()> {
        instructions::initialize::initialize(ctx, owner, releaser)
    }

    pub fn transfer_ownership(ctx: Context<TransferOwnership>, candidate: Pubkey) -> Result<()> {
        instructions::transfer_ownership::transfer_ownership(ctx, candidate)
    }

    pub fn accept_ownership(ctx: Context<AcceptOwnership>) -> Result<()> {
        instructions::accept_ownership::accept_ownership(ctx)
    }

    pub fn update_releaser(ctx: Context<UpdateReleaser>, new_releaser: Pubkey) -> Result<()> {
        instructions::update_releaser::update_releaser(ctx, new_releaser)
    }

    pub fn pause(ctx: Context<Pause>) -> Result<()> {
        instructions::pause::pause(ctx)
    }

    pub fn unpause(ctx: Context<Unpause>) -> Result<()> {
        instructions::unpause::unpause(ctx)
    }

    /// Releaser deposit into the pool. Not gated by pause.
    pub fn increase_vesting_amount(ctx: Context<IncreaseVestingAmount>, amount: u64) -> Result<()> {
        instructions::increase_vesting_amount::increase_vesting_amount(ctx, amount)
    }

    /// Releaser payout to `recipient`, once per recipient. Gated by pause.
    pub fn claim(ctx: Context<Claim>, recipient: Pubkey, amount: u64) -> Result<()> {
        instructions::claim::claim(ctx, recipient, amount)
    }

    pub fn authorize_upgrade(ctx: Context<AuthorizeUpgrade>, new_implementation: Pubkey) -> Result<()> {
        instructions::authorize_upgrade::authorize_upgrade(ctx, new_implementation)
    }

    pub fn get_ledger_summary(ctx: Context<GetLedgerSummary>) -> Result<LedgerSummary> {
        instructions::views::get_ledger_summary(ctx)
    }

    pub fn get_claimed_amount(ctx: Context<GetClaimedAmount>, recipient: Pubkey) -> Result<u64> {
        instructions::views::get_claimed_amount(ctx, recipient)
    }
}
