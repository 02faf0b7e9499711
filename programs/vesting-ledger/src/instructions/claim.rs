use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{LEDGER_STATE_SEED, RELEASE_SEED, VAULT_SEED};
use crate::error::VestingError;
use crate::state::{LedgerState, ReleaseRecord};
use crate::utils::token;

/// One-shot release of `amount` to `recipient`.
///
/// The ledger is booked first and the payout CPI runs last; if the transfer
/// fails the runtime discards the booking together with it.
pub fn claim(ctx: Context<Claim>, recipient: Pubkey, amount: u64) -> Result<()> {
    // Capture before the mutable borrows below.
    let ledger_state_ai = ctx.accounts.ledger_state.to_account_info();
    let record_bump = ctx.bumps.release_record;
    let releaser = ctx.accounts.releaser.key();

    let total_released = ctx.accounts.ledger_state.commit_release(
        &releaser,
        &mut ctx.accounts.release_record,
        recipient,
        amount,
    )?;
    ctx.accounts.release_record.bump = record_bump;

    let destination = &ctx.accounts.recipient_token_account;
    ctx.accounts
        .ledger_state
        .check_token_account(&destination.mint, &destination.owner, &recipient)?;

    token::push_to(
        &ctx.accounts.token_program,
        &ctx.accounts.vault,
        &ctx.accounts.recipient_token_account,
        ledger_state_ai,
        ctx.accounts.ledger_state.bump,
        amount,
    )?;

    emit!(Claimed {
        recipient,
        amount,
        total_released,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(recipient: Pubkey)]
pub struct Claim<'info> {
    #[account(mut, seeds = [LEDGER_STATE_SEED], bump = ledger_state.bump)]
    pub ledger_state: Account<'info, LedgerState>,

    #[account(
        init_if_needed,
        payer = releaser,
        space = 8 + ReleaseRecord::SIZE,
        seeds = [RELEASE_SEED, recipient.as_ref()],
        bump
    )]
    pub release_record: Account<'info, ReleaseRecord>,

    #[account(
        mut,
        seeds = [VAULT_SEED, ledger_state.key().as_ref()],
        bump = ledger_state.vault_bump,
        constraint = vault.mint == ledger_state.asset @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub recipient_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub releaser: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[event]
pub struct Claimed {
    pub recipient: Pubkey,
    pub amount: u64,
    pub total_released: u64,
}
