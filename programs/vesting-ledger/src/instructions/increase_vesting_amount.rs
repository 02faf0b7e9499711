use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{LEDGER_STATE_SEED, VAULT_SEED};
use crate::error::VestingError;
use crate::state::LedgerState;
use crate::utils::token;

/// Deposits `amount` from the releaser into the pool. Allowed while paused.
pub fn increase_vesting_amount(ctx: Context<IncreaseVestingAmount>, amount: u64) -> Result<()> {
    let releaser = ctx.accounts.releaser.key();
    let total_committed = ctx.accounts.ledger_state.commit_deposit(&releaser, amount)?;

    let source = &ctx.accounts.releaser_token_account;
    ctx.accounts
        .ledger_state
        .check_token_account(&source.mint, &source.owner, &releaser)?;

    token::pull_from(
        &ctx.accounts.token_program,
        &ctx.accounts.releaser_token_account,
        &ctx.accounts.vault,
        &ctx.accounts.releaser,
        amount,
    )?;

    ctx.accounts.vault.reload()?;

    emit!(VestingAmountIncreased {
        releaser,
        amount,
        total_committed,
        vault_balance: ctx.accounts.vault.amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct IncreaseVestingAmount<'info> {
    #[account(mut, seeds = [LEDGER_STATE_SEED], bump = ledger_state.bump)]
    pub ledger_state: Account<'info, LedgerState>,

    #[account(
        mut,
        seeds = [VAULT_SEED, ledger_state.key().as_ref()],
        bump = ledger_state.vault_bump,
        constraint = vault.mint == ledger_state.asset @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub releaser_token_account: Account<'info, TokenAccount>,

    pub releaser: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct VestingAmountIncreased {
    pub releaser: Pubkey,
    pub amount: u64,
    pub total_committed: u64,
    pub vault_balance: u64,
}
