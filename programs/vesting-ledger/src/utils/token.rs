//! SPL Token CPIs moving the pooled asset in and out of ledger custody.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::LEDGER_STATE_SEED;

/// Pulls `amount` from `from` into the vault. `authority` must be the owner
/// or an approved delegate of `from`; the token program rejects anything
/// else, as well as insufficient balances.
pub fn pull_from<'info>(
    token_program: &Program<'info, Token>,
    from: &Account<'info, TokenAccount>,
    vault: &Account<'info, TokenAccount>,
    authority: &Signer<'info>,
    amount: u64,
) -> Result<()> {
    token::transfer(
        CpiContext::new(
            token_program.to_account_info(),
            Transfer {
                from: from.to_account_info(),
                to: vault.to_account_info(),
                authority: authority.to_account_info(),
            },
        ),
        amount,
    )
}

/// Pushes `amount` from the vault to `to`, signed by the ledger state PDA.
pub fn push_to<'info>(
    token_program: &Program<'info, Token>,
    vault: &Account<'info, TokenAccount>,
    to: &Account<'info, TokenAccount>,
    ledger_state: AccountInfo<'info>,
    ledger_state_bump: u8,
    amount: u64,
) -> Result<()> {
    let signer_seeds: &[&[&[u8]]] = &[&[LEDGER_STATE_SEED, &[ledger_state_bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            token_program.to_account_info(),
            Transfer {
                from: vault.to_account_info(),
                to: to.to_account_info(),
                authority: ledger_state,
            },
            signer_seeds,
        ),
        amount,
    )
}
