use anchor_lang::prelude::*;

use crate::constants::LEDGER_STATE_SEED;
use crate::state::LedgerState;

pub fn accept_ownership(ctx: Context<AcceptOwnership>) -> Result<()> {
    let new_owner = ctx.accounts.pending_owner.key();
    let previous_owner = ctx.accounts.ledger_state.accept_owner(&new_owner)?;

    emit!(OwnershipTransferred {
        previous_owner,
        new_owner,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct AcceptOwnership<'info> {
    #[account(mut, seeds = [LEDGER_STATE_SEED], bump = ledger_state.bump)]
    pub ledger_state: Account<'info, LedgerState>,
    pub pending_owner: Signer<'info>,
}

#[event]
pub struct OwnershipTransferred {
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}
