use anchor_lang::prelude::*;

use crate::constants::LEDGER_STATE_SEED;
use crate::state::LedgerState;

pub fn unpause(ctx: Context<Unpause>) -> Result<()> {
    let account = ctx.accounts.owner.key();
    ctx.accounts.ledger_state.unpause(&account)?;
    emit!(Unpaused { account });
    Ok(())
}

#[derive(Accounts)]
pub struct Unpause<'info> {
    #[account(mut, seeds = [LEDGER_STATE_SEED], bump = ledger_state.bump)]
    pub ledger_state: Account<'info, LedgerState>,
    pub owner: Signer<'info>,
}

#[event]
pub struct Unpaused {
    pub account: Pubkey,
}
