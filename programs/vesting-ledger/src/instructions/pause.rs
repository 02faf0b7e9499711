use anchor_lang::prelude::*;

use crate::constants::LEDGER_STATE_SEED;
use crate::state::LedgerState;

pub fn pause(ctx: Context<Pause>) -> Result<()> {
    let account = ctx.accounts.owner.key();
    ctx.accounts.ledger_state.pause(&account)?;
    emit!(Paused { account });
    Ok(())
}

#[derive(Accounts)]
pub struct Pause<'info> {
    #[account(mut, seeds = [LEDGER_STATE_SEED], bump = ledger_state.bump)]
    pub ledger_state: Account<'info, LedgerState>,
    pub owner: Signer<'info>,
}

#[event]
pub struct Paused {
    pub account: Pubkey,
}
