use anchor_lang::prelude::*;

use crate::constants::LEDGER_STATE_SEED;
use crate::state::LedgerState;

pub fn update_releaser(ctx: Context<UpdateReleaser>, new_releaser: Pubkey) -> Result<()> {
    let old_releaser = ctx
        .accounts
        .ledger_state
        .set_releaser(&ctx.accounts.owner.key(), new_releaser)?;

    emit!(ReleaserUpdated {
        old_releaser,
        new_releaser,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct UpdateReleaser<'info> {
    #[account(mut, seeds = [LEDGER_STATE_SEED], bump = ledger_state.bump)]
    pub ledger_state: Account<'info, LedgerState>,
    pub owner: Signer<'info>,
}

#[event]
pub struct ReleaserUpdated {
    pub old_releaser: Pubkey,
    pub new_releaser: Pubkey,
}
