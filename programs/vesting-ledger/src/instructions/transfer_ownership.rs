use anchor_lang::prelude::*;

use crate::constants::LEDGER_STATE_SEED;
use crate::state::LedgerState;

pub fn transfer_ownership(ctx: Context<TransferOwnership>, candidate: Pubkey) -> Result<()> {
    let st = &mut ctx.accounts.ledger_state;
    st.propose_owner(&ctx.accounts.owner.key(), candidate)?;

    emit!(OwnershipTransferStarted {
        previous_owner: st.owner,
        new_owner: candidate,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct TransferOwnership<'info> {
    #[account(mut, seeds = [LEDGER_STATE_SEED], bump = ledger_state.bump)]
    pub ledger_state: Account<'info, LedgerState>,
    pub owner: Signer<'info>,
}

#[event]
pub struct OwnershipTransferStarted {
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}
