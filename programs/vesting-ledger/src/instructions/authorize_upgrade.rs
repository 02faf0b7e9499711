use anchor_lang::prelude::*;

use crate::constants::LEDGER_STATE_SEED;
use crate::state::LedgerState;

/// Owner approval of an upgrade. Writes nothing and does not gate the
/// upgrade itself: the BPF upgradeable loader never reads this event, it only
/// checks its own upgrade authority. That authority must be a key the owner
/// controls, and transferring ownership here does not move it. The event is
/// an audit record for off-chain upgrade tooling.
pub fn authorize_upgrade(ctx: Context<AuthorizeUpgrade>, new_implementation: Pubkey) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    ctx.accounts.ledger_state.authorize_upgrade(&owner)?;

    msg!("Upgrade to {} authorized", new_implementation);
    emit!(UpgradeAuthorized {
        owner,
        new_implementation,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct AuthorizeUpgrade<'info> {
    #[account(seeds = [LEDGER_STATE_SEED], bump = ledger_state.bump)]
    pub ledger_state: Account<'info, LedgerState>,
    pub owner: Signer<'info>,
}

#[event]
pub struct UpgradeAuthorized {
    pub owner: Pubkey,
    pub new_implementation: Pubkey,
}
