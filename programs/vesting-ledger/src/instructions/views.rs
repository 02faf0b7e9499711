//! Read-only accessors. Values come back through Anchor return data; nothing
//! is written.

use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::constants::{LEDGER_STATE_SEED, RELEASE_SEED, VAULT_SEED};
use crate::state::{LedgerState, ReleaseRecord};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct LedgerSummary {
    pub asset: Pubkey,
    pub vault: Pubkey,
    pub owner: Pubkey,
    pub pending_owner: Option<Pubkey>,
    pub releaser: Pubkey,
    pub paused: bool,
    pub total_committed: u64,
    pub total_released: u64,
    /// Committed but not yet released.
    pub available: u64,
    /// Tokens actually held by the vault.
    pub custody_balance: u64,
    pub version: u8,
}

impl LedgerSummary {
    pub fn new(st: &LedgerState, custody_balance: u64) -> Self {
        Self {
            asset: st.asset,
            vault: st.vault,
            owner: st.owner,
            pending_owner: st.pending_owner,
            releaser: st.releaser,
            paused: st.paused,
            total_committed: st.total_committed,
            total_released: st.total_released,
            available: st.available(),
            custody_balance,
            version: st.version(),
        }
    }
}

pub fn get_ledger_summary(ctx: Context<GetLedgerSummary>) -> Result<LedgerSummary> {
    Ok(LedgerSummary::new(
        &ctx.accounts.ledger_state,
        ctx.accounts.vault.amount,
    ))
}

/// Amount released to `recipient`; 0 if it was never paid.
pub fn get_claimed_amount(ctx: Context<GetClaimedAmount>, _recipient: Pubkey) -> Result<u64> {
    let info = &ctx.accounts.release_record;
    if info.data_is_empty() {
        return Ok(0);
    }
    require_keys_eq!(
        *info.owner,
        crate::ID,
        anchor_lang::error::ErrorCode::AccountOwnedByWrongProgram
    );

    let data = info.try_borrow_data()?;
    let record = ReleaseRecord::try_deserialize(&mut &data[..])?;
    Ok(record.amount)
}

#[derive(Accounts)]
pub struct GetLedgerSummary<'info> {
    #[account(seeds = [LEDGER_STATE_SEED], bump = ledger_state.bump)]
    pub ledger_state: Account<'info, LedgerState>,

    #[account(
        seeds = [VAULT_SEED, ledger_state.key().as_ref()],
        bump = ledger_state.vault_bump,
    )]
    pub vault: Account<'info, TokenAccount>,
}

#[derive(Accounts)]
#[instruction(recipient: Pubkey)]
pub struct GetClaimedAmount<'info> {
    /// CHECK: release record PDA of `recipient`; may not exist yet, so it is
    /// deserialized by hand after the owner check.
    #[account(seeds = [RELEASE_SEED, recipient.as_ref()], bump)]
    pub release_record: UncheckedAccount<'info>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::LedgerParams;

    #[test]
    fn summary_reflects_ledger_state() {
        let mut st = LedgerState::default();
        let owner = Pubkey::new_from_array([3; 32]);
        let releaser = Pubkey::new_from_array([4; 32]);
        let deployer = Pubkey::new_from_array([7; 32]);
        st.initialize(
            &deployer,
            Some(deployer),
            LedgerParams {
                asset: Pubkey::new_from_array([1; 32]),
                vault: Pubkey::new_from_array([2; 32]),
                owner,
                releaser,
                bump: 255,
                vault_bump: 254,
            },
        )
        .unwrap();
        st.commit_deposit(&releaser, 1_000).unwrap();
        let mut rec = ReleaseRecord::default();
        st.commit_release(&releaser, &mut rec, Pubkey::new_from_array([9; 32]), 250)
            .unwrap();
        st.pause(&owner).unwrap();

        let summary = LedgerSummary::new(&st, 750);

        assert_eq!(summary.owner, owner);
        assert_eq!(summary.releaser, releaser);
        assert_eq!(summary.pending_owner, None);
        assert!(summary.paused);
        assert_eq!(summary.total_committed, 1_000);
        assert_eq!(summary.total_released, 250);
        assert_eq!(summary.available, 750);
        assert_eq!(summary.custody_balance, 750);
        assert_eq!(summary.version, 1);
    }
}
