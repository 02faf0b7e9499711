use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{LEDGER_STATE_SEED, VAULT_SEED};
use crate::program::VestingLedger;
use crate::state::{LedgerParams, LedgerState};

/// One-time setup, restricted to the program's upgrade authority. `releaser`
/// may be the default key and assigned later through `update_releaser`.
pub fn initialize(ctx: Context<Initialize>, owner: Pubkey, releaser: Pubkey) -> Result<()> {
    let params = LedgerParams {
        asset: ctx.accounts.asset.key(),
        vault: ctx.accounts.vault.key(),
        owner,
        releaser,
        bump: ctx.bumps.ledger_state,
        vault_bump: ctx.bumps.vault,
    };
    let payer = ctx.accounts.payer.key();
    let upgrade_authority = ctx.accounts.program_data.upgrade_authority_address;

    let st = &mut ctx.accounts.ledger_state;
    st.initialize(&payer, upgrade_authority, params)?;

    msg!("Vesting ledger initialized (version {})", st.version());

    emit!(LedgerInitialized {
        asset: params.asset,
        vault: params.vault,
        owner,
        releaser,
        version: st.version(),
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    // init_if_needed so a second call reaches the handler and fails with
    // `AlreadyInitialized` instead of a system program error.
    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + LedgerState::SIZE,
        seeds = [LEDGER_STATE_SEED],
        bump
    )]
    pub ledger_state: Account<'info, LedgerState>,

    #[account(
        init_if_needed,
        payer = payer,
        token::mint = asset,
        token::authority = ledger_state,
        seeds = [VAULT_SEED, ledger_state.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub asset: Account<'info, Mint>,

    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(constraint = program.programdata_address()? == Some(program_data.key()))]
    pub program: Program<'info, VestingLedger>,

    pub program_data: Account<'info, ProgramData>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct LedgerInitialized {
    pub asset: Pubkey,
    pub vault: Pubkey,
    pub owner: Pubkey,
    pub releaser: Pubkey,
    pub version: u8,
}
