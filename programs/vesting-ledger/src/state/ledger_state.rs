use anchor_lang::prelude::*;

use crate::constants::LEDGER_VERSION;
use crate::error::VestingError;
use crate::state::{LedgerResult, ReleaseRecord};

/// Singleton ledger state PDA.
///
/// Every mutating method checks all of its preconditions before the first
/// write, so a rejected call leaves the account untouched.
#[account]
#[derive(Debug, Default, PartialEq, Eq)]
pub struct LedgerState {
    /// Mint of the pooled asset. Set once by `initialize`.
    pub asset: Pubkey,
    /// Custody token account (PDA whose authority is this account).
    pub vault: Pubkey,
    /// Administrative authority.
    pub owner: Pubkey,
    /// Proposed owner awaiting acceptance.
    pub pending_owner: Option<Pubkey>,
    /// Depositor / release authority. `Pubkey::default()` until assigned.
    pub releaser: Pubkey,
    /// Blocks releases only; deposits stay open.
    pub paused: bool,
    /// Cumulative amount ever deposited into the pool.
    pub total_committed: u64,
    /// Cumulative amount ever paid out (sum of all release records).
    pub total_released: u64,
    /// Number of recipients holding a non-zero release record.
    pub recipient_count: u64,
    /// 0 until `initialize` succeeds, then `LEDGER_VERSION`.
    pub init_version: u8,
    pub bump: u8,
    pub vault_bump: u8,
}

/// Arguments of `LedgerState::initialize`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LedgerParams {
    pub asset: Pubkey,
    pub vault: Pubkey,
    pub owner: Pubkey,
    /// May be `Pubkey::default()`; assigned later through `set_releaser`.
    pub releaser: Pubkey,
    pub bump: u8,
    pub vault_bump: u8,
}

impl LedgerState {
    pub const SIZE: usize =
        32 +     // asset
        32 +     // vault
        32 +     // owner
        1 + 32 + // pending_owner
        32 +     // releaser
        1 +      // paused
        8 +      // total_committed
        8 +      // total_released
        8 +      // recipient_count
        1 +      // init_version
        1 +      // bump
        1;       // vault_bump

    /// One-time setup. Only the program's upgrade authority may initialize,
    /// so nobody can claim the fixed-seed state PDA between deployment and
    /// the deployer's own `initialize`.
    pub fn initialize(
        &mut self,
        initializer: &Pubkey,
        upgrade_authority: Option<Pubkey>,
        params: LedgerParams,
    ) -> LedgerResult<()> {
        if self.is_initialized() {
            return Err(VestingError::AlreadyInitialized);
        }
        if upgrade_authority != Some(*initializer) {
            return Err(VestingError::UnauthorizedInitializer);
        }
        if params.owner == Pubkey::default() || params.asset == Pubkey::default() {
            return Err(VestingError::InvalidPubkey);
        }

        *self = Self {
            asset: params.asset,
            vault: params.vault,
            owner: params.owner,
            pending_owner: None,
            releaser: params.releaser,
            paused: false,
            total_committed: 0,
            total_released: 0,
            recipient_count: 0,
            init_version: LEDGER_VERSION,
            bump: params.bump,
            vault_bump: params.vault_bump,
        };
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.init_version != 0
    }

    pub fn version(&self) -> u8 {
        self.init_version
    }

    /// Committed funds not yet released.
    pub fn available(&self) -> u64 {
        self.total_committed.saturating_sub(self.total_released)
    }

    pub fn require_owner(&self, caller: &Pubkey) -> LedgerResult<()> {
        if !self.is_initialized() {
            return Err(VestingError::NotInitialized);
        }
        if *caller != self.owner {
            return Err(VestingError::UnauthorizedOwner);
        }
        Ok(())
    }

    /// A releaser left unassigned at initialization matches nobody.
    pub fn require_releaser(&self, caller: &Pubkey) -> LedgerResult<()> {
        if !self.is_initialized() {
            return Err(VestingError::NotInitialized);
        }
        if self.releaser == Pubkey::default() || *caller != self.releaser {
            return Err(VestingError::UnauthorizedReleaserAction);
        }
        Ok(())
    }

    /// First step of the ownership handoff. A later proposal replaces this
    /// one; proposing the default key withdraws it.
    pub fn propose_owner(&mut self, caller: &Pubkey, candidate: Pubkey) -> LedgerResult<()> {
        self.require_owner(caller)?;
        self.pending_owner = (candidate != Pubkey::default()).then_some(candidate);
        Ok(())
    }

    /// Second step of the ownership handoff. Returns the previous owner.
    pub fn accept_owner(&mut self, caller: &Pubkey) -> LedgerResult<Pubkey> {
        if !self.is_initialized() {
            return Err(VestingError::NotInitialized);
        }
        match self.pending_owner {
            Some(pending) if pending == *caller => {}
            _ => return Err(VestingError::UnauthorizedPendingOwner),
        }

        let previous = self.owner;
        self.owner = *caller;
        self.pending_owner = None;
        Ok(previous)
    }

    /// Replaces the releaser regardless of what the pool still holds.
    /// Returns the previous releaser.
    pub fn set_releaser(&mut self, caller: &Pubkey, new_releaser: Pubkey) -> LedgerResult<Pubkey> {
        self.require_owner(caller)?;
        if new_releaser == Pubkey::default() {
            return Err(VestingError::InvalidPubkey);
        }

        let old = self.releaser;
        self.releaser = new_releaser;
        Ok(old)
    }

    pub fn pause(&mut self, caller: &Pubkey) -> LedgerResult<()> {
        self.require_owner(caller)?;
        if self.paused {
            return Err(VestingError::EnforcedPause);
        }
        self.paused = true;
        Ok(())
    }

    pub fn unpause(&mut self, caller: &Pubkey) -> LedgerResult<()> {
        self.require_owner(caller)?;
        if !self.paused {
            return Err(VestingError::ExpectedPause);
        }
        self.paused = false;
        Ok(())
    }

    /// Books a deposit of `amount` into the pool. The caller must move the
    /// same amount into the vault within the same instruction.
    ///
    /// Not gated by `paused`.
    pub fn commit_deposit(&mut self, caller: &Pubkey, amount: u64) -> LedgerResult<u64> {
        self.require_releaser(caller)?;
        if amount == 0 {
            return Err(VestingError::InvalidAmount);
        }

        let total = self
            .total_committed
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
        self.total_committed = total;
        Ok(total)
    }

    /// Books a one-shot release of `amount` to `recipient`. The caller must
    /// move the same amount out of the vault within the same instruction.
    ///
    /// Checks run in a fixed order: releaser, pause, prior claim, pool balance.
    /// Returns the new `total_released`.
    pub fn commit_release(
        &mut self,
        caller: &Pubkey,
        record: &mut ReleaseRecord,
        recipient: Pubkey,
        amount: u64,
    ) -> LedgerResult<u64> {
        self.require_releaser(caller)?;
        if self.paused {
            return Err(VestingError::EnforcedPause);
        }
        if record.is_claimed() {
            return Err(VestingError::AlreadyClaimed);
        }
        if amount > self.available() {
            return Err(VestingError::NotEnoughFunds);
        }

        let total = self
            .total_released
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
        let recipient_count = if amount > 0 {
            self.recipient_count
                .checked_add(1)
                .ok_or(VestingError::MathOverflow)?
        } else {
            self.recipient_count
        };

        record.mark_released(recipient, amount);
        self.total_released = total;
        self.recipient_count = recipient_count;
        Ok(total)
    }

    /// Token accounts moving funds in or out of the pool must hold the pooled
    /// asset and belong to `expected_owner`. Checked after the booking so the
    /// ledger's own rejections are reported first.
    pub fn check_token_account(
        &self,
        mint: &Pubkey,
        owner: &Pubkey,
        expected_owner: &Pubkey,
    ) -> LedgerResult<()> {
        if *mint != self.asset {
            return Err(VestingError::InvalidTokenMint);
        }
        if owner != expected_owner {
            return Err(VestingError::InvalidTokenAccount);
        }
        Ok(())
    }

    /// Upgrade gate hook: owner approval only, nothing is written.
    pub fn authorize_upgrade(&self, caller: &Pubkey) -> LedgerResult<()> {
        self.require_owner(caller)
    }
}
