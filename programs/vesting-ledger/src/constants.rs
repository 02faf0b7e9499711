//! Program-wide constants.

/// Seed of the singleton ledger state PDA.
pub const LEDGER_STATE_SEED: &[u8] = b"ledger_state";

/// Seed of the custody token account PDA (`[VAULT_SEED, ledger_state]`).
pub const VAULT_SEED: &[u8] = b"vault";

/// Seed of a per-recipient release record PDA (`[RELEASE_SEED, recipient]`).
pub const RELEASE_SEED: &[u8] = b"release";

/// Initialization version written by `initialize`; 0 means never initialized.
pub const LEDGER_VERSION: u8 = 1;
