pub mod ledger_state;
pub mod release_record;


pub use ledger_state::*;
pub use release_record::*;

use crate::error::VestingError;

/// Result of the pure accounting methods; `?` lifts it into an Anchor error.
pub type LedgerResult<T> = core::result::Result<T, VestingError>;
