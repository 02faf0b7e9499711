pub mod initialize;
pub mod transfer_ownership;
pub mod accept_ownership;
pub mod update_releaser;
pub mod pause;
pub mod unpause;
pub mod increase_vesting_amount;
pub mod claim;
pub mod authorize_upgrade;
pub mod views;

pub use initialize::*;
pub use transfer_ownership::*;
pub use accept_ownership::*;
pub use update_releaser::*;
pub use pause::*;
pub use unpause::*;
pub use increase_vesting_amount::*;
pub use claim::*;
pub use authorize_upgrade::*;
pub use views::*;
