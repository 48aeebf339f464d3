pub mod initialize_ledger;
pub mod deposit_tokens;
pub mod register_allocations;
pub mod start_countdown;
pub mod get_available_amount;
pub mod claim_token;
pub mod transfer_admin;

pub use initialize_ledger::*;
pub use deposit_tokens::*;
pub use register_allocations::*;
pub use start_countdown::*;
pub use get_available_amount::*;
pub use claim_token::*;
pub use transfer_admin::*;
