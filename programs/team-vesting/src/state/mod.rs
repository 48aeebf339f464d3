pub mod beneficiaries;
pub mod ledger;
pub mod schedule_config;

pub use beneficiaries::*;
pub use ledger::*;
pub use schedule_config::*;
