pub mod auth;
pub mod invites;
pub mod ledger;
pub mod logging;
pub mod sheets;
