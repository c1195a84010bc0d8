pub mod a1;
pub mod balance;
pub mod constants;
pub mod errors;
pub mod format;
pub mod invites;
pub mod models;
pub mod rows;
pub mod services;
