pub mod api;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use crate::core::balance::BalanceEngine;
pub use crate::core::errors::BillmateError;
pub use crate::core::models::{balance::RoommateBalance, bill::BillRecord, payment::PaymentRecord};
pub use crate::core::services::BillmateService;

#[cfg(test)]
mod tests;
