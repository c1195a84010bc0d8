pub mod audit;
pub mod balance;
pub mod bill;
pub mod invite;
pub mod payment;
pub mod roommate;
pub mod session;
