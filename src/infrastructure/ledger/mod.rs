pub mod sheet;

use crate::core::errors::BillmateError;
use crate::core::models::bill::BillRecord;
use crate::core::models::payment::PaymentRecord;
use crate::core::models::session::{HomeContext, Session};
use async_trait::async_trait;

/// Where a home's bills, payments, manager and roommates live.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Creates the home's backing store and returns its spreadsheet id.
    async fn initialize_home(&self, session: &Session, manager_name: &str) -> Result<String, BillmateError>;
    async fn fetch_bills(&self, ctx: &HomeContext) -> Result<Vec<BillRecord>, BillmateError>;
    async fn fetch_payments(&self, ctx: &HomeContext) -> Result<Vec<PaymentRecord>, BillmateError>;
    async fn append_bill(&self, ctx: &HomeContext, bill: &BillRecord) -> Result<(), BillmateError>;
    async fn append_payment(&self, ctx: &HomeContext, payment: &PaymentRecord) -> Result<(), BillmateError>;
    async fn fetch_manager_name(&self, ctx: &HomeContext) -> Result<Option<String>, BillmateError>;
    async fn fetch_roommates(&self, ctx: &HomeContext) -> Result<Vec<String>, BillmateError>;
    async fn add_roommate(&self, ctx: &HomeContext, name: &str) -> Result<(), BillmateError>;
    async fn share_with(&self, spreadsheet_id: &str, email: &str) -> Result<(), BillmateError>;
}
