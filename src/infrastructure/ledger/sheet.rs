use crate::core::constants::{
    BILLS_HEADER, BILLS_RANGE, BILLS_TAB, HOME_TAB, HOME_TABS, MANAGER_NAME_CELL, MANAGER_NAME_LABEL,
    PAYMENTS_HEADER, PAYMENTS_RANGE, PAYMENTS_TAB, ROOMMATES_HEADER, ROOMMATES_RANGE, ROOMMATES_TAB,
    SPREADSHEET_TITLE, SUMMARY_HEADER, SUMMARY_TAB,
};
use crate::core::errors::BillmateError;
use crate::core::models::bill::BillRecord;
use crate::core::models::payment::PaymentRecord;
use crate::core::models::session::{HomeContext, Session};
use crate::core::rows;
use crate::infrastructure::ledger::LedgerStore;
use crate::infrastructure::sheets::SpreadsheetStore;
use async_trait::async_trait;
use tracing::{debug, info};

fn header_row(cells: &[&str]) -> Vec<Vec<String>> {
    vec![cells.iter().map(|c| c.to_string()).collect()]
}

fn header_range(tab: &str, width: usize) -> String {
    let last = (b'A' + width as u8 - 1) as char;
    format!("{}!A1:{}1", tab, last)
}

/// A ledger laid out across the five tabs of one spreadsheet.
#[derive(Clone)]
pub struct SheetLedger<S: SpreadsheetStore> {
    sheets: S,
}

impl<S: SpreadsheetStore> SheetLedger<S> {
    pub fn new(sheets: S) -> Self {
        SheetLedger { sheets }
    }

    pub fn sheets(&self) -> &S {
        &self.sheets
    }
}

#[async_trait]
impl<S: SpreadsheetStore> LedgerStore for SheetLedger<S> {
    async fn initialize_home(&self, session: &Session, manager_name: &str) -> Result<String, BillmateError> {
        let manager = manager_name.trim();
        if manager.is_empty() {
            return Err(BillmateError::EmptyManagerName);
        }

        let id = self
            .sheets
            .create_spreadsheet(session, SPREADSHEET_TITLE, &HOME_TABS)
            .await?;

        for (tab, header) in [
            (BILLS_TAB, &BILLS_HEADER[..]),
            (PAYMENTS_TAB, &PAYMENTS_HEADER[..]),
            (SUMMARY_TAB, &SUMMARY_HEADER[..]),
            (ROOMMATES_TAB, &ROOMMATES_HEADER[..]),
        ] {
            self.sheets
                .put_values(session, &id, &header_range(tab, header.len()), header_row(header))
                .await?;
        }
        self.sheets
            .put_values(
                session,
                &id,
                &header_range(HOME_TAB, 2),
                vec![vec![MANAGER_NAME_LABEL.to_string(), manager.to_string()]],
            )
            .await?;
        self.sheets
            .append_values(session, &id, ROOMMATES_TAB, vec![vec![manager.to_string()]])
            .await?;

        info!("Initialized home spreadsheet {} for manager {}", id, manager);
        Ok(id)
    }

    async fn fetch_bills(&self, ctx: &HomeContext) -> Result<Vec<BillRecord>, BillmateError> {
        let values = self
            .sheets
            .get_values(&ctx.session, &ctx.spreadsheet_id, BILLS_RANGE)
            .await?;
        let bills = rows::decode_bills(&values);
        debug!("Fetched {} bills from {}", bills.len(), ctx.spreadsheet_id);
        Ok(bills)
    }

    async fn fetch_payments(&self, ctx: &HomeContext) -> Result<Vec<PaymentRecord>, BillmateError> {
        let values = self
            .sheets
            .get_values(&ctx.session, &ctx.spreadsheet_id, PAYMENTS_RANGE)
            .await?;
        let payments = rows::decode_payments(&values);
        debug!("Fetched {} payments from {}", payments.len(), ctx.spreadsheet_id);
        Ok(payments)
    }

    async fn append_bill(&self, ctx: &HomeContext, bill: &BillRecord) -> Result<(), BillmateError> {
        self.sheets
            .append_values(&ctx.session, &ctx.spreadsheet_id, BILLS_TAB, vec![rows::encode_bill(bill)])
            .await
    }

    async fn append_payment(&self, ctx: &HomeContext, payment: &PaymentRecord) -> Result<(), BillmateError> {
        self.sheets
            .append_values(
                &ctx.session,
                &ctx.spreadsheet_id,
                PAYMENTS_TAB,
                vec![rows::encode_payment(payment)],
            )
            .await
    }

    async fn fetch_manager_name(&self, ctx: &HomeContext) -> Result<Option<String>, BillmateError> {
        let values = self
            .sheets
            .get_values(&ctx.session, &ctx.spreadsheet_id, MANAGER_NAME_CELL)
            .await?;
        Ok(values
            .first()
            .and_then(|row| row.first())
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty()))
    }

    async fn fetch_roommates(&self, ctx: &HomeContext) -> Result<Vec<String>, BillmateError> {
        let values = self
            .sheets
            .get_values(&ctx.session, &ctx.spreadsheet_id, ROOMMATES_RANGE)
            .await?;
        Ok(rows::decode_roommates(&values))
    }

    async fn add_roommate(&self, ctx: &HomeContext, name: &str) -> Result<(), BillmateError> {
        self.sheets
            .append_values(
                &ctx.session,
                &ctx.spreadsheet_id,
                ROOMMATES_TAB,
                vec![vec![name.trim().to_string()]],
            )
            .await
    }

    async fn share_with(&self, spreadsheet_id: &str, email: &str) -> Result<(), BillmateError> {
        self.sheets.add_collaborator(spreadsheet_id, email).await
    }
}
