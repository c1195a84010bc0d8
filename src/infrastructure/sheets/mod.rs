pub mod in_memory;

use crate::core::errors::BillmateError;
use crate::core::models::session::Session;
use async_trait::async_trait;

/// Row-level access to a tabbed spreadsheet. Cells are plain strings; ranges
/// use A1 notation (`Bills!A:E`, `Home!B1`).
#[async_trait]
pub trait SpreadsheetStore: Send + Sync {
    async fn create_spreadsheet(&self, session: &Session, title: &str, tabs: &[&str]) -> Result<String, BillmateError>;
    async fn get_values(
        &self,
        session: &Session,
        spreadsheet_id: &str,
        range: &str,
    ) -> Result<Vec<Vec<String>>, BillmateError>;
    async fn put_values(
        &self,
        session: &Session,
        spreadsheet_id: &str,
        range: &str,
        values: Vec<Vec<String>>,
    ) -> Result<(), BillmateError>;
    async fn append_values(
        &self,
        session: &Session,
        spreadsheet_id: &str,
        tab: &str,
        values: Vec<Vec<String>>,
    ) -> Result<(), BillmateError>;
    async fn add_collaborator(&self, spreadsheet_id: &str, email: &str) -> Result<(), BillmateError>;
}
