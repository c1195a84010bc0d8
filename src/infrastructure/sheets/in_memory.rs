use crate::core::a1::A1Range;
use crate::core::errors::BillmateError;
use crate::core::models::session::Session;
use crate::infrastructure::sheets::SpreadsheetStore;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

struct Spreadsheet {
    title: String,
    collaborators: HashSet<String>,
    tabs: HashMap<String, Vec<Vec<String>>>,
}

impl Spreadsheet {
    fn check_access(&self, id: &str, session: &Session) -> Result<(), BillmateError> {
        if self.collaborators.contains(&session.email.to_lowercase()) {
            Ok(())
        } else {
            Err(BillmateError::PermissionDenied(session.email.clone(), id.to_string()))
        }
    }

    fn tab_mut(&mut self, tab: &str) -> Result<&mut Vec<Vec<String>>, BillmateError> {
        self.tabs
            .get_mut(tab)
            .ok_or_else(|| BillmateError::TabNotFound(tab.to_string()))
    }
}

fn is_blank(row: &[String]) -> bool {
    row.iter().all(|cell| cell.is_empty())
}

/// Process-local spreadsheets. Access is limited to the creator and
/// collaborators added later.
#[derive(Clone)]
pub struct InMemorySpreadsheets {
    sheets: Arc<RwLock<HashMap<String, Spreadsheet>>>,
}

impl InMemorySpreadsheets {
    pub fn new() -> Self {
        InMemorySpreadsheets {
            sheets: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn title(&self, spreadsheet_id: &str) -> Option<String> {
        let sheets = self.sheets.read().await;
        sheets.get(spreadsheet_id).map(|s| s.title.clone())
    }
}

impl Default for InMemorySpreadsheets {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SpreadsheetStore for InMemorySpreadsheets {
    async fn create_spreadsheet(&self, session: &Session, title: &str, tabs: &[&str]) -> Result<String, BillmateError> {
        let id = Uuid::new_v4().simple().to_string();
        let spreadsheet = Spreadsheet {
            title: title.to_string(),
            collaborators: HashSet::from([session.email.to_lowercase()]),
            tabs: tabs.iter().map(|tab| (tab.to_string(), Vec::new())).collect(),
        };
        let mut sheets = self.sheets.write().await;
        sheets.insert(id.clone(), spreadsheet);
        debug!("Created spreadsheet {} with {} tabs", id, tabs.len());
        Ok(id)
    }

    async fn get_values(
        &self,
        session: &Session,
        spreadsheet_id: &str,
        range: &str,
    ) -> Result<Vec<Vec<String>>, BillmateError> {
        let range = A1Range::parse(range)?;
        let sheets = self.sheets.read().await;
        let sheet = sheets
            .get(spreadsheet_id)
            .ok_or_else(|| BillmateError::SpreadsheetNotFound(spreadsheet_id.to_string()))?;
        sheet.check_access(spreadsheet_id, session)?;
        let rows = sheet
            .tabs
            .get(&range.tab)
            .ok_or_else(|| BillmateError::TabNotFound(range.tab.clone()))?;

        let mut values: Vec<Vec<String>> = rows
            .iter()
            .enumerate()
            .filter(|(i, _)| range.contains_row(*i))
            .map(|(_, row)| {
                let mut cells: Vec<String> = row
                    .iter()
                    .enumerate()
                    .filter(|(j, _)| range.contains_col(*j))
                    .map(|(_, cell)| cell.clone())
                    .collect();
                while cells.last().is_some_and(|c| c.is_empty()) {
                    cells.pop();
                }
                cells
            })
            .collect();
        while values.last().is_some_and(|row| row.is_empty()) {
            values.pop();
        }
        Ok(values)
    }

    async fn put_values(
        &self,
        session: &Session,
        spreadsheet_id: &str,
        range: &str,
        values: Vec<Vec<String>>,
    ) -> Result<(), BillmateError> {
        let range = A1Range::parse(range)?;
        let mut sheets = self.sheets.write().await;
        let sheet = sheets
            .get_mut(spreadsheet_id)
            .ok_or_else(|| BillmateError::SpreadsheetNotFound(spreadsheet_id.to_string()))?;
        sheet.check_access(spreadsheet_id, session)?;
        let rows = sheet.tab_mut(&range.tab)?;

        let first_row = range.start_row.unwrap_or(0);
        for (i, values_row) in values.into_iter().enumerate() {
            let row_index = first_row + i;
            if rows.len() <= row_index {
                rows.resize_with(row_index + 1, Vec::new);
            }
            let row = &mut rows[row_index];
            for (j, value) in values_row.into_iter().enumerate() {
                let col = range.start_col + j;
                if row.len() <= col {
                    row.resize(col + 1, String::new());
                }
                row[col] = value;
            }
        }
        Ok(())
    }

    async fn append_values(
        &self,
        session: &Session,
        spreadsheet_id: &str,
        tab: &str,
        values: Vec<Vec<String>>,
    ) -> Result<(), BillmateError> {
        let mut sheets = self.sheets.write().await;
        let sheet = sheets
            .get_mut(spreadsheet_id)
            .ok_or_else(|| BillmateError::SpreadsheetNotFound(spreadsheet_id.to_string()))?;
        sheet.check_access(spreadsheet_id, session)?;
        let rows = sheet.tab_mut(tab)?;

        while rows.last().is_some_and(|row| is_blank(row)) {
            rows.pop();
        }
        rows.extend(values);
        Ok(())
    }

    async fn add_collaborator(&self, spreadsheet_id: &str, email: &str) -> Result<(), BillmateError> {
        let mut sheets = self.sheets.write().await;
        let sheet = sheets
            .get_mut(spreadsheet_id)
            .ok_or_else(|| BillmateError::SpreadsheetNotFound(spreadsheet_id.to_string()))?;
        sheet.collaborators.insert(email.trim().to_lowercase());
        Ok(())
    }
}
