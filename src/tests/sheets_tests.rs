use super::session;
use crate::core::constants::{HOME_TABS, SPREADSHEET_TITLE};
use crate::core::errors::BillmateError;
use crate::core::models::session::HomeContext;
use crate::infrastructure::ledger::LedgerStore;
use crate::infrastructure::ledger::sheet::SheetLedger;
use crate::infrastructure::sheets::SpreadsheetStore;
use crate::infrastructure::sheets::in_memory::InMemorySpreadsheets;

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

#[tokio::test]
async fn test_put_and_get_values() {
    let sheets = InMemorySpreadsheets::new();
    let owner = session("kyle@example.com", "Kyle");
    let id = sheets.create_spreadsheet(&owner, "Test", &["Bills"]).await.unwrap();

    sheets
        .put_values(&owner, &id, "Bills!B2:C2", vec![row(&["x", "y"])])
        .await
        .unwrap();

    let all = sheets.get_values(&owner, &id, "Bills").await.unwrap();
    assert_eq!(all, vec![row(&[]), row(&["", "x", "y"])]);

    let column = sheets.get_values(&owner, &id, "Bills!C:C").await.unwrap();
    assert_eq!(column, vec![row(&[]), row(&["y"])]);

    let cell = sheets.get_values(&owner, &id, "Bills!A1").await.unwrap();
    assert!(cell.is_empty());
}

#[tokio::test]
async fn test_append_skips_trailing_blank_rows() {
    let sheets = InMemorySpreadsheets::new();
    let owner = session("kyle@example.com", "Kyle");
    let id = sheets.create_spreadsheet(&owner, "Test", &["Payments"]).await.unwrap();

    sheets
        .put_values(&owner, &id, "Payments!A1:B3", vec![row(&["Date", "PaidBy"]), row(&[]), row(&["", ""])])
        .await
        .unwrap();
    sheets
        .append_values(&owner, &id, "Payments", vec![row(&["2026-02-01", "Alex"])])
        .await
        .unwrap();

    let values = sheets.get_values(&owner, &id, "Payments!A:B").await.unwrap();
    assert_eq!(values, vec![row(&["Date", "PaidBy"]), row(&["2026-02-01", "Alex"])]);
}

#[tokio::test]
async fn test_access_is_limited_to_collaborators() {
    let sheets = InMemorySpreadsheets::new();
    let owner = session("Kyle@Example.com", "Kyle");
    let stranger = session("eve@example.com", "Eve");
    let id = sheets.create_spreadsheet(&owner, "Test", &["Bills"]).await.unwrap();

    let result = sheets.get_values(&stranger, &id, "Bills").await;
    assert!(matches!(result, Err(BillmateError::PermissionDenied(..))));

    let result = sheets.append_values(&stranger, &id, "Bills", vec![row(&["x"])]).await;
    assert!(matches!(result, Err(BillmateError::PermissionDenied(..))));

    sheets.add_collaborator(&id, " EVE@example.com ").await.unwrap();
    assert!(sheets.get_values(&stranger, &id, "Bills").await.is_ok());

    let same_owner = session("kyle@example.com", "Kyle");
    assert!(sheets.get_values(&same_owner, &id, "Bills").await.is_ok());
}

#[tokio::test]
async fn test_missing_spreadsheet_and_tab() {
    let sheets = InMemorySpreadsheets::new();
    let owner = session("kyle@example.com", "Kyle");
    let id = sheets.create_spreadsheet(&owner, "Test", &["Bills"]).await.unwrap();

    let result = sheets.get_values(&owner, "nope", "Bills").await;
    assert!(matches!(result, Err(BillmateError::SpreadsheetNotFound(_))));

    let result = sheets.get_values(&owner, &id, "Payments!A:D").await;
    assert!(matches!(result, Err(BillmateError::TabNotFound(_))));

    let result = sheets.put_values(&owner, &id, "Bills!C1:A1", vec![]).await;
    assert!(matches!(result, Err(BillmateError::InvalidRange(_))));

    let result = sheets.add_collaborator("nope", "eve@example.com").await;
    assert!(matches!(result, Err(BillmateError::SpreadsheetNotFound(_))));
}

#[tokio::test]
async fn test_initialize_home_layout() {
    let ledger = SheetLedger::new(InMemorySpreadsheets::new());
    let owner = session("kyle@example.com", "Kyle");

    let id = ledger.initialize_home(&owner, "  Kyle ").await.unwrap();
    let sheets = ledger.sheets();

    assert_eq!(sheets.title(&id).await, Some(SPREADSHEET_TITLE.to_string()));
    for tab in HOME_TABS {
        assert!(sheets.get_values(&owner, &id, tab).await.is_ok(), "missing tab {}", tab);
    }
    assert_eq!(
        sheets.get_values(&owner, &id, "Bills").await.unwrap(),
        vec![row(&["Date", "PaidBy", "Description", "Amount", "SplitWith"])]
    );
    assert_eq!(
        sheets.get_values(&owner, &id, "Payments").await.unwrap(),
        vec![row(&["Date", "PaidBy", "Amount", "Note"])]
    );
    assert_eq!(
        sheets.get_values(&owner, &id, "Home!A1:B1").await.unwrap(),
        vec![row(&["ManagerName", "Kyle"])]
    );
    assert_eq!(
        sheets.get_values(&owner, &id, "Roommates").await.unwrap(),
        vec![row(&["Name"]), row(&["Kyle"])]
    );

    let ctx = HomeContext::new(id, owner);
    assert_eq!(ledger.fetch_manager_name(&ctx).await.unwrap(), Some("Kyle".to_string()));
    assert_eq!(ledger.fetch_roommates(&ctx).await.unwrap(), vec!["Kyle"]);
    assert!(ledger.fetch_bills(&ctx).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_initialize_home_rejects_blank_manager() {
    let ledger = SheetLedger::new(InMemorySpreadsheets::new());
    let owner = session("kyle@example.com", "Kyle");

    let result = ledger.initialize_home(&owner, "   ").await;
    assert!(matches!(result, Err(BillmateError::EmptyManagerName)));
}

#[tokio::test]
async fn test_blank_manager_cell_reads_as_none() {
    let ledger = SheetLedger::new(InMemorySpreadsheets::new());
    let owner = session("kyle@example.com", "Kyle");
    let id = ledger.initialize_home(&owner, "Kyle").await.unwrap();

    ledger
        .sheets()
        .put_values(&owner, &id, "Home!B1", vec![row(&["   "])])
        .await
        .unwrap();

    let ctx = HomeContext::new(id, owner);
    assert_eq!(ledger.fetch_manager_name(&ctx).await.unwrap(), None);
}

#[tokio::test]
async fn test_activity_log_buckets_by_home() {
    use crate::infrastructure::logging::LoggingService;
    use crate::infrastructure::logging::in_memory::InMemoryLogging;

    let logging = InMemoryLogging::new();
    logging
        .log_action("home-a", "BILL_ADDED", serde_json::json!({ "amount": 12.5 }), Some("kyle@example.com"))
        .await
        .unwrap();
    logging
        .log_action("home-b", "BILL_ADDED", serde_json::json!({ "amount": 3.0 }), None)
        .await
        .unwrap();

    let home_a = logging.home_logs("home-a").await.unwrap();
    assert_eq!(home_a.len(), 1);
    assert_eq!(home_a[0].details["amount"], serde_json::json!(12.5));
    assert!(logging.home_logs("home-c").await.unwrap().is_empty());

    let result = logging
        .log_action("home-a", "BILL_ADDED", serde_json::json!([1, 2]), None)
        .await;
    assert!(matches!(result, Err(BillmateError::LoggingError(_))));
}
