use crate::api::models::ApiError;
use crate::core::errors::BillmateError;
use crate::core::format::{balance_rows, format_currency};
use crate::core::models::balance::{BalanceStatus, RoommateBalance};
use axum::http::StatusCode;
use axum::response::IntoResponse;

#[test]
fn test_format_currency() {
    assert_eq!(format_currency(0.0, "USD"), "$0.00");
    assert_eq!(format_currency(1234.5, "USD"), "$1,234.50");
    assert_eq!(format_currency(1_000_000.0, "usd"), "$1,000,000.00");
    assert_eq!(format_currency(-33.333, "USD"), "-$33.33");
    assert_eq!(format_currency(-0.004, "USD"), "$0.00");
    assert_eq!(format_currency(12.0, "EUR"), "€12.00");
    assert_eq!(format_currency(999.999, "GBP"), "£1,000.00");
    assert_eq!(format_currency(5.0, "chf"), "CHF 5.00");
}

#[test]
fn test_balance_status() {
    assert_eq!(BalanceStatus::of(0.01), BalanceStatus::Owes);
    assert_eq!(BalanceStatus::of(-3.0), BalanceStatus::Credit);
    assert_eq!(BalanceStatus::of(0.0), BalanceStatus::Settled);
    assert_eq!(BalanceStatus::Credit.to_string(), "CREDIT");
    assert_eq!(serde_json::to_string(&BalanceStatus::Owes).unwrap(), "\"OWES\"");
}

#[test]
fn test_balance_rows_keep_order_and_raw_amounts() {
    let balances = vec![
        RoommateBalance {
            name: "Sam".to_string(),
            amount_owed: 33.333,
        },
        RoommateBalance {
            name: "Alex".to_string(),
            amount_owed: -5.0,
        },
    ];

    let rows = balance_rows(&balances, "USD");

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].name, "Sam");
    assert_eq!(rows[0].amount_owed, 33.333);
    assert_eq!(rows[0].formatted, "$33.33");
    assert_eq!(rows[1].formatted, "-$5.00");
    assert_eq!(rows[1].status, BalanceStatus::Credit);
}

#[test]
fn test_api_error_status_codes() {
    let cases = [
        (BillmateError::Unauthorized("expired".to_string()), StatusCode::UNAUTHORIZED),
        (BillmateError::EmptyManagerName, StatusCode::BAD_REQUEST),
        (
            BillmateError::invalid_input("amount", "Invalid Amount", "nope"),
            StatusCode::BAD_REQUEST,
        ),
        (BillmateError::MissingManagerName("id".to_string()), StatusCode::CONFLICT),
        (BillmateError::SpreadsheetNotFound("id".to_string()), StatusCode::NOT_FOUND),
        (BillmateError::InviteNotFound, StatusCode::NOT_FOUND),
        (
            BillmateError::PermissionDenied("eve@example.com".to_string(), "id".to_string()),
            StatusCode::FORBIDDEN,
        ),
        (BillmateError::InviteInactive, StatusCode::FORBIDDEN),
        (BillmateError::InviteExpired, StatusCode::GONE),
        (BillmateError::InviteExhausted, StatusCode::TOO_MANY_REQUESTS),
        (BillmateError::InvalidInvite, StatusCode::UNPROCESSABLE_ENTITY),
        (BillmateError::StorageError("disk".to_string()), StatusCode::INTERNAL_SERVER_ERROR),
    ];

    for (error, expected) in cases {
        let response = ApiError(error).into_response();
        assert_eq!(response.status(), expected);
    }
}

#[test]
fn test_error_messages() {
    assert_eq!(
        BillmateError::MissingManagerName("abc".to_string()).to_string(),
        "Home abc has no manager name (Home!B1)"
    );
    assert_eq!(BillmateError::EmptyManagerName.to_string(), "Manager name cannot be empty");
}

#[test]
fn test_format_currency_non_finite() {
    assert_eq!(format_currency(f64::NAN, "USD"), "NaN");
    assert_eq!(format_currency(f64::INFINITY, "USD"), "inf");
    assert_eq!(format_currency(f64::NEG_INFINITY, "EUR"), "-inf");
}

#[test]
fn test_summary_reads_back_from_json() {
    let body = r#"{
        "manager_name": "Kyle",
        "currency_code": "USD",
        "balances": [
            { "name": "Sam", "amount_owed": 25.0, "formatted": "$25.00", "status": "OWES" },
            { "name": "Alex", "amount_owed": 0.0, "formatted": "$0.00", "status": "SETTLED" }
        ]
    }"#;

    let summary: crate::core::services::SummaryResponse = serde_json::from_str(body).unwrap();

    assert_eq!(summary.manager_name(), "Kyle");
    assert_eq!(summary.balances().len(), 2);
    assert_eq!(summary.balances()[1].status, BalanceStatus::Settled);
}
