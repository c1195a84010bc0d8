use crate::core::a1::{A1Range, column_index};
use crate::core::errors::BillmateError;
use crate::core::rows::{
    decode_bills, decode_payments, decode_roommates, encode_bill, encode_payment, extract_spreadsheet_id,
    parse_amount,
};

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

#[test]
fn test_parse_amount_coercion() {
    assert_eq!(parse_amount("42.5"), 42.5);
    assert_eq!(parse_amount(" 12 "), 12.0);
    assert_eq!(parse_amount("$1,234.50"), 1234.5);
    assert_eq!(parse_amount("-$20"), -20.0);
    assert_eq!(parse_amount("-15.25"), -15.25);
    assert_eq!(parse_amount(""), 0.0);
    assert_eq!(parse_amount("abc"), 0.0);
    assert_eq!(parse_amount("NaN"), 0.0);
    assert_eq!(parse_amount("inf"), 0.0);
}

#[test]
fn test_decode_bills_skips_header_and_short_rows() {
    let rows = vec![
        row(&["Date", "PaidBy", "Description", "Amount", "SplitWith"]),
        row(&["2026-01-05", "Kyle", "Rent", "1200", "Kyle,Alex,Sam"]),
        row(&["2026-01-07", "Alex"]),
        row(&["2026-01-09", "Sam", "Snacks", "abc"]),
        row(&["2026-01-08", "Kyle", "", "$1,000.25", "Alex"]),
    ];

    let bills = decode_bills(&rows);

    assert_eq!(bills.len(), 3);
    assert_eq!(bills[0].date, "2026-01-09");
    assert_eq!(bills[0].amount, 0.0);
    assert_eq!(bills[0].split_with, "");
    assert_eq!(bills[1].amount, 1000.25);
    assert_eq!(bills[2].description, "Rent");
    assert_eq!(bills[2].participants(), vec!["Kyle", "Alex", "Sam"]);
}

#[test]
fn test_decode_bills_header_only() {
    let rows = vec![row(&["Date", "PaidBy", "Description", "Amount", "SplitWith"])];
    assert!(decode_bills(&rows).is_empty());
    assert!(decode_bills(&[]).is_empty());
}

#[test]
fn test_decode_payments_optional_note() {
    let rows = vec![
        row(&["Date", "PaidBy", "Amount", "Note"]),
        row(&["2026-02-01", "Alex", "50"]),
        row(&["2026-02-03", "Sam", "-10", "refund"]),
        row(&["2026-02-02", "Jordan"]),
    ];

    let payments = decode_payments(&rows);

    assert_eq!(payments.len(), 2);
    assert_eq!(payments[0].paid_by, "Sam");
    assert_eq!(payments[0].amount, -10.0);
    assert_eq!(payments[0].note, "refund");
    assert_eq!(payments[1].note, "");
}

#[test]
fn test_encode_matches_column_order() {
    let bill = crate::BillRecord {
        date: "2026-02-08".to_string(),
        paid_by: "Kyle".to_string(),
        description: "Internet".to_string(),
        amount: 59.99,
        split_with: "Kyle, Alex".to_string(),
    };
    assert_eq!(encode_bill(&bill), row(&["2026-02-08", "Kyle", "Internet", "59.99", "Kyle, Alex"]));

    let payment = crate::PaymentRecord {
        date: "2026-02-09".to_string(),
        paid_by: "Alex".to_string(),
        amount: 30.0,
        note: String::new(),
    };
    assert_eq!(encode_payment(&payment), row(&["2026-02-09", "Alex", "30", ""]));
}

#[test]
fn test_decode_roommates_dedupes_case_insensitively() {
    let rows = vec![
        row(&["Name"]),
        row(&["Kyle"]),
        row(&[" alex "]),
        row(&[]),
        row(&["ALEX"]),
        row(&[""]),
        row(&["Sam"]),
    ];
    assert_eq!(decode_roommates(&rows), vec!["Kyle", "alex", "Sam"]);
}

#[test]
fn test_extract_spreadsheet_id() {
    assert_eq!(
        extract_spreadsheet_id("https://docs.google.com/spreadsheets/d/1AbC_dEf-123/edit#gid=0"),
        Some("1AbC_dEf-123".to_string())
    );
    assert_eq!(
        extract_spreadsheet_id("https://docs.google.com/spreadsheets/d/xyz?usp=sharing"),
        Some("xyz".to_string())
    );
    assert_eq!(extract_spreadsheet_id("  1AbCdEf  "), Some("1AbCdEf".to_string()));
    assert_eq!(extract_spreadsheet_id("   "), None);
}

#[test]
fn test_a1_whole_columns() {
    let range = A1Range::parse("Bills!A:E").unwrap();
    assert_eq!(range.tab, "Bills");
    assert_eq!(range.start_col, 0);
    assert_eq!(range.end_col, Some(4));
    assert_eq!(range.start_row, None);
    assert!(range.contains_col(4));
    assert!(!range.contains_col(5));
    assert!(range.contains_row(10_000));
}

#[test]
fn test_a1_single_cell_and_box() {
    let cell = A1Range::parse("Home!B1").unwrap();
    assert_eq!(cell.start_col, 1);
    assert_eq!(cell.start_row, Some(0));
    assert_eq!(cell.end_col, Some(1));
    assert_eq!(cell.end_row, Some(0));
    assert!(!cell.contains_col(0));
    assert!(!cell.contains_row(1));

    let area = A1Range::parse("'Home'!A1:B2").unwrap();
    assert_eq!(area.tab, "Home");
    assert!(area.contains_row(1));
    assert!(!area.contains_row(2));

    let tab = A1Range::parse("Roommates").unwrap();
    assert_eq!(tab.end_col, None);
    assert!(tab.contains_col(30));
}

#[test]
fn test_a1_rejects_malformed_ranges() {
    for input in ["", "!A1", "Home!1", "Home!B0", "Home!C1:A1", "Home!A3:A1", "Home!A1:%"] {
        assert!(
            matches!(A1Range::parse(input), Err(BillmateError::InvalidRange(_))),
            "expected {:?} to be rejected",
            input
        );
    }
}

#[test]
fn test_column_index() {
    assert_eq!(column_index("A"), Some(0));
    assert_eq!(column_index("z"), Some(25));
    assert_eq!(column_index("AA"), Some(26));
    assert_eq!(column_index("A1"), None);
}
