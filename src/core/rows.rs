//! Positional mapping between spreadsheet rows and ledger records.

use crate::core::models::bill::BillRecord;
use crate::core::models::payment::PaymentRecord;
use std::collections::HashSet;

/// Parses a numeric cell. Anything unparseable (or non-finite) reads as `0.0`.
pub fn parse_amount(cell: &str) -> f64 {
    let trimmed = cell.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest.trim_start()),
        None => (false, trimmed),
    };
    let cleaned: String = unsigned
        .strip_prefix('$')
        .unwrap_or(unsigned)
        .chars()
        .filter(|c| *c != ',')
        .collect();
    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => {
            if negative {
                -value
            } else {
                value
            }
        }
        _ => 0.0,
    }
}

fn cell(row: &[String], index: usize) -> String {
    row.get(index).cloned().unwrap_or_default()
}

/// Decodes the `Bills` tab. The header row is skipped and rows with fewer
/// than four cells are dropped. Newest first.
pub fn decode_bills(rows: &[Vec<String>]) -> Vec<BillRecord> {
    let mut bills: Vec<BillRecord> = rows
        .iter()
        .skip(1)
        .filter(|row| row.len() >= 4)
        .map(|row| BillRecord {
            date: cell(row, 0),
            paid_by: cell(row, 1),
            description: cell(row, 2),
            amount: parse_amount(&row[3]),
            split_with: cell(row, 4),
        })
        .collect();
    bills.sort_by(|a, b| b.date.cmp(&a.date));
    bills
}

/// Decodes the `Payments` tab. The header row is skipped and rows with fewer
/// than three cells are dropped. Newest first.
pub fn decode_payments(rows: &[Vec<String>]) -> Vec<PaymentRecord> {
    let mut payments: Vec<PaymentRecord> = rows
        .iter()
        .skip(1)
        .filter(|row| row.len() >= 3)
        .map(|row| PaymentRecord {
            date: cell(row, 0),
            paid_by: cell(row, 1),
            amount: parse_amount(&row[2]),
            note: cell(row, 3),
        })
        .collect();
    payments.sort_by(|a, b| b.date.cmp(&a.date));
    payments
}

pub fn encode_bill(bill: &BillRecord) -> Vec<String> {
    vec![
        bill.date.clone(),
        bill.paid_by.clone(),
        bill.description.clone(),
        bill.amount.to_string(),
        bill.split_with.clone(),
    ]
}

pub fn encode_payment(payment: &PaymentRecord) -> Vec<String> {
    vec![
        payment.date.clone(),
        payment.paid_by.clone(),
        payment.amount.to_string(),
        payment.note.clone(),
    ]
}

/// Roommate names from the `Roommates` tab, de-duplicated case-insensitively
/// in first-seen order.
pub fn decode_roommates(rows: &[Vec<String>]) -> Vec<String> {
    let mut seen = HashSet::new();
    rows.iter()
        .skip(1)
        .filter_map(|row| row.first())
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .filter(|name| seen.insert(name.to_lowercase()))
        .map(String::from)
        .collect()
}

/// Accepts either a full Google Sheets URL or a raw spreadsheet id.
pub fn extract_spreadsheet_id(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let without_scheme = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"));
    if let Some(rest) = without_scheme {
        let (host, path) = rest.split_once('/').unwrap_or((rest, ""));
        let path = format!("/{}", path.split(['?', '#']).next().unwrap_or_default());
        if host.contains("google") {
            if let Some((_, after)) = path.split_once("/d/") {
                return after.split('/').next().filter(|id| !id.is_empty()).map(String::from);
            }
        }
    }

    Some(trimmed.to_string())
}
