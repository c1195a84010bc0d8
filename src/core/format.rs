//! Display helpers for balances. Rounding happens here and nowhere else.

use crate::core::models::balance::{BalanceStatus, RoommateBalance};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

fn currency_symbol(code: &str) -> Option<&'static str> {
    match code.to_ascii_uppercase().as_str() {
        "USD" | "CAD" | "AUD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" => Some("¥"),
        _ => None,
    }
}

/// `1234.5` in USD -> `$1,234.50`; `-0.006` -> `-$0.01`.
///
/// NaN and infinities have no currency form and come back as `"NaN"`,
/// `"inf"` or `"-inf"`. Cent counts beyond `u64::MAX` saturate.
pub fn format_currency(amount: f64, code: &str) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }
    let cents = (amount.abs() * 100.0).round() as u64;
    let negative = amount < 0.0 && cents > 0;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    match currency_symbol(code) {
        Some(symbol) => format!("{}{}{}.{:02}", sign, symbol, grouped, fraction),
        None => format!("{}{} {}.{:02}", sign, code.to_ascii_uppercase(), grouped, fraction),
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct BalanceRow {
    pub name: String,
    pub amount_owed: f64,
    pub formatted: String,
    pub status: BalanceStatus,
}

pub fn balance_rows(balances: &[RoommateBalance], currency_code: &str) -> Vec<BalanceRow> {
    balances
        .iter()
        .map(|balance| BalanceRow {
            name: balance.name.clone(),
            amount_owed: balance.amount_owed,
            formatted: format_currency(balance.amount_owed, currency_code),
            status: BalanceStatus::of(balance.amount_owed),
        })
        .collect()
}
