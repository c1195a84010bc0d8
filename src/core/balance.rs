use crate::core::models::balance::RoommateBalance;
use crate::core::models::bill::BillRecord;
use crate::core::models::payment::PaymentRecord;
use std::collections::HashMap;
use tracing::debug;

/// Turns a ledger of bills and payments into per-roommate balances against the manager.
///
/// Names are matched case-insensitively after trimming; the first spelling seen
/// is the one reported. The manager never appears in the result, and a manager
/// listed in `split_with` still counts towards the share denominator, so that
/// fraction of the bill is simply absorbed.
pub struct BalanceEngine;

#[derive(Default)]
struct Totals {
    index: HashMap<String, usize>,
    entries: Vec<RoommateBalance>,
}

impl Totals {
    fn add(&mut self, name: &str, delta: f64) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        let key = name.to_lowercase();
        match self.index.get(&key) {
            Some(&i) => self.entries[i].amount_owed += delta,
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push(RoommateBalance {
                    name: name.to_string(),
                    amount_owed: delta,
                });
            }
        }
    }

    fn remove(&mut self, name: &str) {
        if let Some(i) = self.index.remove(&name.to_lowercase()) {
            self.entries.remove(i);
            for slot in self.index.values_mut() {
                if *slot > i {
                    *slot -= 1;
                }
            }
        }
    }
}

fn same_person(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

impl BalanceEngine {
    pub fn compute_balances(
        bills: &[BillRecord],
        payments: &[PaymentRecord],
        manager_name: &str,
    ) -> Vec<RoommateBalance> {
        let manager = manager_name.trim();
        let mut totals = Totals::default();

        for bill in bills {
            let amount = bill.amount;
            if amount == 0.0 {
                continue;
            }

            let participants = bill.participants();
            if participants.is_empty() {
                continue;
            }

            let share = amount / participants.len() as f64;
            for person in participants {
                if !same_person(person, manager) {
                    totals.add(person, share);
                }
            }

            let payer = bill.paid_by.trim();
            if !payer.is_empty() && !same_person(payer, manager) {
                totals.add(payer, -amount);
            }
        }

        for payment in payments {
            let payer = payment.paid_by.trim();
            if payer.is_empty() || same_person(payer, manager) {
                continue;
            }
            totals.add(payer, -payment.amount);
        }

        totals.remove(manager);

        let mut balances = totals.entries;
        balances.sort_by(|a, b| b.amount_owed.total_cmp(&a.amount_owed));
        debug!(
            "Computed {} balances from {} bills and {} payments",
            balances.len(),
            bills.len(),
            payments.len()
        );
        balances
    }
}
