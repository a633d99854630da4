//! Totals over a parsed ledger.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::model::Transaction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Sum of strictly positive amounts
    pub total_credit: Decimal,
    /// Sum of strictly negative amounts (zero or below)
    pub total_debit: Decimal,
    pub total_transactions: usize,
    /// Balance of the last transaction, zero when there are none
    pub final_balance: Decimal,
}

impl Summary {
    pub fn from_transactions(txns: &[Transaction]) -> Self {
        let mut summary = Summary {
            total_transactions: txns.len(),
            ..Summary::default()
        };

        for txn in txns {
            if txn.is_credit() {
                accumulate(&mut summary.total_credit, txn.debit_credit);
            } else if txn.is_debit() {
                accumulate(&mut summary.total_debit, txn.debit_credit);
            }
        }

        summary.final_balance = txns.last().map(|t| t.balance).unwrap_or(Decimal::ZERO);
        summary
    }

    /// Net movement over the period
    pub fn net(&self) -> Decimal {
        self.total_credit + self.total_debit
    }
}

// Parsed amounts are bounded and cannot get here; hand-built ledgers clamp.
fn accumulate(total: &mut Decimal, amount: Decimal) {
    let current = *total;
    *total = current.checked_add(amount).unwrap_or_else(|| {
        warn!(%amount, "ledger total out of range, clamping");
        current.saturating_add(amount)
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn txn(amount: Decimal, balance: Decimal) -> Transaction {
        Transaction {
            date: "01/03/24".to_string(),
            time: "10:00".to_string(),
            code: "X1".to_string(),
            debit_credit: amount,
            balance,
            description_note: String::new(),
            description_clean: String::new(),
            name: String::new(),
            note: String::new(),
        }
    }

    #[test]
    fn test_empty_is_all_zero() {
        let s = Summary::from_transactions(&[]);
        assert_eq!(s, Summary::default());
        assert_eq!(s.final_balance, Decimal::ZERO);
    }

    #[test]
    fn test_totals_split_by_sign() {
        let txns = vec![
            txn(Decimal::new(150_000, 2), Decimal::new(1_000_000, 2)),
            txn(Decimal::new(-30_900, 2), Decimal::new(969_100, 2)),
            txn(Decimal::new(25, 2), Decimal::new(969_125, 2)),
            txn(Decimal::new(-10_000, 2), Decimal::new(959_125, 2)),
        ];
        let s = Summary::from_transactions(&txns);

        assert_eq!(s.total_credit, Decimal::new(150_025, 2));
        assert_eq!(s.total_debit, Decimal::new(-40_900, 2));
        assert_eq!(s.total_transactions, 4);
        assert_eq!(s.final_balance, Decimal::new(959_125, 2));
        assert_eq!(s.net(), Decimal::new(109_125, 2));
    }

    #[test]
    fn test_totals_clamp_instead_of_panicking() {
        let txns = vec![
            txn(Decimal::MAX, Decimal::ONE),
            txn(Decimal::MAX, Decimal::ONE),
            txn(Decimal::MIN, Decimal::ONE),
            txn(Decimal::MIN, Decimal::new(2, 0)),
        ];
        let s = Summary::from_transactions(&txns);
        assert_eq!(s.total_credit, Decimal::MAX);
        assert_eq!(s.total_debit, Decimal::MIN);
        assert_eq!(s.total_transactions, 4);
        assert_eq!(s.final_balance, Decimal::new(2, 0));
        assert_eq!(s.net(), Decimal::ZERO);
    }

    #[test]
    fn test_zero_amount_counts_but_adds_nothing() {
        let txns = vec![txn(Decimal::ZERO, Decimal::new(500, 0))];
        let s = Summary::from_transactions(&txns);
        assert_eq!(s.total_transactions, 1);
        assert_eq!(s.total_credit, Decimal::ZERO);
        assert_eq!(s.total_debit, Decimal::ZERO);
        assert_eq!(s.final_balance, Decimal::new(500, 0));
    }
}
