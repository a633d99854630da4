//! Parsed ledger types: one [`Transaction`] per statement entry and the
//! [`ParseResult`] that carries them together with the summary totals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::summary::Summary;

/// One row of the parsed ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Date as printed, normalized to `DD/MM/YY`
    pub date: String,
    /// `HH:MM` as printed
    pub time: String,
    /// Mapped label or raw transaction code / type text
    pub code: String,
    /// Positive = money in, negative = money out
    pub debit_credit: Decimal,
    /// Running balance after this entry
    pub balance: Decimal,
    pub description_note: String,
    pub description_clean: String,
    /// Counterparty name recovered from the description, or empty
    pub name: String,
    /// Supplementary note line, empty when the statement had none
    pub note: String,
}

impl Transaction {
    pub fn is_credit(&self) -> bool {
        self.debit_credit > Decimal::ZERO
    }

    pub fn is_debit(&self) -> bool {
        self.debit_credit < Decimal::ZERO
    }
}

/// Join a description with an optional note the way statement exports show it.
pub fn join_description(description: &str, note: Option<&str>) -> String {
    match note {
        Some(note) => format!("{} | {}", description, note),
        None => description.to_string(),
    }
}

/// Transactions in source order plus their totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult {
    pub transactions: Vec<Transaction>,
    pub total_credit: Decimal,
    pub total_debit: Decimal,
    pub total_transactions: usize,
    pub final_balance: Decimal,
}

impl ParseResult {
    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        let summary = Summary::from_transactions(&transactions);
        Self {
            transactions,
            total_credit: summary.total_credit,
            total_debit: summary.total_debit,
            total_transactions: summary.total_transactions,
            final_balance: summary.final_balance,
        }
    }

    pub fn empty() -> Self {
        Self::from_transactions(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn summary(&self) -> Summary {
        Summary {
            total_credit: self.total_credit,
            total_debit: self.total_debit,
            total_transactions: self.total_transactions,
            final_balance: self.final_balance,
        }
    }
}
