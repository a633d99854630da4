//! SCB transaction-code table: display labels and which codes are outflows.
//!
//! The built-in table only knows the codes seen on real statements so far.
//! Anything else keeps the printed (positive) amount and its raw code, so
//! callers that meet new debit codes should extend the table rather than
//! patch the parser.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodeTable {
    /// Codes whose amounts are always money out
    pub debit: BTreeSet<String>,
    /// Code -> label surfaced in `Transaction::code`
    pub labels: BTreeMap<String, String>,
}

impl Default for CodeTable {
    fn default() -> Self {
        let labels = [("X1", "receive transfer"), ("X2", "transfer out")]
            .into_iter()
            .map(|(code, label)| (code.to_string(), label.to_string()))
            .collect();
        let debit = ["X2", "CO"].into_iter().map(str::to_string).collect();
        Self { debit, labels }
    }
}

impl CodeTable {
    /// Shared copy of the built-in table.
    pub fn standard() -> &'static CodeTable {
        static TABLE: OnceLock<CodeTable> = OnceLock::new();
        TABLE.get_or_init(CodeTable::default)
    }

    pub fn label<'a>(&'a self, code: &'a str) -> &'a str {
        self.labels.get(code).map(String::as_str).unwrap_or(code)
    }

    pub fn is_debit(&self, code: &str) -> bool {
        self.debit.contains(code)
    }

    /// Apply the code's sign to a printed (non-negative) amount.
    pub fn signed(&self, code: &str, amount: Decimal) -> Decimal {
        if self.is_debit(code) { -amount } else { amount }
    }
}
