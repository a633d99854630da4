//! bankstmt-core: ledger types, amount parsing, bank tags, counterparty
//! extraction and summary totals shared by the statement crates.

pub mod amount;
pub mod bank;
pub mod error;
pub mod model;
pub mod names;
pub mod summary;

pub use amount::{is_amount, parse_amount, AMOUNT_PATTERN};
pub use bank::BankType;
pub use error::{Result, StatementError};
pub use model::{join_description, ParseResult, Transaction};
pub use names::extract_name;
pub use summary::Summary;
