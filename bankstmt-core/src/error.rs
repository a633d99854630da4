//! Error type shared by the statement crates.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatementError {
    #[error("invalid amount: {0:?}")]
    InvalidAmount(String),

    #[error("unknown bank type: {0:?} (expected SCB or KBANK)")]
    UnknownBank(String),

    #[error("statement text is {size} bytes, limit is {limit} bytes")]
    InputTooLarge { size: usize, limit: usize },

    #[error("no transactions found in the statement text; check the bank type and file format")]
    NoTransactions,
}

pub type Result<T> = std::result::Result<T, StatementError>;
