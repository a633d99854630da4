//! bankstmt-ingest: bank-specific statement text parsers and the dispatch
//! that picks one for a given bank.

pub mod codes;
pub mod parsers {
    pub mod kbank;
    pub mod scb;
}

pub use bankstmt_core::{BankType, ParseResult, Transaction};
pub use codes::CodeTable;

use tracing::debug;

/// Parse statement text (all pages joined with newlines, in page order).
///
/// Never fails: lines that are not transactions are skipped, and text with
/// no transactions yields an empty result.
pub fn parse_statement(text: &str, bank: BankType) -> ParseResult {
    parse_statement_with(text, bank, CodeTable::standard())
}

/// Like [`parse_statement`], with a caller-supplied SCB code table.
pub fn parse_statement_with(text: &str, bank: BankType, codes: &CodeTable) -> ParseResult {
    let transactions = match bank {
        BankType::Scb => parsers::scb::parse_scb_text(text, codes),
        BankType::Kbank => parsers::kbank::parse_kbank_text(text),
    };
    debug!(bank = %bank, count = transactions.len(), "parsed statement text");
    ParseResult::from_transactions(transactions)
}

/// Parse with a raw bank tag; unknown or missing tags are read as SCB.
pub fn parse_statement_tagged(text: &str, tag: Option<&str>) -> ParseResult {
    parse_statement(text, BankType::from_tag(tag))
}
