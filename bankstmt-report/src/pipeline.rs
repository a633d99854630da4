//! Conversion pipeline: the checks an upload handler applies around the
//! parser (input size cap, empty-result rejection).

use bankstmt_core::{BankType, ParseResult, StatementError};
use bankstmt_ingest::{parse_statement_with, CodeTable};
use tracing::info;

/// Upload limit of the statement converter (10 MiB of text)
pub const DEFAULT_MAX_INPUT_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq)]
pub struct ConvertOptions {
    pub max_input_bytes: usize,
    pub codes: CodeTable,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            codes: CodeTable::default(),
        }
    }
}

/// Converts statement text into a non-empty ledger.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Parse `text` as a `bank` statement.
    ///
    /// Errors when the text exceeds the size cap or contains no transactions;
    /// the parser itself never fails.
    pub fn convert(&self, text: &str, bank: BankType) -> Result<ParseResult, StatementError> {
        if text.len() > self.options.max_input_bytes {
            return Err(StatementError::InputTooLarge {
                size: text.len(),
                limit: self.options.max_input_bytes,
            });
        }

        let result = parse_statement_with(text, bank, &self.options.codes);
        if result.is_empty() {
            return Err(StatementError::NoTransactions);
        }

        info!(
            bank = %bank,
            transactions = result.total_transactions,
            credit = %result.total_credit,
            debit = %result.total_debit,
            "converted statement"
        );
        Ok(result)
    }
}
