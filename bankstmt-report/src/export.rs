//! Tabular and JSON export of a parsed statement.
//!
//! CSV columns follow the converter's spreadsheet layout:
//! Date, Time, Code, Debit/Credit, Balance/Baht, Description/Note,
//! Description_Clean, Name, Note

use anyhow::{Context, Result};
use bankstmt_core::{ParseResult, Transaction};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => Err(format!("unknown export format {:?} (expected csv or json)", other)),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[derive(Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "Date")]
    date: &'a str,
    #[serde(rename = "Time")]
    time: &'a str,
    #[serde(rename = "Code")]
    code: &'a str,
    // Decimals go out as text so the printed scale ("309.00") survives.
    #[serde(rename = "Debit/Credit")]
    debit_credit: String,
    #[serde(rename = "Balance/Baht")]
    balance: String,
    #[serde(rename = "Description/Note")]
    description_note: &'a str,
    #[serde(rename = "Description_Clean")]
    description_clean: &'a str,
    #[serde(rename = "Name")]
    name: &'a str,
    #[serde(rename = "Note")]
    note: &'a str,
}

impl<'a> From<&'a Transaction> for CsvRow<'a> {
    fn from(t: &'a Transaction) -> Self {
        Self {
            date: &t.date,
            time: &t.time,
            code: &t.code,
            debit_credit: t.debit_credit.to_string(),
            balance: t.balance.to_string(),
            description_note: &t.description_note,
            description_clean: &t.description_clean,
            name: &t.name,
            note: &t.note,
        }
    }
}

/// Write one CSV row per transaction, with a header row.
pub fn write_csv<W: Write>(w: W, txns: &[Transaction]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(w);
    for txn in txns {
        wtr.serialize(CsvRow::from(txn)).context("write csv row")?;
    }
    if txns.is_empty() {
        wtr.write_record([
            "Date",
            "Time",
            "Code",
            "Debit/Credit",
            "Balance/Baht",
            "Description/Note",
            "Description_Clean",
            "Name",
            "Note",
        ])
        .context("write csv header")?;
    }
    wtr.flush().context("flush csv")?;
    Ok(())
}

/// Write the whole result (transactions and totals) as pretty JSON.
pub fn write_json<W: Write>(mut w: W, result: &ParseResult) -> Result<()> {
    serde_json::to_writer_pretty(&mut w, result).context("serialize statement json")?;
    writeln!(w).context("write json")?;
    w.flush().context("flush json")?;
    Ok(())
}

pub fn write_export<W: Write>(w: W, result: &ParseResult, format: ExportFormat) -> Result<()> {
    match format {
        ExportFormat::Csv => write_csv(w, &result.transactions),
        ExportFormat::Json => write_json(w, result),
    }
}

/// Summary totals as `(header, value)` pairs, as the converter sent them
/// alongside the spreadsheet download.
pub fn summary_headers(result: &ParseResult) -> Vec<(&'static str, String)> {
    vec![
        ("X-Total-Transactions", result.total_transactions.to_string()),
        ("X-Total-Credit", result.total_credit.to_string()),
        ("X-Total-Debit", result.total_debit.to_string()),
        ("X-Final-Balance", result.final_balance.to_string()),
    ]
}

/// `bank_statement_detailed_<YYYY-MM-DD>.<ext>`
pub fn default_export_file_name(date: NaiveDate, format: ExportFormat) -> String {
    format!(
        "bank_statement_detailed_{}.{}",
        date.format("%Y-%m-%d"),
        format.extension()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn result() -> ParseResult {
        ParseResult::from_transactions(vec![
            Transaction {
                date: "01/03/24".to_string(),
                time: "09:15".to_string(),
                code: "receive transfer".to_string(),
                debit_credit: Decimal::new(150_000, 2),
                balance: Decimal::new(1_000_000, 2),
                description_note: "นาย สมชาย ใจดี | ค่าเช่า".to_string(),
                description_clean: "นาย สมชาย ใจดี".to_string(),
                name: "นาย สมชาย ใจดี".to_string(),
                note: "ค่าเช่า".to_string(),
            },
            Transaction {
                date: "02/03/24".to_string(),
                time: "12:40".to_string(),
                code: "transfer out".to_string(),
                debit_credit: Decimal::new(-30_900, 2),
                balance: Decimal::new(969_100, 2),
                description_note: "โอนไป KBANK, สาขา 1".to_string(),
                description_clean: "โอนไป KBANK, สาขา 1".to_string(),
                name: String::new(),
                note: String::new(),
            },
        ])
    }

    #[test]
    fn test_csv_layout() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &result().transactions).unwrap();
        let out = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(
            lines[0],
            "Date,Time,Code,Debit/Credit,Balance/Baht,Description/Note,Description_Clean,Name,Note"
        );
        assert_eq!(
            lines[1],
            "01/03/24,09:15,receive transfer,1500.00,10000.00,นาย สมชาย ใจดี | ค่าเช่า,นาย สมชาย ใจดี,นาย สมชาย ใจดี,ค่าเช่า"
        );
        // Commas inside descriptions are quoted.
        assert_eq!(
            lines[2],
            "02/03/24,12:40,transfer out,-309.00,9691.00,\"โอนไป KBANK, สาขา 1\",\"โอนไป KBANK, สาขา 1\",,"
        );
    }

    #[test]
    fn test_csv_header_without_rows() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &[]).unwrap();
        assert!(String::from_utf8(buf).unwrap().starts_with("Date,Time,Code,"));
    }

    #[test]
    fn test_json_round_trip() {
        let mut buf = Vec::new();
        write_json(&mut buf, &result()).unwrap();
        let back: ParseResult = serde_json::from_slice(&buf).unwrap();
        assert_eq!(back.total_transactions, 2);
        assert_eq!(back.transactions[1].code, "transfer out");
        assert_eq!(back.total_debit, Decimal::new(-30_900, 2));
    }

    #[test]
    fn test_summary_headers() {
        let headers = summary_headers(&result());
        assert_eq!(
            headers,
            vec![
                ("X-Total-Transactions", "2".to_string()),
                ("X-Total-Credit", "1500.00".to_string()),
                ("X-Total-Debit", "-309.00".to_string()),
                ("X-Final-Balance", "9691.00".to_string()),
            ]
        );
    }

    #[test]
    fn test_default_file_name() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        assert_eq!(
            default_export_file_name(date, ExportFormat::Csv),
            "bank_statement_detailed_2026-03-01.csv"
        );
        assert_eq!(
            default_export_file_name(date, ExportFormat::Json),
            "bank_statement_detailed_2026-03-01.json"
        );
    }

    #[test]
    fn test_format_parse() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert!("xlsx".parse::<ExportFormat>().is_err());
    }
}
