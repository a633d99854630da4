//! SCB (Siam Commercial Bank) account statement parser (text)
//!
//! Expected extracted-text rows:
//!   01/03/24 09:15 X1 ENET 1,500.00 10,000.00 DESC : นาย สมชาย ใจดี
//!   NOTE : ค่าเช่า
//!   02/03/24 12:40 X2 ENET 309.00 9,691.00 DESC : โอนไป KBANK
//!
//! A `NOTE` line belongs to the row directly above it.

use bankstmt_core::{extract_name, join_description, parse_amount, Transaction, AMOUNT_PATTERN};
use regex::Regex;
use std::sync::OnceLock;
use tracing::{trace, warn};

use crate::codes::CodeTable;

fn txn_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // DATE TIME CODE CHANNEL AMOUNT BALANCE DESC : description
    RE.get_or_init(|| {
        let pattern = [
            r"^(?P<date>[0-9]{2}/[0-9]{2}/[0-9]{2})\s+",
            r"(?P<time>[0-9]{2}:[0-9]{2})\s+",
            r"(?P<code>[A-Z0-9]+)\s+",
            r"(?P<channel>[A-Z]+)\s+",
            r"(?P<amount>", AMOUNT_PATTERN, r")\s+",
            r"(?P<balance>", AMOUNT_PATTERN, r")\s+",
            r"DESC\s*:\s*(?P<desc>.*)$",
        ]
        .concat();
        Regex::new(&pattern).expect("scb row regex")
    })
}

fn note_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^NOTE\s*:\s*(?P<note>.+)$").expect("scb note regex"))
}

/// Parse extracted SCB statement text into transactions, in source order.
pub fn parse_scb_text(text: &str, codes: &CodeTable) -> Vec<Transaction> {
    let lines: Vec<&str> = text.lines().map(str::trim).collect();
    let mut out = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        let line_no = i + 1;
        let Some(caps) = txn_re().captures(lines[i]) else {
            if !lines[i].is_empty() {
                trace!(line_no, "not an SCB transaction row");
            }
            i += 1;
            continue;
        };
        i += 1;

        // The note line is consumed here so the loop never rescans it.
        let note = lines
            .get(i)
            .and_then(|next| note_re().captures(next))
            .map(|n| n["note"].trim().to_string());
        if note.is_some() {
            i += 1;
        }

        // AMOUNT_PATTERN only admits parseable amounts.
        let amounts = parse_amount(&caps["amount"])
            .and_then(|amount| Ok((amount, parse_amount(&caps["balance"])?)));
        let (amount, balance) = match amounts {
            Ok(pair) => pair,
            Err(err) => {
                warn!(line_no, %err, "skipping SCB row with unreadable amount");
                continue;
            }
        };

        let code = &caps["code"];
        let description_clean = caps["desc"].trim().to_string();

        out.push(Transaction {
            date: caps["date"].to_string(),
            time: caps["time"].to_string(),
            code: codes.label(code).to_string(),
            debit_credit: codes.signed(code, amount),
            balance,
            description_note: join_description(&description_clean, note.as_deref()),
            name: extract_name(&description_clean),
            description_clean,
            note: note.unwrap_or_default(),
        });
    }

    out
}
