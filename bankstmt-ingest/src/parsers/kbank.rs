//! KBANK (Kasikornbank) account statement parser (text)
//!
//! Rows come out of the PDF as three tab-separated segments:
//!   01-03-24 10:35 K PLUS<TAB>2,186.43 โอนไป BBL น.ส. จิราพร<TAB>โอนเงิน 309.00
//!   DATE TIME CHANNEL     BALANCE DESCRIPTION           TYPE AMOUNT
//!
//! The opening `ยอดยกมา` (brought forward) row carries only a balance and is
//! never a transaction.

use bankstmt_core::{extract_name, parse_amount, Transaction, AMOUNT_PATTERN};
use regex::Regex;
use rust_decimal::Decimal;
use std::sync::OnceLock;
use tracing::{trace, warn};

/// Marker on the opening-balance row
pub const BROUGHT_FORWARD: &str = "ยอดยกมา";

const INBOUND_TRANSFER_PREFIX: &str = "รับโอนเงิน";
const DEPOSIT: &str = "ฝากเงิน";
const INTEREST: &str = "ดอกเบี้ย";

fn txn_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let pattern = [
            r"^(?P<dd>[0-9]{2})-(?P<mm>[0-9]{2})-(?P<yy>[0-9]{2})\s+",
            r"(?P<time>[0-9]{2}:[0-9]{2})\s+",
            r"(?P<channel>[^\t]+?)\t\s*",
            r"(?P<balance>", AMOUNT_PATTERN, r")",
            // Description is optional; spaces (never a tab) separate it from the balance.
            r"(?:[^\S\t]+(?P<desc>[^\t]*?))?[^\S\t]*\t\s*",
            r"(?P<kind>.+?)\s+",
            r"(?P<amount>", AMOUNT_PATTERN, r")$",
        ]
        .concat();
        Regex::new(&pattern).expect("kbank row regex")
    })
}

/// Whether a KBANK transaction type means money in.
pub fn is_credit_type(kind: &str) -> bool {
    kind.starts_with(INBOUND_TRANSFER_PREFIX) || kind == DEPOSIT || kind == INTEREST
}

/// Parse extracted KBANK statement text into transactions, in source order.
pub fn parse_kbank_text(text: &str) -> Vec<Transaction> {
    let mut out = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.contains(BROUGHT_FORWARD) {
            trace!(line_no, "skipping brought-forward row");
            continue;
        }

        let Some(caps) = txn_re().captures(line) else {
            continue;
        };

        let amounts = parse_amount(&caps["amount"])
            .and_then(|amount| Ok((amount, parse_amount(&caps["balance"])?)));
        let (amount, balance) = match amounts {
            Ok(pair) => pair,
            Err(err) => {
                warn!(line_no, %err, "skipping KBANK row with unreadable amount");
                continue;
            }
        };

        let kind = caps["kind"].trim();
        let debit_credit: Decimal = if is_credit_type(kind) { amount } else { -amount };
        let description_clean = caps
            .name("desc")
            .map_or("", |m| m.as_str())
            .trim()
            .to_string();

        out.push(Transaction {
            date: format!("{}/{}/{}", &caps["dd"], &caps["mm"], &caps["yy"]),
            time: caps["time"].to_string(),
            code: kind.to_string(),
            debit_credit,
            balance,
            description_note: format!("{} | {}", description_clean, kind),
            name: extract_name(&description_clean),
            description_clean,
            note: String::new(),
        });
    }

    out
}
