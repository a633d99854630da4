//! Supported statement layouts and resolution of caller-supplied bank tags.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

use crate::error::StatementError;

/// Statement layout, one variant per supported bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BankType {
    /// Siam Commercial Bank: single line per entry with an optional `NOTE:` line
    #[default]
    #[serde(rename = "SCB", alias = "scb")]
    Scb,
    /// Kasikornbank: tab-separated segments, one line per entry
    #[serde(rename = "KBANK", alias = "kbank")]
    Kbank,
}

impl BankType {
    pub const ALL: [BankType; 2] = [BankType::Scb, BankType::Kbank];

    pub fn tag(&self) -> &'static str {
        match self {
            BankType::Scb => "SCB",
            BankType::Kbank => "KBANK",
        }
    }

    /// Resolve a tag leniently: anything unknown or missing means SCB.
    ///
    /// Upload forms historically sent no tag for SCB statements, so callers
    /// relying on that keep working. Surfaces that can reject input up front
    /// should use [`str::parse`] instead.
    pub fn from_tag(tag: Option<&str>) -> BankType {
        match tag {
            None => BankType::default(),
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                warn!(tag = raw, "unrecognized bank type, falling back to SCB");
                BankType::default()
            }),
        }
    }
}

impl FromStr for BankType {
    type Err = StatementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        BankType::ALL
            .into_iter()
            .find(|b| b.tag().eq_ignore_ascii_case(tag))
            .ok_or_else(|| StatementError::UnknownBank(s.to_string()))
    }
}

impl fmt::Display for BankType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
