//! Counterparty name extraction from free-text transaction descriptions.
//!
//! Statement descriptions carry the other party inline, e.g.
//!   `โอนไป BBL น.ส. จิราพร`
//!   `PromptPay นาย สมชาย ใจดี`
//!   `บริษัท เอบีซี จำกัด`
//! A personal honorific is looked for first, then a corporate prefix.

use regex::Regex;
use std::sync::OnceLock;

fn person_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // นางสาว before นาง: leftmost-first alternation keeps นาง from eating the prefix of นางสาว.
    RE.get_or_init(|| {
        Regex::new(r"(?i)(นางสาว|นาง|นาย|น\.ส\.|\bMRS\.?|\bMR\.?|\bMS\.?)\s+(.+)")
            .expect("person regex")
    })
}

fn name_run_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^([\p{L}\p{M}\s.]+?)(?:\s*$|\s*(?:NOTE|DESC))").expect("name run regex")
    })
}

fn company_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(บริษัท|บจก\.|บมจ\.|หจก\.|ห้างหุ้นส่วนจำกัด|สหกรณ์|มูลนิธิ)\s+(.+)")
            .expect("company regex")
    })
}

/// Best-effort counterparty name, or an empty string when the description
/// names nobody.
pub fn extract_name(description: &str) -> String {
    if let Some(caps) = person_re().captures(description) {
        let title = &caps[1];
        let rest = caps[2].trim();
        return match name_run_re().captures(rest) {
            Some(run) => format!("{} {}", title, run[1].trim()),
            None => format!("{} {}", title, rest),
        };
    }

    if let Some(caps) = company_re().captures(description) {
        return format!("{} {}", &caps[1], caps[2].trim());
    }

    String::new()
}
