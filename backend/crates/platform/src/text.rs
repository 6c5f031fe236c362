//! Text helpers for user-facing and notification text
//!
//! Notifications are rendered as Telegram HTML, so any user-supplied value
//! embedded in them must pass through [`html_escape`] first.

use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};

/// Western Indonesia Time, UTC+7
const WIB_OFFSET_SECS: i64 = 7 * 3600;

/// Escape `< > " ' &` for embedding in HTML
pub fn html_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '&' => out.push_str("&amp;"),
            _ => out.push(c),
        }
    }
    out
}

/// `12000` -> `12.000`
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// `12000` -> `Rp 12.000`
pub fn format_rupiah(amount: u64) -> String {
    format!("Rp {}", group_thousands(amount))
}

fn to_wib(at: DateTime<Utc>) -> NaiveDateTime {
    at.naive_utc() + TimeDelta::seconds(WIB_OFFSET_SECS)
}

/// `19/10/2026`
pub fn format_wib_date(at: DateTime<Utc>) -> String {
    to_wib(at).format("%d/%m/%Y").to_string()
}

/// `14.05.09`
pub fn format_wib_time(at: DateTime<Utc>) -> String {
    to_wib(at).format("%H.%M.%S").to_string()
}

/// `19/10/2026, 14.05.09`
pub fn format_wib_datetime(at: DateTime<Utc>) -> String {
    to_wib(at).format("%d/%m/%Y, %H.%M.%S").to_string()
}
