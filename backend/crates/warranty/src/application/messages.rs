//! Notification texts (Telegram HTML)

use chrono::{DateTime, Utc};
use platform::text::{format_wib_date, format_wib_datetime, format_wib_time, html_escape};

use crate::domain::entities::{ClaimRejection, WarrantyToken};
use crate::domain::value_objects::ServerId;

pub fn issued(token: &WarrantyToken) -> String {
    format!(
        "🔧 <b>TOKEN GARANSI DIBUAT</b>\n\n\
         🆔 <b>Token:</b> <code>{}</code>\n\
         👤 <b>User:</b> {}\n\
         🆔 <b>Server ID:</b> {}\n\
         📅 <b>Berlaku:</b> {}\n\
         ⏰ <b>Waktu:</b> {}",
        token.token,
        html_escape(&token.username),
        token.server_id,
        format_wib_date(token.expires_at),
        format_wib_time(token.created_at),
    )
}

pub fn claimed(token: &WarrantyToken, now: DateTime<Utc>) -> String {
    format!(
        "✅ <b>TOKEN GARANSI DIGUNAKAN</b>\n\n\
         🆔 <b>Token:</b> <code>{}</code>\n\
         👤 <b>User:</b> {}\n\
         🆔 <b>Server ID:</b> {}\n\
         ⏰ <b>Waktu:</b> {}",
        token.token,
        html_escape(&token.username),
        token.server_id,
        format_wib_time(now),
    )
}

/// Text for a refused claim; `record` is the stored token when it exists.
pub fn rejected(
    reason: ClaimRejection,
    token: &str,
    requested: &ServerId,
    record: Option<&WarrantyToken>,
) -> String {
    let token = html_escape(token);
    let requested = html_escape(requested.as_str());

    match (reason, record) {
        (ClaimRejection::AlreadyUsed, Some(record)) => format!(
            "❌ <b>TOKEN GARANSI SUDAH DIGUNAKAN</b>\n\n\
             🆔 <b>Token:</b> <code>{token}</code>\n\
             👤 <b>User:</b> {}\n\
             🆔 <b>Server ID:</b> {requested}\n\
             ⏰ <b>Digunakan pada:</b> {}",
            html_escape(&record.username),
            record
                .used_at
                .map(format_wib_datetime)
                .unwrap_or_else(|| "Unknown".to_string()),
        ),
        (ClaimRejection::Expired, Some(record)) => format!(
            "❌ <b>TOKEN GARANSI KADALUARSA</b>\n\n\
             🆔 <b>Token:</b> <code>{token}</code>\n\
             👤 <b>User:</b> {}\n\
             🆔 <b>Server ID:</b> {requested}\n\
             📅 <b>Kadaluarsa:</b> {}",
            html_escape(&record.username),
            format_wib_date(record.expires_at),
        ),
        (ClaimRejection::ServerMismatch, Some(record)) => format!(
            "❌ <b>TOKEN GARANSI SERVER TIDAK COCOK</b>\n\n\
             🆔 <b>Token:</b> <code>{token}</code>\n\
             👤 <b>User:</b> {}\n\
             🆔 <b>Server ID Token:</b> {}\n\
             🆔 <b>Server ID Request:</b> {requested}",
            html_escape(&record.username),
            record.server_id,
        ),
        _ => format!(
            "❌ <b>TOKEN GARANSI INVALID</b>\n\n\
             🆔 <b>Token:</b> <code>{token}</code>\n\
             🆔 <b>Server ID:</b> {requested}\n\
             ❌ <b>Status:</b> Token tidak ditemukan"
        ),
    }
}
