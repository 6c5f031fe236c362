//! Signed admin session
//!
//! The session lives entirely in the cookie:
//! `b64url("{expires_at_ms}:{username}") "." b64url(HMAC-SHA256(payload))`.
//! Nothing is stored server-side, so logout only clears the cookie and a
//! restart with a new secret invalidates every session.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSession {
    pub username: String,
    pub expires_at_ms: i64,
}

impl AdminSession {
    pub fn new(username: impl Into<String>, now_ms: i64, ttl_ms: i64) -> Self {
        Self {
            username: username.into(),
            expires_at_ms: now_ms.saturating_add(ttl_ms),
        }
    }

    pub fn is_expired(&self, now_ms: i64) -> bool {
        now_ms >= self.expires_at_ms
    }

    /// Encode and sign for the cookie
    pub fn sign(&self, secret: &[u8]) -> String {
        let payload = URL_SAFE_NO_PAD.encode(format!("{}:{}", self.expires_at_ms, self.username));
        let signature = URL_SAFE_NO_PAD.encode(mac(secret, &payload).finalize().into_bytes());
        format!("{payload}.{signature}")
    }

    /// Verify signature and expiry. Any malformed token is simply `None`.
    pub fn verify(token: &str, secret: &[u8], now_ms: i64) -> Option<Self> {
        let (payload, signature) = token.split_once('.')?;
        let signature = URL_SAFE_NO_PAD.decode(signature).ok()?;
        mac(secret, payload).verify_slice(&signature).ok()?;

        let decoded = String::from_utf8(URL_SAFE_NO_PAD.decode(payload).ok()?).ok()?;
        let (expires_at_ms, username) = decoded.split_once(':')?;
        let session = Self {
            username: username.to_string(),
            expires_at_ms: expires_at_ms.parse().ok()?,
        };

        (!session.is_expired(now_ms)).then_some(session)
    }
}

fn mac(secret: &[u8], payload: &str) -> HmacSha256 {
    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(payload.as_bytes());
    mac
}
