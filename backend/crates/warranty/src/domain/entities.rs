//! Domain Entities

use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;

use crate::domain::value_objects::ServerId;

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Single-use, time-boxed right to have one server reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WarrantyToken {
    pub token: String,
    pub server_id: ServerId,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub used: bool,
    pub used_at: Option<DateTime<Utc>>,
}

/// Why a claim was refused. Checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimRejection {
    NotFound,
    AlreadyUsed,
    Expired,
    ServerMismatch,
}

impl ClaimRejection {
    /// Message shown to the customer
    pub fn message(&self) -> &'static str {
        match self {
            ClaimRejection::NotFound => "Token tidak valid",
            ClaimRejection::AlreadyUsed => "Token sudah digunakan",
            ClaimRejection::Expired => "Token sudah kadaluarsa",
            ClaimRejection::ServerMismatch => "Token tidak cocok untuk server ini",
        }
    }
}

impl std::fmt::Display for ClaimRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Result of an atomic claim attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaimOutcome {
    /// Token after being marked used
    Claimed(WarrantyToken),
    /// Refused; `token` is the untouched record when one exists
    Rejected {
        reason: ClaimRejection,
        token: Option<WarrantyToken>,
    },
}

impl WarrantyToken {
    pub fn issue(
        token: String,
        server_id: ServerId,
        username: String,
        validity: TimeDelta,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            token,
            server_id,
            username,
            created_at: now,
            expires_at: now + validity,
            used: false,
            used_at: None,
        }
    }

    /// Claim rules past the existence check: used, then expiry, then server.
    ///
    /// A token past `expires_at` is refused even if never used; exactly at
    /// `expires_at` it can still be claimed.
    pub fn check_claim(&self, server_id: &ServerId, now: DateTime<Utc>) -> Result<(), ClaimRejection> {
        if self.used {
            return Err(ClaimRejection::AlreadyUsed);
        }
        if now > self.expires_at {
            return Err(ClaimRejection::Expired);
        }
        if &self.server_id != server_id {
            return Err(ClaimRejection::ServerMismatch);
        }
        Ok(())
    }

    pub fn mark_used(&mut self, now: DateTime<Utc>) {
        self.used = true;
        self.used_at = Some(now);
    }

    /// Read-side expiry: expired from `expires_at` onwards
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        !self.used && !self.is_expired_at(now)
    }

    /// Whole days left, rounded up; zero or negative once expired
    pub fn days_remaining(&self, now: DateTime<Utc>) -> i64 {
        let left_ms = (self.expires_at - now).num_milliseconds();
        let whole = left_ms.div_euclid(DAY_MS);
        if left_ms.rem_euclid(DAY_MS) == 0 {
            whole
        } else {
            whole + 1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn token_at(now: DateTime<Utc>) -> WarrantyToken {
        WarrantyToken::issue(
            "ab".repeat(32),
            ServerId::from(42),
            "alice".into(),
            TimeDelta::days(30),
            now,
        )
    }

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_fresh_token_claims() {
        let token = token_at(t0());
        assert_eq!(token.expires_at, t0() + TimeDelta::days(30));
        assert!(token.check_claim(&ServerId::from(42), t0()).is_ok());
    }

    #[test]
    fn test_used_beats_expired() {
        let mut token = token_at(t0());
        token.mark_used(t0());
        let later = t0() + TimeDelta::days(31);
        assert_eq!(
            token.check_claim(&ServerId::from(42), later),
            Err(ClaimRejection::AlreadyUsed)
        );
    }

    #[test]
    fn test_expired_beats_mismatch() {
        let token = token_at(t0());
        let later = t0() + TimeDelta::days(30) + TimeDelta::milliseconds(1);
        assert_eq!(
            token.check_claim(&ServerId::from(7), later),
            Err(ClaimRejection::Expired)
        );
    }

    #[test]
    fn test_expiry_boundary() {
        let token = token_at(t0());
        let edge = token.expires_at;
        assert!(token.check_claim(&ServerId::from(42), edge).is_ok());
        assert!(token.is_expired_at(edge));
        assert!(!token.is_active_at(edge));
    }

    #[test]
    fn test_mismatch_before_expiry() {
        let token = token_at(t0());
        assert_eq!(
            token.check_claim(&ServerId::from(43), t0()),
            Err(ClaimRejection::ServerMismatch)
        );
    }

    #[test]
    fn test_days_remaining_rounds_up() {
        let token = token_at(t0());
        assert_eq!(token.days_remaining(t0()), 30);
        assert_eq!(token.days_remaining(t0() + TimeDelta::hours(1)), 30);
        assert_eq!(token.days_remaining(t0() + TimeDelta::days(29) + TimeDelta::hours(23)), 1);
        assert_eq!(token.days_remaining(token.expires_at), 0);
        assert_eq!(token.days_remaining(token.expires_at + TimeDelta::hours(1)), 0);
        assert_eq!(token.days_remaining(token.expires_at + TimeDelta::days(2)), -2);
    }

    #[test]
    fn test_rejection_messages() {
        assert_eq!(ClaimRejection::NotFound.message(), "Token tidak valid");
        assert_eq!(ClaimRejection::AlreadyUsed.to_string(), "Token sudah digunakan");
    }
}
