//! Payment status classification
//!
//! The gateway reports free-form status text. It is upper-cased and matched
//! by substring against an ordered table; the first matching row wins.

/// Settlement state of a gateway transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Success,
    Failed,
    Pending,
}

/// Rows are checked in order; success before failure.
const CLASSIFICATION: &[(PaymentStatus, &[&str])] = &[
    (PaymentStatus::Success, &["SUCCESS", "COMPLETED", "BERHASIL"]),
    (PaymentStatus::Failed, &["FAILED", "EXPIRED", "GAGAL"]),
];

impl PaymentStatus {
    pub fn classify(raw: &str) -> Self {
        let upper = raw.to_uppercase();
        CLASSIFICATION
            .iter()
            .find(|(_, synonyms)| synonyms.iter().any(|s| upper.contains(s)))
            .map(|(status, _)| *status)
            .unwrap_or(PaymentStatus::Pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_synonyms() {
        assert_eq!(PaymentStatus::classify("SUCCESS"), PaymentStatus::Success);
        assert_eq!(PaymentStatus::classify("completed"), PaymentStatus::Success);
        assert_eq!(
            PaymentStatus::classify("pembayaran BERHASIL"),
            PaymentStatus::Success
        );
    }

    #[test]
    fn test_failure_synonyms() {
        assert_eq!(PaymentStatus::classify("EXPIRED"), PaymentStatus::Failed);
        assert_eq!(PaymentStatus::classify("failed"), PaymentStatus::Failed);
        assert_eq!(PaymentStatus::classify("Gagal"), PaymentStatus::Failed);
    }

    #[test]
    fn test_success_checked_before_failure() {
        assert_eq!(
            PaymentStatus::classify("COMPLETED_AFTER_FAILED_ATTEMPT"),
            PaymentStatus::Success
        );
    }

    #[test]
    fn test_everything_else_pending() {
        assert_eq!(PaymentStatus::classify("WAITING"), PaymentStatus::Pending);
        assert_eq!(PaymentStatus::classify(""), PaymentStatus::Pending);
        assert_eq!(PaymentStatus::classify("pending"), PaymentStatus::Pending);
    }
}
