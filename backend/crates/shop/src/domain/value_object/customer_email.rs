//! Customer Email Value Object
//!
//! Shape check only: `local@domain.tld` with no whitespace and a single `@`.

use platform::text::html_escape;
use std::fmt;

use crate::error::{ShopError, ShopResult};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomerEmail(String);

impl CustomerEmail {
    pub fn new(raw: &str) -> ShopResult<Self> {
        let escaped = html_escape(raw);
        if !Self::is_valid_format(&escaped) {
            return Err(ShopError::InvalidEmail);
        }
        Ok(Self(escaped))
    }

    fn is_valid_format(email: &str) -> bool {
        if email.chars().any(char::is_whitespace) {
            return false;
        }

        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };
        if local.is_empty() || domain.contains('@') {
            return false;
        }

        // Some dot with at least one character on each side
        let bytes = domain.as_bytes();
        (1..bytes.len().saturating_sub(1)).any(|i| bytes[i] == b'.')
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CustomerEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        for raw in ["a@b.co", "first.last@mail.example.com", "x@y.z", "a@b..c"] {
            assert!(CustomerEmail::new(raw).is_ok(), "{raw} should be accepted");
        }
    }

    #[test]
    fn test_invalid_emails() {
        for raw in [
            "",
            "plain",
            "@b.co",
            "a@",
            "a@b",
            "a@.co",
            "a@co.",
            "a@@b.co",
            "a@b@c.co",
            "a b@c.co",
            "a@b.co\n",
        ] {
            assert!(
                matches!(CustomerEmail::new(raw), Err(ShopError::InvalidEmail)),
                "{raw:?} should be rejected"
            );
        }
    }
}
