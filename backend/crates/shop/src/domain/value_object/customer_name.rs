//! Customer Name Value Object
//!
//! The buyer's chosen name becomes the panel username, so it is limited to
//! what the panel accepts without further mangling.
//!
//! ## Invariants
//! - 3 to 16 characters
//! - lowercase ASCII letters and digits only

use platform::text::html_escape;
use std::fmt;

use crate::error::{ShopError, ShopResult};

pub const CUSTOMER_NAME_MIN_LENGTH: usize = 3;
pub const CUSTOMER_NAME_MAX_LENGTH: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomerName(String);

impl CustomerName {
    pub fn new(raw: &str) -> ShopResult<Self> {
        let escaped = html_escape(raw);

        let len = escaped.chars().count();
        let valid_len = (CUSTOMER_NAME_MIN_LENGTH..=CUSTOMER_NAME_MAX_LENGTH).contains(&len);
        let valid_chars = escaped
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit());

        if !valid_len || !valid_chars {
            return Err(ShopError::InvalidUsername);
        }

        Ok(Self(escaped))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CustomerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(CustomerName::new("abc").is_ok());
        assert!(CustomerName::new("alice42").is_ok());
        assert!(CustomerName::new("a234567890123456").is_ok());
    }

    #[test]
    fn test_length_bounds() {
        assert!(CustomerName::new("ab").is_err());
        assert!(CustomerName::new("a2345678901234567").is_err());
    }

    #[test]
    fn test_rejects_other_characters() {
        for raw in ["Alice", "al ice", "al_ice", "al-ice", "<b>x</b>", "ãbc"] {
            assert!(
                matches!(CustomerName::new(raw), Err(ShopError::InvalidUsername)),
                "{raw} should be rejected"
            );
        }
    }
}
