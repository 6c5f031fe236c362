//! Product Id Value Object
//!
//! Catalog keys: lowercase ASCII letters, digits, `-` and `_`.

use platform::text::html_escape;
use std::fmt;

use crate::error::{ShopError, ShopResult};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductId(String);

impl ProductId {
    /// `raw` must be non-empty; emptiness is reported by the caller together
    /// with the other missing fields.
    pub fn new(raw: &str) -> ShopResult<Self> {
        let escaped = html_escape(raw);
        let valid = !escaped.is_empty()
            && escaped
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_');

        if !valid {
            return Err(ShopError::InvalidProductId);
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

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
