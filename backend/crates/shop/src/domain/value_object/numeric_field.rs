//! Numeric product fields
//!
//! Admin forms post numbers either as JSON numbers or as strings. Strings
//! are read up to the first non-digit (`"512MB"` is 512); anything without a
//! leading integer is not a number.

use serde_json::Value;

use crate::domain::plan::ResourceSpec;
use crate::error::{ShopError, ShopResult};

/// Leading-integer parse of a JSON value
pub fn parse_leading_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
                .map(|f| f.trunc() as i64)
        }),
        Value::String(s) => {
            let s = s.trim_start();
            let (negative, digits) = match s.as_bytes().first() {
                Some(b'-') => (true, &s[1..]),
                Some(b'+') => (false, &s[1..]),
                _ => (false, s),
            };
            let end = digits
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(digits.len());
            let magnitude: i64 = digits[..end].parse().ok()?;
            Some(if negative { -magnitude } else { magnitude })
        }
        _ => None,
    }
}

/// Validated price and resources of a product
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductFields {
    pub price: u64,
    pub specs: ResourceSpec,
}

impl ProductFields {
    /// Checks run missing, then non-numeric, then negative.
    pub fn parse(
        price: Option<&Value>,
        ram: Option<&Value>,
        disk: Option<&Value>,
        cpu: Option<&Value>,
    ) -> ShopResult<Self> {
        let (Some(price), Some(ram), Some(disk), Some(cpu)) = (price, ram, disk, cpu) else {
            return Err(ShopError::MissingProductFields);
        };

        let parsed = [price, ram, disk, cpu].map(parse_leading_int);
        let [Some(price), Some(ram), Some(disk), Some(cpu)] = parsed else {
            return Err(ShopError::NonNumericField);
        };

        let unsigned = [price, ram, disk, cpu].map(|n| u64::try_from(n).ok());
        let [Some(price), Some(ram), Some(disk), Some(cpu)] = unsigned else {
            return Err(ShopError::NegativeField);
        };

        Ok(Self {
            price,
            specs: ResourceSpec { ram, disk, cpu },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int(&json!(42)), Some(42));
        assert_eq!(parse_leading_int(&json!(3.9)), Some(3));
        assert_eq!(parse_leading_int(&json!("  512MB")), Some(512));
        assert_eq!(parse_leading_int(&json!("-7")), Some(-7));
        assert_eq!(parse_leading_int(&json!("abc")), None);
        assert_eq!(parse_leading_int(&json!("")), None);
        assert_eq!(parse_leading_int(&json!(true)), None);
        assert_eq!(parse_leading_int(&Value::Null), None);
    }

    #[test]
    fn test_parse_fields() {
        let fields = ProductFields::parse(
            Some(&json!(0)),
            Some(&json!("1024")),
            Some(&json!(2048)),
            Some(&json!("50")),
        )
        .unwrap();
        assert_eq!(fields.price, 0);
        assert_eq!(
            fields.specs,
            ResourceSpec {
                ram: 1024,
                disk: 2048,
                cpu: 50
            }
        );
    }

    #[test]
    fn test_error_precedence() {
        let n = json!(1);
        let bad = json!("x");
        let neg = json!(-1);

        assert!(matches!(
            ProductFields::parse(None, Some(&bad), Some(&neg), Some(&n)),
            Err(ShopError::MissingProductFields)
        ));
        assert!(matches!(
            ProductFields::parse(Some(&neg), Some(&bad), Some(&n), Some(&n)),
            Err(ShopError::NonNumericField)
        ));
        assert!(matches!(
            ProductFields::parse(Some(&n), Some(&n), Some(&neg), Some(&n)),
            Err(ShopError::NegativeField)
        ));
    }
}
