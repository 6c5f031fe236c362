//! Value Objects

use serde::{Deserialize, Deserializer, Serialize};

/// Hosting-panel server identifier.
///
/// The panel reports numeric ids while browsers may post them back as
/// strings; both forms normalise to the same trimmed decimal string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ServerId(String);

impl ServerId {
    /// `None` for empty or whitespace-only input
    pub fn new(raw: impl AsRef<str>) -> Option<Self> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for ServerId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for ServerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawServerId {
    Number(u64),
    Text(String),
}

/// Deserialize an optional server id given as a JSON number or string.
///
/// Empty strings become `None` so "missing" and "blank" are treated alike.
pub fn deserialize_optional_server_id<'de, D>(deserializer: D) -> Result<Option<ServerId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawServerId>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawServerId::Number(n)) => Some(ServerId::from(n)),
        Some(RawServerId::Text(s)) => ServerId::new(s),
        None => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "deserialize_optional_server_id")]
        id: Option<ServerId>,
    }

    #[test]
    fn test_number_and_string_normalise_alike() {
        let a: Holder = serde_json::from_str(r#"{"id": 42}"#).unwrap();
        let b: Holder = serde_json::from_str(r#"{"id": " 42 "}"#).unwrap();
        assert_eq!(a.id, b.id);
        assert_eq!(a.id.unwrap().as_str(), "42");
    }

    #[test]
    fn test_blank_and_missing_are_none() {
        let blank: Holder = serde_json::from_str(r#"{"id": ""}"#).unwrap();
        let null: Holder = serde_json::from_str(r#"{"id": null}"#).unwrap();
        let missing: Holder = serde_json::from_str(r#"{}"#).unwrap();
        assert!(blank.id.is_none());
        assert!(null.id.is_none());
        assert!(missing.id.is_none());
    }

    #[test]
    fn test_serializes_as_string() {
        assert_eq!(
            serde_json::to_string(&ServerId::from(7)).unwrap(),
            "\"7\""
        );
    }
}
