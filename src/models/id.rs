//! Backend entity identifiers

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Identifier of a backend entity.
///
/// The backend sends ids either as JSON strings or as integers. Both decode
/// to the same value, which is always serialized back as a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Default)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Percent-encoded form for use inside a URL path
    pub fn path_segment(&self) -> String {
        urlencoding::encode(&self.0).into_owned()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<u64> for EntityId {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Int(i64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => EntityId(s),
            Raw::Int(n) => EntityId(n.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_string_and_number() {
        let a: EntityId = serde_json::from_str(r#""42""#).unwrap();
        let b: EntityId = serde_json::from_str("42").unwrap();
        assert_eq!(a, b);
        assert_eq!(serde_json::to_string(&b).unwrap(), r#""42""#);
    }

    #[test]
    fn test_path_segment_is_encoded() {
        let id = EntityId::new("a b/c");
        assert_eq!(id.path_segment(), "a%20b%2Fc");
    }
}
