use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-assigned identifier.
///
/// The backend hands out integer keys for most tables but some payloads
/// carry them as strings, so both are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Int(i64),
    Str(String),
}

impl EntityId {
    /// JSON form, for comparing against untyped server fields.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            EntityId::Int(n) => serde_json::Value::from(*n),
            EntityId::Str(s) => serde_json::Value::from(s.as_str()),
        }
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Int(n) => write!(f, "{}", n),
            EntityId::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for EntityId {
    fn from(value: i64) -> Self {
        EntityId::Int(value)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        EntityId::Str(value.to_string())
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        EntityId::Str(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_numbers_and_strings() {
        let ids: Vec<EntityId> = serde_json::from_str(r#"[7, "a1"]"#).unwrap();
        assert_eq!(ids, vec![EntityId::Int(7), EntityId::from("a1")]);
        assert_eq!(ids[0].to_string(), "7");
        assert_eq!(ids[1].to_json(), serde_json::json!("a1"));
    }
}
