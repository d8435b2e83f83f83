use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{lenient, EntityId, Extra, Timestamped};

/// A two-party conversation between accounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: EntityId,
    /// Participant records. Their shape varies by endpoint version, so
    /// membership is checked against every value of each record.
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub users: Vec<serde_json::Value>,
    #[serde(
        rename = "createdAt",
        default,
        deserialize_with = "lenient::timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Conversation {
    /// True when any participant record mentions `user_id` in any field.
    pub fn involves(&self, user_id: &EntityId) -> bool {
        let needle = user_id.to_json();
        self.users.iter().any(|user| match user {
            serde_json::Value::Object(fields) => fields.values().any(|v| *v == needle),
            other => *other == needle,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: EntityId,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub content: String,
    #[serde(
        default,
        deserialize_with = "lenient::optional_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub sender_id: Option<EntityId>,
    #[serde(
        rename = "createdAt",
        default,
        deserialize_with = "lenient::timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Timestamped for Message {
    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ConversationList {
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub conversations: Vec<Conversation>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ConversationCreated {
    #[serde(default)]
    pub conversation: Option<Conversation>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MessageList {
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub messages: Vec<Message>,
}
