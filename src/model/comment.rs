use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{lenient, EntityId, Extra, Timestamped};

/// Feedback left on a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: EntityId,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub content: String,
    #[serde(
        default,
        deserialize_with = "lenient::optional_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub commented_by: Option<EntityId>,
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

impl Timestamped for Comment {
    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}

/// Body of `GET /projects/{id}/comments`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CommentList {
    #[serde(rename = "projectComments", default, deserialize_with = "lenient::null_as_default")]
    pub project_comments: Vec<Comment>,
    #[serde(rename = "totalCount", default, deserialize_with = "lenient::null_as_default")]
    pub total_count: u64,
}

/// Body of `POST /projects/{id}/comments`. The count is authoritative.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CommentPosted {
    #[serde(rename = "totalCount", default, deserialize_with = "lenient::null_as_default")]
    pub total_count: u64,
    #[serde(default)]
    pub comment: Option<Comment>,
}

/// A reaction (like, heart, ...) on a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reaction {
    pub id: EntityId,
    #[serde(rename = "type", default, deserialize_with = "lenient::null_as_default")]
    pub kind: String,
    #[serde(
        default,
        deserialize_with = "lenient::optional_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub user_id: Option<EntityId>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Body of `GET /projects/{id}/reactions`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ReactionList {
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub reactions: Vec<Reaction>,
    #[serde(rename = "totalCount", default, deserialize_with = "lenient::null_as_default")]
    pub total_count: u64,
}
