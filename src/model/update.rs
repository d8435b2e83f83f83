use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{lenient, EntityId, Extra, Timestamped};

/// Progress report posted against a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectUpdate {
    pub id: EntityId,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub description: String,
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

impl Timestamped for ProjectUpdate {
    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UpdateList {
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub updates: Vec<ProjectUpdate>,
    #[serde(rename = "totalCount", default, deserialize_with = "lenient::null_as_default")]
    pub total_count: u64,
}
