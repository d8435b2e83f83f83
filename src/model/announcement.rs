use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{lenient, EntityId, Extra, Timestamped};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Announcement {
    pub id: EntityId,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub title: String,
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

impl Timestamped for Announcement {
    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AnnouncementList {
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub announcements: Vec<Announcement>,
    #[serde(rename = "totalCount", default, deserialize_with = "lenient::null_as_default")]
    pub total_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AnnouncementDetail {
    #[serde(default)]
    pub announcement: Option<Announcement>,
}
