use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{lenient, EntityId, Extra, Timestamped};

/// A municipal project.
///
/// `status` stays a raw string: the dashboard tallies only the five known
/// values and silently ignores anything else the server sends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: EntityId,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub status: String,
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

impl Timestamped for Project {
    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}

impl Project {
    pub fn status(&self) -> Option<ProjectStatus> {
        ProjectStatus::parse(&self.status)
    }
}

/// The statuses the dashboard knows how to count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectStatus {
    Completed,
    Ongoing,
    Planned,
    Cancelled,
    OnHold,
}

impl ProjectStatus {
    /// Exact, case-sensitive match on the wire value.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "completed" => Some(Self::Completed),
            "ongoing" => Some(Self::Ongoing),
            "planned" => Some(Self::Planned),
            "cancelled" => Some(Self::Cancelled),
            "on_hold" => Some(Self::OnHold),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Ongoing => "ongoing",
            Self::Planned => "planned",
            Self::Cancelled => "cancelled",
            Self::OnHold => "on_hold",
        }
    }
}

/// Body of `GET /projects` (and, observed, of `POST /projects`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProjectList {
    #[serde(default)]
    pub projects: Option<Vec<Project>>,
    #[serde(rename = "totalCount", default, deserialize_with = "lenient::null_as_default")]
    pub total_count: u64,
}

/// Body of `GET /projects/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProjectDetail {
    #[serde(default)]
    pub project: Option<Project>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_match_is_exact() {
        assert_eq!(ProjectStatus::parse("on_hold"), Some(ProjectStatus::OnHold));
        assert_eq!(ProjectStatus::parse("Planned"), None);
        assert_eq!(ProjectStatus::parse("on hold"), None);
    }

    #[test]
    fn unknown_fields_are_kept() {
        let project: Project = serde_json::from_value(serde_json::json!({
            "id": 3,
            "title": "Drainage",
            "status": "ongoing",
            "budget": 120000,
            "createdAt": "2024-03-01T08:00:00.000Z"
        }))
        .unwrap();

        assert_eq!(project.status(), Some(ProjectStatus::Ongoing));
        assert_eq!(project.extra.get("budget"), Some(&serde_json::json!(120000)));
        assert!(project.created_at.is_some());
    }

    #[test]
    fn nulls_and_loose_timestamps_do_not_fail_the_list() {
        let list: ProjectList = serde_json::from_value(serde_json::json!({
            "projects": [
                {"id": 1, "title": null, "description": null, "status": "planned",
                 "createdAt": "2024-01-02 08:00:00"},
                {"id": 2, "title": "Bridge", "status": null, "createdAt": null},
                {"id": 3, "title": "Market", "status": "ongoing", "createdAt": "soon"}
            ],
            "totalCount": 3
        }))
        .unwrap();

        let projects = list.projects.unwrap();
        assert_eq!(projects.len(), 3);
        assert_eq!(projects[0].description, "");
        assert_eq!(projects[0].title, "");
        assert_eq!(
            projects[0].created_at.map(|t| t.to_rfc3339()),
            Some("2024-01-02T08:00:00+00:00".to_string())
        );
        assert_eq!(projects[1].status(), None);
        assert!(projects[1].created_at.is_none());
        assert!(projects[2].created_at.is_none());
    }

    #[test]
    fn list_without_projects_key() {
        let list: ProjectList = serde_json::from_str(r#"{"msg": "none"}"#).unwrap();
        assert!(list.projects.is_none());
        assert_eq!(list.total_count, 0);
    }
}
