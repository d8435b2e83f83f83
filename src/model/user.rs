use serde::{Deserialize, Serialize};

use super::{lenient, EntityId, Extra};
use crate::http::SecureString;

/// Account role as sent by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    AssistantAdmin,
    Barangay,
    #[default]
    Resident,
    Guest,
    #[serde(other)]
    Unknown,
}

impl Role {
    /// Roles allowed to publish announcements.
    pub fn can_announce(&self) -> bool {
        matches!(self, Role::Admin | Role::Barangay)
    }
}

/// An account as listed in the admin user table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: EntityId,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub role: Role,
    #[serde(
        default,
        deserialize_with = "lenient::optional_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub barangay_id: Option<EntityId>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// The signed-in account plus its access token.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SessionUser {
    pub id: EntityId,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub username: String,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub role: Role,
    #[serde(rename = "accessToken", default)]
    pub access_token: Option<SecureString>,
}

impl SessionUser {
    /// The placeholder account used before (or instead of) signing in.
    pub fn guest() -> Self {
        Self {
            id: EntityId::from("guest"),
            username: "Guest".to_string(),
            role: Role::Guest,
            access_token: None,
        }
    }
}

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub user: SessionUser,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UserList {
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub users: Vec<User>,
    #[serde(rename = "totalCount", default, deserialize_with = "lenient::null_as_default")]
    pub total_count: u64,
}

/// Administrative district.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Barangay {
    pub id: EntityId,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub name: String,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BarangayList {
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub barangays: Vec<Barangay>,
}

/// Public directory entry (hotlines, offices).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: EntityId,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub name: String,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ContactList {
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub contacts: Vec<Contact>,
}
