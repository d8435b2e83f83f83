use serde_json::Value;

use crate::http::{routes, ApiError};
use crate::model::{AnnouncementDetail, AnnouncementList, EntityId};
use crate::store::announcements::AnnouncementsIntent;

use super::{tags, Dispatcher};

impl Dispatcher {
    pub async fn get_all_announcements(&self) -> Result<AnnouncementList, ApiError> {
        let auth = self.auth();
        let query = self.store.select(|s| s.announcements.filters.to_query());
        self.run(
            tags::GET_ALL_ANNOUNCEMENTS,
            |o| AnnouncementsIntent::GetAll(o).into(),
            self.api.get(&routes::ANNOUNCEMENTS, &auth, &query),
        )
        .await
    }

    pub async fn get_announcement(&self, id: &EntityId) -> Result<AnnouncementDetail, ApiError> {
        let auth = self.auth();
        let path = routes::announcement(id);
        self.run(
            tags::GET_SINGLE_ANNOUNCEMENT,
            |o| AnnouncementsIntent::GetOne(o).into(),
            self.api.get(&path, &auth, &[]),
        )
        .await
    }

    pub async fn create_announcement(&self, announcement: &Value) -> Result<Value, ApiError> {
        let auth = self.auth();
        self.run(
            tags::CREATE_ANNOUNCEMENT,
            |o| AnnouncementsIntent::Create(o).into(),
            self.api.post(&routes::ANNOUNCEMENTS, &auth, announcement),
        )
        .await
    }

    pub async fn edit_announcement(&self, id: &EntityId, changes: &Value) -> Result<Value, ApiError> {
        let auth = self.auth();
        let path = routes::announcement(id);
        self.run(
            tags::EDIT_ANNOUNCEMENT,
            |o| AnnouncementsIntent::Edit(o).into(),
            self.api.patch(&path, &auth, changes),
        )
        .await
    }

    pub async fn delete_announcement(&self, id: &EntityId) -> Result<Value, ApiError> {
        let auth = self.auth();
        let path = routes::announcement(id);
        self.run(
            tags::DELETE_ANNOUNCEMENT,
            |o| AnnouncementsIntent::Delete(o).into(),
            self.api.delete(&path, &auth),
        )
        .await
    }
}
