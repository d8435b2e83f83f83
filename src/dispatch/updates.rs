use serde_json::Value;

use crate::http::{routes, ApiError};
use crate::model::{EntityId, UpdateList};
use crate::store::updates::UpdatesIntent;

use super::{tags, Dispatcher};

impl Dispatcher {
    pub async fn get_all_updates(&self, project_id: &EntityId) -> Result<UpdateList, ApiError> {
        let auth = self.auth();
        let path = routes::project_updates(project_id);
        self.run(
            tags::GET_ALL_UPDATES,
            |o| UpdatesIntent::GetAll(o).into(),
            self.api.get(&path, &auth, &[]),
        )
        .await
    }

    /// Post a progress update, then reload the project's updates.
    pub async fn create_update(&self, project_id: &EntityId, update: &Value) -> Result<Value, ApiError> {
        let auth = self.auth();
        let path = routes::project_updates(project_id);
        let created = self
            .run(
                tags::CREATE_UPDATE,
                |o| UpdatesIntent::Create(o).into(),
                self.api.post(&path, &auth, update),
            )
            .await?;

        self.refetch(tags::GET_ALL_UPDATES, self.get_all_updates(project_id))
            .await;
        Ok(created)
    }

    pub async fn edit_update(
        &self,
        project_id: &EntityId,
        update_id: &EntityId,
        changes: &Value,
    ) -> Result<Value, ApiError> {
        let auth = self.auth();
        let path = routes::project_update(project_id, update_id);
        self.run(
            tags::EDIT_UPDATE,
            |o| UpdatesIntent::Edit(o).into(),
            self.api.patch(&path, &auth, changes),
        )
        .await
    }

    pub async fn delete_update(
        &self,
        project_id: &EntityId,
        update_id: &EntityId,
    ) -> Result<Value, ApiError> {
        let auth = self.auth();
        let path = routes::project_update(project_id, update_id);
        self.run(
            tags::DELETE_UPDATE,
            |o| UpdatesIntent::Delete(o).into(),
            self.api.delete(&path, &auth),
        )
        .await
    }
}
