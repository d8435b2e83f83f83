use serde_json::Value;

use crate::http::{routes, ApiError};
use crate::model::{EntityId, ProjectDetail, ProjectList};
use crate::store::projects::ProjectsIntent;

use super::{tags, Dispatcher};

impl Dispatcher {
    /// Full list, filtered by whatever the projects store holds right now.
    pub async fn get_all_projects(&self) -> Result<ProjectList, ApiError> {
        let auth = self.auth();
        let query = self.store.select(|s| s.projects.filters.to_query());
        self.run(
            tags::GET_ALL_PROJECTS,
            |o| ProjectsIntent::GetAll(o).into(),
            self.api.get(&routes::PROJECTS, &auth, &query),
        )
        .await
    }

    pub async fn get_project(&self, id: &EntityId) -> Result<ProjectDetail, ApiError> {
        let auth = self.auth();
        let path = routes::project(id);
        self.run(
            tags::GET_SINGLE_PROJECT,
            |o| ProjectsIntent::GetOne(o).into(),
            self.api.get(&path, &auth, &[]),
        )
        .await
    }

    pub async fn create_project(&self, project: &Value) -> Result<ProjectList, ApiError> {
        let auth = self.auth();
        self.run(
            tags::CREATE_PROJECT,
            |o| ProjectsIntent::Create(o).into(),
            self.api.post(&routes::PROJECTS, &auth, project),
        )
        .await
    }

    pub async fn edit_project(&self, id: &EntityId, changes: &Value) -> Result<Value, ApiError> {
        let auth = self.auth();
        let path = routes::project(id);
        self.run(
            tags::EDIT_PROJECT,
            |o| ProjectsIntent::Edit(o).into(),
            self.api.patch(&path, &auth, changes),
        )
        .await
    }

    pub async fn delete_project(&self, id: &EntityId) -> Result<Value, ApiError> {
        let auth = self.auth();
        let path = routes::project(id);
        self.run(
            tags::DELETE_PROJECT,
            |o| ProjectsIntent::Delete(o).into(),
            self.api.delete(&path, &auth),
        )
        .await
    }
}
