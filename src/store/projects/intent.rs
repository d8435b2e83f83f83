use crate::model::{ProjectDetail, ProjectList, UploadedImage};
use crate::mvi::Intent;
use crate::store::{Outcome, StoreEvent};

#[derive(Debug, Clone)]
pub enum ProjectsIntent {
    GetAll(Outcome<ProjectList>),
    GetOne(Outcome<ProjectDetail>),
    /// The create endpoint answers with a full list, not the new record.
    Create(Outcome<ProjectList>),
    Edit(Outcome<serde_json::Value>),
    Delete(Outcome<serde_json::Value>),

    ResetSingleProject,
    ToggleEditModeUpdate,
    SetEditModeUpdate(bool),
    ToggleAddModeUpdate,
    SetAddModeUpdate(bool),
    SetUploadedImages(Vec<UploadedImage>),
    ClearUploadedImages,
    SetFilter { key: String, value: String },
    ResetFilters,
    ClearStore,
}

impl Intent for ProjectsIntent {}

impl ProjectsIntent {
    /// Event the projects store publishes once this intent is reduced.
    pub fn published_event(&self) -> Option<StoreEvent> {
        match self {
            ProjectsIntent::GetAll(Outcome::Fulfilled(_)) => Some(StoreEvent::ProjectsReloaded),
            _ => None,
        }
    }
}
