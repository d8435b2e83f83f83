//! Progress updates of the currently open project.

use crate::model::{ProjectUpdate, UpdateList};
use crate::mvi::{Intent, Reducer, StoreState};
use crate::store::{FetchStatus, Outcome, StoreEvent, Subscriber};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UpdatesState {
    pub status: FetchStatus,
    pub updates: Vec<ProjectUpdate>,
    pub total_updates: u64,
}

impl StoreState for UpdatesState {}

#[derive(Debug, Clone)]
pub enum UpdatesIntent {
    GetAll(Outcome<UpdateList>),
    Create(Outcome<serde_json::Value>),
    Edit(Outcome<serde_json::Value>),
    Delete(Outcome<serde_json::Value>),
}

impl Intent for UpdatesIntent {}

pub struct UpdatesReducer;

impl Reducer for UpdatesReducer {
    type State = UpdatesState;
    type Intent = UpdatesIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            UpdatesIntent::GetAll(outcome) => {
                state.status = outcome.status();
                if let Outcome::Fulfilled(list) = outcome {
                    state.updates = list.updates;
                    state.total_updates = list.total_count;
                }
            }
            UpdatesIntent::Create(outcome)
            | UpdatesIntent::Edit(outcome)
            | UpdatesIntent::Delete(outcome) => state.status = outcome.status(),
        }
        state
    }
}

impl Subscriber for UpdatesState {
    fn on_event(self, event: &StoreEvent) -> Self {
        match event {
            StoreEvent::ProjectsReloaded => Self::default(),
            _ => self,
        }
    }
}
