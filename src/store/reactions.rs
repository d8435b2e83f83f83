//! Reactions on the currently open project.

use crate::model::{Reaction, ReactionList};
use crate::mvi::{Intent, Reducer, StoreState};
use crate::store::{FetchStatus, Outcome, StoreEvent, Subscriber};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReactionsState {
    pub status: FetchStatus,
    pub reactions: Vec<Reaction>,
    pub total_reactions: u64,
}

impl StoreState for ReactionsState {}

#[derive(Debug, Clone)]
pub enum ReactionsIntent {
    GetAll(Outcome<ReactionList>),
    React(Outcome<serde_json::Value>),
}

impl Intent for ReactionsIntent {}

pub struct ReactionsReducer;

impl Reducer for ReactionsReducer {
    type State = ReactionsState;
    type Intent = ReactionsIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ReactionsIntent::GetAll(outcome) => {
                state.status = outcome.status();
                if let Outcome::Fulfilled(list) = outcome {
                    state.reactions = list.reactions;
                    state.total_reactions = list.total_count;
                }
            }
            ReactionsIntent::React(outcome) => state.status = outcome.status(),
        }
        state
    }
}

impl Subscriber for ReactionsState {
    fn on_event(self, event: &StoreEvent) -> Self {
        match event {
            StoreEvent::ProjectsReloaded => Self::default(),
            _ => self,
        }
    }
}
