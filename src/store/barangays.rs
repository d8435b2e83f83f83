use crate::model::{Barangay, BarangayList};
use crate::mvi::{Intent, Reducer, StoreState};
use crate::store::{FetchStatus, Outcome};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BarangaysState {
    pub status: FetchStatus,
    pub barangays: Vec<Barangay>,
}

impl StoreState for BarangaysState {}

#[derive(Debug, Clone)]
pub enum BarangaysIntent {
    GetAll(Outcome<BarangayList>),
}

impl Intent for BarangaysIntent {}

pub struct BarangaysReducer;

impl Reducer for BarangaysReducer {
    type State = BarangaysState;
    type Intent = BarangaysIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            BarangaysIntent::GetAll(outcome) => {
                state.status = outcome.status();
                if let Outcome::Fulfilled(list) = outcome {
                    state.barangays = list.barangays;
                }
            }
        }
        state
    }
}
