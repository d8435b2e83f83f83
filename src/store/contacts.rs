use crate::model::{Contact, ContactList};
use crate::mvi::{Intent, Reducer, StoreState};
use crate::store::{FetchStatus, Outcome};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContactsState {
    pub status: FetchStatus,
    pub contacts: Vec<Contact>,
}

impl StoreState for ContactsState {}

#[derive(Debug, Clone)]
pub enum ContactsIntent {
    GetAll(Outcome<ContactList>),
}

impl Intent for ContactsIntent {}

pub struct ContactsReducer;

impl Reducer for ContactsReducer {
    type State = ContactsState;
    type Intent = ContactsIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ContactsIntent::GetAll(outcome) => {
                state.status = outcome.status();
                if let Outcome::Fulfilled(list) = outcome {
                    state.contacts = list.contacts;
                }
            }
        }
        state
    }
}
