//! Admin user table.

use crate::model::{User, UserList};
use crate::mvi::{Intent, Reducer, StoreState};
use crate::store::{FetchStatus, FilterCriteria, Outcome};

pub const DEFAULT_FILTERS: &[(&str, &str)] = &[("search", ""), ("role", ""), ("sort", "")];

#[derive(Debug, Clone, PartialEq)]
pub struct UsersState {
    pub status: FetchStatus,
    /// Every account, as listed for administrators.
    pub users: Vec<User>,
    pub total_users: u64,
    pub filters: FilterCriteria,
}

impl Default for UsersState {
    fn default() -> Self {
        Self {
            status: FetchStatus::default(),
            users: Vec::new(),
            total_users: 0,
            filters: FilterCriteria::with_defaults(DEFAULT_FILTERS),
        }
    }
}

impl StoreState for UsersState {}

#[derive(Debug, Clone)]
pub enum UsersIntent {
    GetAll(Outcome<UserList>),
    Add(Outcome<serde_json::Value>),
    Edit(Outcome<serde_json::Value>),
    Delete(Outcome<serde_json::Value>),
    SetFilter { key: String, value: String },
}

impl Intent for UsersIntent {}

pub struct UsersReducer;

impl Reducer for UsersReducer {
    type State = UsersState;
    type Intent = UsersIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            UsersIntent::GetAll(outcome) => {
                state.status = outcome.status();
                if let Outcome::Fulfilled(list) = outcome {
                    state.users = list.users;
                    state.total_users = list.total_count;
                }
            }
            UsersIntent::Add(outcome) | UsersIntent::Edit(outcome) | UsersIntent::Delete(outcome) => {
                state.status = outcome.status();
            }
            UsersIntent::SetFilter { key, value } => state.filters.set(key, value),
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_add_keeps_table() {
        let state = UsersReducer::reduce(
            UsersState::default(),
            UsersIntent::Add(Outcome::Rejected("Email already in use".to_string())),
        );
        assert_eq!(state.status.error_message(), Some("Email already in use"));
        assert!(state.users.is_empty());
    }
}
