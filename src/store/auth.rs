//! Session state.
//!
//! Logout and session expiry are handled at the root, since both wipe
//! every store, not just this one.

use crate::http::AuthHeader;
use crate::model::{LoginResponse, Role, SessionUser};
use crate::mvi::{Intent, Reducer, StoreState};
use crate::store::{FetchStatus, Outcome};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthState {
    pub status: FetchStatus,
    pub user: Option<SessionUser>,
}

impl StoreState for AuthState {}

impl AuthState {
    /// Credential for the next request.
    pub fn auth_header(&self) -> AuthHeader {
        AuthHeader::for_session(self.user.as_ref())
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }
}

#[derive(Debug, Clone)]
pub enum AuthIntent {
    Login(Outcome<LoginResponse>),
    ContinueAsGuest,
}

impl Intent for AuthIntent {}

pub struct AuthReducer;

impl Reducer for AuthReducer {
    type State = AuthState;
    type Intent = AuthIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AuthIntent::Login(outcome) => {
                state.status = outcome.status();
                if let Outcome::Fulfilled(resp) = outcome {
                    state.user = Some(resp.user);
                }
            }
            AuthIntent::ContinueAsGuest => {
                state.status = FetchStatus::Idle;
                state.user = Some(SessionUser::guest());
            }
        }
        state
    }
}
